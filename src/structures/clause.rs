//! Clauses are disjunctions of literals.
//!
//! Anything which dereferences to a slice of [literals](CLiteral) is a clause, with a handful of useful methods.

use std::ops::Deref;

use crate::{
    db::atom::AtomDB,
    structures::{literal::CLiteral, valuation::Valuation},
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

pub trait Clause {
    /// A string of the clause, with literals in integer form.
    fn as_string(&self) -> String;

    /// The clause with literals written in terms of the external names of their atoms, terminated by `0`.
    fn as_dimacs(&self, atoms: &AtomDB) -> String;

    /// The literal asserted by the clause on the given valuation, if any.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral>;

    /// Whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    fn literals(&self) -> &[CLiteral];

    fn size(&self) -> usize;
}

impl<T: Deref<Target = [CLiteral]>> Clause for T {
    fn literals(&self) -> &[CLiteral] {
        self
    }

    fn as_string(&self) -> String {
        let mut the_string = String::from("(");
        for literal in self.literals() {
            the_string.push_str(format!(" {literal} ").as_str());
        }
        the_string += ")";
        the_string
    }

    fn as_dimacs(&self, atoms: &AtomDB) -> String {
        let mut the_string = String::new();
        for literal in self.literals() {
            let the_representation = match literal.polarity() {
                true => format!("{} ", atoms.external_name(literal.atom())),
                false => format!("-{} ", atoms.external_name(literal.atom())),
            };
            the_string.push_str(the_representation.as_str());
        }
        the_string += "0";
        the_string
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut the_literal = None;
        for literal in self.literals() {
            if let Some(existing_value) = valuation.value_of(literal.atom()) {
                match existing_value == literal.polarity() {
                    true => return None,
                    false => continue,
                }
            } else if the_literal.is_none() {
                the_literal = Some(literal);
            } else {
                return None;
            }
        }
        the_literal.copied()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.literals()
            .iter()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }

    fn size(&self) -> usize {
        self.len()
    }
}
