/*!
Methods for choosing the value of an atom.

# Overview

A decision is to value some atom *a* with value *v*, represented as the literal with atom *a* and polarity *v*.

The atom is chosen either:
- At random from the atoms without a value, with probability [random_decision_bias](crate::config::Config::random_decision_bias).
- Or, as the most active atom without a value.

If phase saving is enabled the atom is given the value it last held.
Note, an atom always has a 'previous' value, initialised randomly via [polarity_lean](crate::config::Config::polarity_lean).
Otherwise, the value is chosen at random, leaning by [polarity_lean](crate::config::Config::polarity_lean).
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    context::{ContextState, GenericContext},
    structures::{atom::Atom, literal::CLiteral, valuation::Valuation},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Chooses a literal to make a decision on, if some atom is without a value.
    pub fn make_decision(&mut self) -> DecisionOk {
        let mut rng = std::mem::take(&mut self.rng);

        let decision = match self.atom_without_value(&mut rng) {
            None => DecisionOk::Exhausted,
            Some(atom) => {
                self.counters.total_decisions += 1;
                let value = match self.config.phase_saving {
                    true => self.atom_db.previous_value_of(atom),
                    false => rng.gen_bool(self.config.polarity_lean),
                };
                DecisionOk::Literal(CLiteral::new(atom, value))
            }
        };

        self.rng = rng;
        decision
    }

    /// Some atom without a value, if one exists.
    pub fn atom_without_value(&self, rng: &mut impl Rng) -> Option<Atom> {
        match rng.gen_bool(self.config.random_decision_bias) {
            true => self.atom_db.unvalued_atoms().choose(rng),
            false => self.atom_db.most_active_unvalued(),
        }
    }

    /// Removes all decisions made, and their consequences.
    ///
    /// Clauses may again be added to the context after decisions are cleared.
    pub fn clear_decisions(&mut self) {
        self.backjump(0);
        if self.state != ContextState::Unsatisfiable {
            self.state = ContextState::Input;
        }
    }
}
