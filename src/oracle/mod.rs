/*!
An interface to satisfiability checkers, and a default implementation.

A [Formula] is a conjunction of clauses over [named literals](NamedLiteral), where the name of a literal is the name of an option.
An [Oracle] checks a formula, and returns a [Verdict]: either a [Model] of the formula, or that the formula is unsatisfiable, or that satisfiability could not be determined.

The default oracle, [CdclOracle], builds a fresh [context](crate::context) for each check.
Each context is seeded from the stream of the oracle, so checks of the same formula may return different models while a sequence of checks is reproducible.

# Example

```rust
# use flagsat::oracle::*;
# use flagsat::config::Config;
let mut formula = Formula::default();
formula.add_clause(vec![NamedLiteral::new("-fA", false), NamedLiteral::new("-fB", false)]);
formula.add_unit(NamedLiteral::new("-fA", true));

let mut oracle = CdclOracle::new(Config::default(), 7);
match oracle.check(&formula) {
    Ok(Verdict::Model(model)) => {
        assert_eq!(model.value_of("-fA"), Some(true));
        assert_eq!(model.value_of("-fB"), Some(false));
    }
    _ => panic!("expected a model"),
}
```
*/

use std::collections::HashMap;

use rand::RngCore;
use rand::SeedableRng;

use crate::{
    config::Config,
    context::{Context, Report},
    generic::minimal_pcg::MinimalPCG32,
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

/// A literal, as the name of an atom and a polarity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedLiteral {
    pub name: String,
    pub polarity: bool,
}

impl NamedLiteral {
    pub fn new(name: impl Into<String>, polarity: bool) -> Self {
        NamedLiteral {
            name: name.into(),
            polarity,
        }
    }

    pub fn negate(&self) -> Self {
        NamedLiteral {
            name: self.name.clone(),
            polarity: !self.polarity,
        }
    }
}

impl std::fmt::Display for NamedLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.name),
            false => write!(f, "!{}", self.name),
        }
    }
}

/// A formula in conjunctive normal form, over named literals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Vec<NamedLiteral>>,
}

impl Formula {
    pub fn add_clause(&mut self, clause: Vec<NamedLiteral>) {
        self.clauses.push(clause);
    }

    pub fn add_unit(&mut self, literal: NamedLiteral) {
        self.clauses.push(vec![literal]);
    }

    /// The conjunction of this formula and another.
    pub fn conjoin(&self, other: &Formula) -> Formula {
        let mut clauses = Vec::with_capacity(self.clauses.len() + other.clauses.len());
        clauses.extend_from_slice(&self.clauses);
        clauses.extend_from_slice(&other.clauses);
        Formula { clauses }
    }

    pub fn clauses(&self) -> &[Vec<NamedLiteral>] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clause_strings = self
            .clauses
            .iter()
            .map(|clause| {
                let literals = clause.iter().map(|l| l.to_string()).collect::<Vec<_>>();
                format!("({})", literals.join(" | "))
            })
            .collect::<Vec<_>>();
        write!(f, "{}", clause_strings.join(" & "))
    }
}

/// A valuation of the names of a formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    values: HashMap<String, bool>,
}

impl Model {
    pub fn value_of(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.values.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether each clause of the formula has some literal true on the model.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula.clauses().iter().all(|clause| {
            clause
                .iter()
                .any(|literal| self.value_of(&literal.name) == Some(literal.polarity))
        })
    }
}

/// The result of a check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Model(Model),
    Unsatisfiable,
    Unknown,
}

/// A satisfiability checker.
pub trait Oracle {
    /// Checks the satisfiability of the formula.
    ///
    /// A returned model values every name in the formula.
    fn check(&mut self, formula: &Formula) -> Result<Verdict, ErrorKind>;
}

/// An oracle backed by a [context](crate::context).
pub struct CdclOracle {
    config: Config,
    rng: MinimalPCG32,
    checks: usize,
}

impl CdclOracle {
    /// An oracle whose contexts are built from the given config, and seeded from a stream with the given seed.
    pub fn new(config: Config, seed: u64) -> Self {
        CdclOracle {
            config,
            rng: MinimalPCG32::seed_from_u64(seed),
            checks: 0,
        }
    }

    /// A count of checks made.
    pub fn checks(&self) -> usize {
        self.checks
    }
}

impl Oracle for CdclOracle {
    fn check(&mut self, formula: &Formula) -> Result<Verdict, ErrorKind> {
        self.config.validate()?;
        self.checks += 1;

        let mut the_context = Context::from_config_seeded(self.config.clone(), self.rng.next_u64());

        for clause in formula.clauses() {
            if clause.is_empty() {
                log::debug!(target: targets::ORACLE, "Empty clause in query");
                return Ok(Verdict::Unsatisfiable);
            }

            let mut the_clause = CClause::with_capacity(clause.len());
            for literal in clause {
                let atom = the_context.ensure_atom(&literal.name)?;
                the_clause.push(CLiteral::new(atom, literal.polarity));
            }

            match the_context.add_clause(the_clause) {
                Ok(_) => {}
                Err(ErrorKind::Build(err::BuildError::Unsatisfiable)) => {
                    log::debug!(target: targets::ORACLE, "Query unsatisfiable while building");
                    return Ok(Verdict::Unsatisfiable);
                }
                Err(e) => return Err(e),
            }
        }

        let report = the_context.solve()?;
        log::debug!(target: targets::ORACLE,
            "Query of {} clauses: {report} after {} conflicts",
            formula.clause_count(),
            the_context.counters.total_conflicts
        );

        match report {
            Report::Satisfiable => {
                let mut model = Model::default();
                for clause in formula.clauses() {
                    for literal in clause {
                        let value = the_context.value_of_name(&literal.name).unwrap_or(false);
                        model.set(literal.name.as_str(), value);
                    }
                }
                Ok(Verdict::Model(model))
            }
            Report::Unsatisfiable => Ok(Verdict::Unsatisfiable),
            Report::Unknown => Ok(Verdict::Unknown),
        }
    }
}

#[cfg(test)]
mod oracle_tests {
    use super::*;

    fn literal(name: &str, polarity: bool) -> NamedLiteral {
        NamedLiteral::new(name, polarity)
    }

    #[test]
    fn empty_formula() {
        let mut oracle = CdclOracle::new(Config::default(), 0);
        assert_eq!(oracle.check(&Formula::default()), Ok(Verdict::Model(Model::default())));
    }

    #[test]
    fn contradictory_units() {
        let mut formula = Formula::default();
        formula.add_unit(literal("p", true));
        formula.add_unit(literal("p", false));

        let mut oracle = CdclOracle::new(Config::default(), 0);
        assert_eq!(oracle.check(&formula), Ok(Verdict::Unsatisfiable));
        assert_eq!(oracle.checks(), 1);
    }

    #[test]
    fn empty_clause() {
        let mut formula = Formula::default();
        formula.add_clause(Vec::default());

        let mut oracle = CdclOracle::new(Config::default(), 0);
        assert_eq!(oracle.check(&formula), Ok(Verdict::Unsatisfiable));
    }

    #[test]
    fn conjoin_keeps_order() {
        let mut a = Formula::default();
        a.add_unit(literal("p", true));
        let mut b = Formula::default();
        b.add_clause(vec![literal("q", false), literal("r", true)]);

        let both = a.conjoin(&b);
        assert_eq!(both.clause_count(), 2);
        assert_eq!(both.to_string(), "(p) & (!q | r)");
    }

    #[test]
    fn models_satisfy() {
        let mut formula = Formula::default();
        formula.add_clause(vec![literal("p", true), literal("q", true), literal("r", true)]);
        formula.add_clause(vec![literal("p", false), literal("q", false)]);
        formula.add_clause(vec![literal("q", false), literal("r", false)]);
        formula.add_clause(vec![literal("p", false), literal("r", false)]);

        let mut oracle = CdclOracle::new(Config::default(), 11);
        for _ in 0..16 {
            match oracle.check(&formula) {
                Ok(Verdict::Model(model)) => {
                    assert_eq!(model.len(), 3);
                    assert!(model.satisfies(&formula));
                }
                other => panic!("unexpected verdict {other:?}"),
            }
        }
    }
}
