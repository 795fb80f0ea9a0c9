use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    structures::{atom::Atom, valuation::Valuation},
};

use super::{ContextState, Counters, Report};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls to [make_decision](GenericContext::make_decision) to appease the borrow checker.
///
/// # Example
///
/// ```rust
/// # use flagsat::context::GenericContext;
/// # use flagsat::generic::minimal_pcg::MinimalPCG32;
/// # use flagsat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config_and_rng(Config::default(), MinimalPCG32::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Watch lists for each literal.
    pub watches: Watches,

    /// The trail of valued literals.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        GenericContext {
            atom_db: AtomDB::new(&config),
            config,
            counters: Counters::default(),
            clause_db: ClauseDB::default(),
            watches: Watches::default(),
            trail: Trail::default(),
            state: ContextState::Input,
            rng,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Input | ContextState::Solving => Report::Unknown,
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
        }
    }

    /// The value of an atom on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The value of an atom, by the external name of the atom.
    pub fn value_of_name(&self, name: &str) -> Option<bool> {
        self.atom_db
            .atom_for_name(name)
            .and_then(|atom| self.atom_db.value_of(atom))
    }
}
