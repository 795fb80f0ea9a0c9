/*!
Methods for building a context: adding atoms and clauses.

Clauses are added through [add_clause](GenericContext::add_clause), which:
- Removes duplicate literals, and skips tautologies.
- Strengthens the clause by removing any literal false before any decision, and skips clauses already satisfied.
- Values the literal of a unit clause directly, rather than storing the clause.

Atoms may be anonymous, or named through [ensure_atom](GenericContext::ensure_atom).
Named atoms are how an [oracle](crate::oracle) relates the options of a configuration to a context.

# Example

```rust
# use flagsat::context::{Context, Report};
# use flagsat::config::Config;
# use flagsat::builder::ClauseOk;
let mut the_context = Context::from_config(Config::default());

let clause = the_context.clause_from_string("p -q").unwrap();
assert_eq!(the_context.add_clause(clause), Ok(ClauseOk::Added));

let tautology = the_context.clause_from_string("p -p").unwrap();
assert_eq!(the_context.add_clause(tautology), Ok(ClauseOk::Tautology));

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/

use rand::Rng;

use crate::{
    context::{ContextState, GenericContext},
    db::clause::ClauseSource,
    structures::{atom::Atom, clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

/// Ok results of adding a clause to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored.
    Added,

    /// The clause was a unit, and its literal was valued.
    Unit,

    /// The clause was satisfied before any decision, and so skipped.
    Satisfied,

    /// The clause contained some literal and its negation, and so skipped.
    Tautology,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    fn fresh_atom_fundamental(&mut self, name: Option<&str>) -> Result<Atom, ErrorKind> {
        let previous_value = self.rng.gen_bool(self.config.polarity_lean);
        let atom = self.atom_db.fresh_atom(name, previous_value)?;
        self.watches.fresh_atom();
        Ok(atom)
    }

    /// A fresh anonymous atom.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        self.fresh_atom_fundamental(None)
    }

    /// The atom with the given external name, created if there is no such atom.
    pub fn ensure_atom(&mut self, name: &str) -> Result<Atom, ErrorKind> {
        if name.is_empty() {
            return Err(err::ParseError::Empty.into());
        }
        match self.atom_db.atom_for_name(name) {
            Some(atom) => Ok(atom),
            None => self.fresh_atom_fundamental(Some(name)),
        }
    }

    /// A literal from a string, with a leading '-' marking a negative literal.
    pub fn literal_from_string(&mut self, string: &str) -> Result<CLiteral, ErrorKind> {
        let trimmed_string = string.trim();
        if trimmed_string.is_empty() {
            return Err(err::ParseError::Empty.into());
        }
        if trimmed_string == "-" {
            return Err(err::ParseError::Negation.into());
        }

        let (name, polarity) = match trimmed_string.strip_prefix('-') {
            Some(name) => (name, false),
            None => (trimmed_string, true),
        };

        let atom = self.ensure_atom(name)?;
        Ok(CLiteral::new(atom, polarity))
    }

    /// A clause from a string of whitespace separated literals.
    pub fn clause_from_string(&mut self, string: &str) -> Result<CClause, ErrorKind> {
        let mut the_clause = CClause::default();
        for string_literal in string.split_whitespace() {
            the_clause.push(self.literal_from_string(string_literal)?);
        }
        if the_clause.is_empty() {
            return Err(err::ParseError::Empty.into());
        }
        Ok(the_clause)
    }

    /// Adds a clause to the context.
    ///
    /// Clauses may only be added before any decision has been made.
    /// See [clear_decisions](GenericContext::clear_decisions) to return to such a state after a solve.
    pub fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, ErrorKind> {
        if self.trail.decision_is_made() {
            return Err(err::ClauseDBError::DecisionMade.into());
        }
        if self.state == ContextState::Unsatisfiable {
            return Err(err::BuildError::Unsatisfiable.into());
        }

        let mut clause = clause;
        clause.sort_unstable();
        clause.dedup();

        if clause.is_empty() {
            return Err(err::ClauseDBError::EmptyClause.into());
        }

        if clause
            .iter()
            .any(|literal| literal.atom() as usize >= self.atom_db.count())
        {
            return Err(err::BuildError::UnknownAtom.into());
        }

        // As literals are ordered by atom, a literal and its negation are adjacent.
        if clause
            .windows(2)
            .any(|pair| pair[0].atom() == pair[1].atom())
        {
            return Ok(ClauseOk::Tautology);
        }

        let mut strengthened_clause = CClause::with_capacity(clause.len());
        for literal in clause {
            match self.atom_db.literal_value(literal) {
                None => strengthened_clause.push(literal),
                Some(true) => return Ok(ClauseOk::Satisfied),
                Some(false) => {}
            }
        }

        self.state = ContextState::Input;

        match strengthened_clause.len() {
            0 => {
                self.state = ContextState::Unsatisfiable;
                Err(err::BuildError::Unsatisfiable.into())
            }
            1 => {
                self.value_literal(strengthened_clause[0], None);
                Ok(ClauseOk::Unit)
            }
            _ => {
                let watched = (strengthened_clause[0], strengthened_clause[1]);
                let key = self
                    .clause_db
                    .store(strengthened_clause, ClauseSource::Original)?;
                self.watches.watch(watched.0, key);
                self.watches.watch(watched.1, key);
                Ok(ClauseOk::Added)
            }
        }
    }
}
