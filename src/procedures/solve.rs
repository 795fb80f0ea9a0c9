/*!
A procedure to determine whether the formula of a context is satisfiable.

# Overview

The solve loop alternates between propagation and decisions:
- Propagate the consequences of each valued literal.
- If no conflict is found, make a decision.
  If no decision can be made, every atom has a value and the formula is satisfiable.
- If a conflict is found before any decision, the formula is unsatisfiable.
- Otherwise, analyse the conflict, backjump, and value the literal asserted by the learnt clause.

Restarts are scheduled by the luby sequence, scaled by [luby_u](crate::config::Config::luby_u).
A restart backjumps to level zero, keeping all learnt clauses.

If a [time limit](crate::config::Config::time_limit) is set and exceeded, the solve stops with an unknown result.

# Example

```rust
# use flagsat::context::{Context, Report};
# use flagsat::config::Config;
let mut the_context = Context::from_config(Config::default());

for clause in ["p q", "-p q", "p -q", "-p -q"] {
    let clause = the_context.clause_from_string(clause).unwrap();
    let _ = the_context.add_clause(clause);
}

assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
```
*/

use std::time::Instant;

use crate::{
    context::{ContextState, GenericContext, Report},
    db::clause::ClauseSource,
    procedures::decision::DecisionOk,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// On a satisfiable report the valuation of the context is complete, and satisfies each clause.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable => return Ok(Report::Unsatisfiable),
            ContextState::Satisfiable => return Ok(Report::Satisfiable),
            _ => {}
        }

        let total_time = Instant::now();
        self.state = ContextState::Solving;

        loop {
            self.counters.total_iterations += 1;
            self.counters.time = total_time.elapsed();

            if let Some(limit) = self.config.time_limit {
                if self.counters.time > limit {
                    return Ok(Report::Unknown);
                }
            }

            match self.propagate() {
                Ok(()) => match self.make_decision() {
                    DecisionOk::Literal(decision) => {
                        self.trail.note_decision();
                        self.value_literal(decision, None);
                    }
                    DecisionOk::Exhausted => {
                        self.state = ContextState::Satisfiable;
                        break;
                    }
                },

                Err(err::BCPError::Conflict(key)) => {
                    if !self.trail.decision_is_made() {
                        self.state = ContextState::Unsatisfiable;
                        break;
                    }

                    self.counters.total_conflicts += 1;
                    self.counters.fresh_conflicts += 1;

                    let (clause, level) = self.conflict_analysis(key)?;
                    self.backjump(level);

                    let asserted = clause[0];
                    match clause.len() {
                        1 => self.value_literal(asserted, None),
                        _ => {
                            let watched = (clause[0], clause[1]);
                            let key = self.clause_db.store(clause, ClauseSource::Resolution)?;
                            self.watches.watch(watched.0, key);
                            self.watches.watch(watched.1, key);
                            self.value_literal(asserted, Some(key));
                        }
                    }

                    if self.scheduled_restart() {
                        self.counters.luby.next();
                        self.counters.fresh_conflicts = 0;
                        self.counters.restarts += 1;
                        self.backjump(0);
                    }
                }

                Err(e) => return Err(e.into()),
            }
        }

        Ok(self.report())
    }

    fn scheduled_restart(&self) -> bool {
        self.config.restart
            && self.counters.fresh_conflicts
                >= self
                    .config
                    .luby_u
                    .saturating_mul(self.counters.luby.current())
    }
}
