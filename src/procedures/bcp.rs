/*!
Boolean constraint propagation.

# Overview

Each stored clause watches its first two literals.
So long as neither watched literal is false, the clause can neither be unit nor falsified, and there is no need to examine the clause.

When some literal is valued, its negation becomes false, and each clause watching the negation is examined:
- If the other watched literal is true, the clause is satisfied and nothing changes.
- Else, if some unwatched literal is not false, that literal becomes a watch in place of the false literal.
- Else, if the other watched literal has no value, the clause asserts that literal, which is valued with the clause as the reason.
- Else, every literal of the clause is false, and a conflict is returned.

Literals to propagate are read from the [trail](crate::db::trail), which records the position of the first literal whose consequences have not been applied.

# Invariants

The false watched literal is always moved to index 1 of the clause before further examination, and so the literal at index 0 is the literal asserted by a clause.
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Values the given literal at the current level, noting the reason for the valuation (if any).
    pub fn value_literal(&mut self, literal: CLiteral, reason: Option<ClauseKey>) {
        self.atom_db
            .set_value(literal, self.trail.current_level(), reason);
        self.trail.push(literal);
    }

    /// Applies the consequences of the given (true) literal to each clause watching its negation.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let false_literal = literal.negate();
        let mut list = self.watches.take(false_literal);

        let mut result = Ok(());
        let mut index = 0;

        'watch_loop: while index < list.len() {
            let key = list[index];
            let clause = match self.clause_db.get_mut(&key) {
                Ok(clause) => clause,
                Err(_) => {
                    log::trace!(target: targets::PROPAGATION, "Dropped watch for missing clause {key}");
                    list.swap_remove(index);
                    continue;
                }
            };

            if clause[0] == false_literal {
                clause.swap(0, 1);
            }
            if clause[1] != false_literal {
                result = Err(err::BCPError::CorruptWatch);
                break;
            }

            let first = clause[0];
            if self.atom_db.literal_value(first) == Some(true) {
                index += 1;
                continue;
            }

            for position in 2..clause.len() {
                let candidate = clause[position];
                if self.atom_db.literal_value(candidate) != Some(false) {
                    clause.swap(1, position);
                    self.watches.watch(candidate, key);
                    list.swap_remove(index);
                    continue 'watch_loop;
                }
            }

            match self.atom_db.literal_value(first) {
                None => {
                    log::trace!(target: targets::PROPAGATION, "{first} from {key}");
                    self.value_literal(first, Some(key));
                }
                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Conflict on {key}");
                    result = Err(err::BCPError::Conflict(key));
                    break;
                }
                Some(true) => {}
            }
            index += 1;
        }

        self.watches.restore(false_literal, list);
        result
    }

    /// Propagates each literal on the trail whose consequences have not yet been applied.
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            self.bcp(literal)?;
        }
        Ok(())
    }
}
