/*!
The trail of literals valued during a solve.

Literals are recorded in the order they were valued, and the trail is split into decision levels by noting the position at which each decision was made.
Literals before the first decision form level zero, i.e. those literals which hold regardless of any decision.

The trail doubles as a queue of literals to propagate, with the queue head marking the first literal whose consequences have not been applied.
*/

use crate::{db::LevelIndex, structures::literal::CLiteral};

#[derive(Default)]
pub struct Trail {
    literals: Vec<CLiteral>,
    level_starts: Vec<usize>,
    q_head: usize,
}

impl Trail {
    pub fn current_level(&self) -> LevelIndex {
        self.level_starts.len() as LevelIndex
    }

    pub fn decision_is_made(&self) -> bool {
        !self.level_starts.is_empty()
    }

    /// Opens a fresh decision level, to which the next literal recorded is the decision.
    pub fn note_decision(&mut self) {
        self.level_starts.push(self.literals.len());
    }

    pub fn push(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The next literal to propagate, if any, advancing the queue.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        let literal = self.literals.get(self.q_head).copied();
        if literal.is_some() {
            self.q_head += 1;
        }
        literal
    }

    /// Removes all literals above the target level, returning those literals.
    ///
    /// The queue head is moved to the end of the remaining trail, as all consequences of the remaining literals have been applied.
    pub fn drain_above(&mut self, target: LevelIndex) -> Vec<CLiteral> {
        let target = target as usize;
        if target >= self.level_starts.len() {
            return Vec::default();
        }
        let start = self.level_starts[target];
        self.level_starts.truncate(target);
        let dropped = self.literals.split_off(start);
        self.q_head = self.literals.len();
        dropped
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;

    #[test]
    fn levels() {
        let mut trail = Trail::default();
        trail.push(CLiteral::new(0, true));
        assert_eq!(trail.current_level(), 0);

        trail.note_decision();
        trail.push(CLiteral::new(1, false));
        trail.push(CLiteral::new(2, true));
        assert_eq!(trail.current_level(), 1);

        trail.note_decision();
        trail.push(CLiteral::new(3, true));
        assert_eq!(trail.current_level(), 2);

        let dropped = trail.drain_above(1);
        assert_eq!(dropped, vec![CLiteral::new(3, true)]);
        assert_eq!(trail.current_level(), 1);

        let dropped = trail.drain_above(0);
        assert_eq!(dropped.len(), 2);
        assert!(!trail.decision_is_made());
        assert_eq!(trail.literals(), &[CLiteral::new(0, true)]);
        assert_eq!(trail.next_to_propagate(), None);
    }
}
