//! Recovery from a conflict.
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions above level *l - i* are undone.
//! The value of each atom undone is kept as the previous value of the atom, for phase saving.
//!
//! Passing a target level greater than or equal to the current level is safe --- nothing will happen.

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.current_level());

        for literal in self.trail.drain_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
    }
}
