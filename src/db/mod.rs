/*!
Databases for holding information relevant to a solve.

- [The atom database](crate::db::atom)
  + Details of atoms, such as their value, the level at which they were valued, and the clause by which they were valued (if any).
- [The clause database](crate::db::clause)
  + Original and learned clauses, accessed through [keys](ClauseKey).
- [The trail](crate::db::trail)
  + The literals valued during a solve, in order, split into decision levels.
- [Watches](crate::db::watches)
  + For each literal, the clauses in which the literal is watched.

Unit clauses are not stored, and instead are valued directly on the trail before any decision is made.
*/

pub mod atom;
pub mod clause;
pub mod trail;
pub mod watches;

/// The index of a decision level.
pub type LevelIndex = u32;

/// A key to access a clause stored in the [clause database](crate::db::clause).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseKey {
    /// A clause given as part of a formula.
    Original(slotmap::DefaultKey),

    /// A clause learned through conflict analysis.
    Learned(slotmap::DefaultKey),
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use slotmap::Key;
        match self {
            Self::Original(key) => write!(f, "Original({})", key.data().as_ffi()),
            Self::Learned(key) => write!(f, "Learned({})", key.data().as_ffi()),
        }
    }
}
