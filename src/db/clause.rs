/*!
A database of clauses.

Clauses are stored in one of two [slotmaps](slotmap), distinguished by whether the clause is original to the formula or learned through analysis.
Each clause is accessed through a [ClauseKey], which records the slotmap the clause is stored in.

Unit clauses are never stored, and neither are empty clauses.
The first two literals of a stored clause are the watched literals of the clause.
*/

use slotmap::{DefaultKey, SlotMap};

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
    types::err::ClauseDBError,
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// The clause was given as part of a formula.
    Original,

    /// The clause was learned through conflict analysis.
    Resolution,
}

#[derive(Default)]
pub struct ClauseDB {
    original: SlotMap<DefaultKey, CClause>,
    learned: SlotMap<DefaultKey, CClause>,
}

impl ClauseDB {
    /// Stores a clause of at least two literals, returning the key to the clause.
    pub fn store(&mut self, clause: CClause, source: ClauseSource) -> Result<ClauseKey, ClauseDBError> {
        if clause.len() < 2 {
            return Err(ClauseDBError::EmptyClause);
        }
        log::trace!(target: targets::CLAUSE_DB, "Storing {source:?} clause {}", clause.as_string());

        let key = match source {
            ClauseSource::Original => ClauseKey::Original(self.original.insert(clause)),
            ClauseSource::Resolution => ClauseKey::Learned(self.learned.insert(clause)),
        };
        Ok(key)
    }

    pub fn get(&self, key: &ClauseKey) -> Result<&CClause, ClauseDBError> {
        match key {
            ClauseKey::Original(key) => self.original.get(*key),
            ClauseKey::Learned(key) => self.learned.get(*key),
        }
        .ok_or(ClauseDBError::Missing)
    }

    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut CClause, ClauseDBError> {
        match key {
            ClauseKey::Original(key) => self.original.get_mut(*key),
            ClauseKey::Learned(key) => self.learned.get_mut(*key),
        }
        .ok_or(ClauseDBError::Missing)
    }

    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    /// All stored clauses, original clauses first.
    pub fn all_clauses(&self) -> impl Iterator<Item = (ClauseKey, &CClause)> {
        self.original
            .iter()
            .map(|(key, clause)| (ClauseKey::Original(key), clause))
            .chain(
                self.learned
                    .iter()
                    .map(|(key, clause)| (ClauseKey::Learned(key), clause)),
            )
    }
}
