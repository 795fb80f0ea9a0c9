/*!
Watch lists.

For each literal, a list of keys to the clauses in which the literal is watched.
When a literal becomes false the clauses on its watch list are examined during [BCP](crate::procedures::bcp), and either a fresh watch is found, a literal is asserted, or a conflict is noted.
*/

use crate::{db::ClauseKey, structures::literal::CLiteral};

#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<ClauseKey>>,
}

impl Watches {
    /// Extends the watch lists to cover a fresh atom.
    pub fn fresh_atom(&mut self) {
        self.lists.push(Vec::default());
        self.lists.push(Vec::default());
    }

    pub fn watch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.lists[literal.index()].push(key);
    }

    /// Takes the watch list of a literal, leaving an empty list in its place.
    pub fn take(&mut self, literal: CLiteral) -> Vec<ClauseKey> {
        std::mem::take(&mut self.lists[literal.index()])
    }

    /// Restores a (taken) watch list, keeping any watches added in the meantime.
    pub fn restore(&mut self, literal: CLiteral, mut list: Vec<ClauseKey>) {
        let current = &mut self.lists[literal.index()];
        list.append(current);
        *current = list;
    }

    pub fn list(&self, literal: CLiteral) -> &[ClauseKey] {
        &self.lists[literal.index()]
    }
}
