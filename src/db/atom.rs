/*!
A database of atom related things.

Things include:
- The current (partial) valuation, and the previous value of each atom (for phase saving).
- The decision level at which each atom was valued, and the clause which forced the value (if any).
- The activity of each atom, used to choose atoms when making decisions.
- The external name of each atom, and a map from names to atoms.

Atoms are added to the database only through [fresh_atom](AtomDB::fresh_atom), which extends each of the structures above.
*/

use std::collections::HashMap;

use crate::{
    config::{defaults, ActivityType, Config},
    db::{ClauseKey, LevelIndex},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::CLiteral,
        valuation::{CValuation, Valuation},
    },
    types::err::BuildError,
};

pub struct AtomDB {
    valuation: CValuation,
    previous_valuation: Vec<bool>,
    decision_levels: Vec<Option<LevelIndex>>,
    reasons: Vec<Option<ClauseKey>>,
    activity: Vec<ActivityType>,
    bump: ActivityType,
    names: Vec<String>,
    name_map: HashMap<String, Atom>,
}

impl AtomDB {
    pub fn new(config: &Config) -> Self {
        let capacity = defaults::DEFAULT_VARIABLE_COUNT;
        AtomDB {
            valuation: Vec::with_capacity(capacity),
            previous_valuation: Vec::with_capacity(capacity),
            decision_levels: Vec::with_capacity(capacity),
            reasons: Vec::with_capacity(capacity),
            activity: Vec::with_capacity(capacity),
            bump: config.activity_conflict,
            names: Vec::with_capacity(capacity),
            name_map: HashMap::with_capacity(capacity),
        }
    }

    /// A fresh atom, with the given external name, or the atom itself as a name if none is given.
    pub fn fresh_atom(&mut self, name: Option<&str>, previous_value: bool) -> Result<Atom, BuildError> {
        let atom = self.valuation.len() as Atom;
        if atom >= ATOM_MAX {
            return Err(BuildError::AtomsExhausted);
        }

        let name = match name {
            Some(name) => name.to_string(),
            None => atom.to_string(),
        };

        self.valuation.push(None);
        self.previous_valuation.push(previous_value);
        self.decision_levels.push(None);
        self.reasons.push(None);
        self.activity.push(0.0);
        self.name_map.insert(name.clone(), atom);
        self.names.push(name);

        Ok(atom)
    }

    pub fn atom_for_name(&self, name: &str) -> Option<Atom> {
        self.name_map.get(name).copied()
    }

    pub fn external_name(&self, atom: Atom) -> &str {
        match self.names.get(atom as usize) {
            Some(name) => name.as_str(),
            None => "?",
        }
    }

    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    pub fn decision_level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.decision_levels.get(atom as usize).copied().flatten()
    }

    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons.get(atom as usize).copied().flatten()
    }

    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation[atom as usize]
    }

    /// The value of a literal, which is the value of the atom of the literal, flipped if the literal is negative.
    pub fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// Values the atom of the literal to the polarity of the literal.
    ///
    /// No check is made on whether the atom already has a value.
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, reason: Option<ClauseKey>) {
        let index = literal.atom() as usize;
        self.valuation[index] = Some(literal.polarity());
        self.decision_levels[index] = Some(level);
        self.reasons[index] = reason;
    }

    /// Removes the value of an atom, keeping the value as the previous value of the atom.
    pub fn drop_value(&mut self, atom: Atom) {
        let index = atom as usize;
        if let Some(value) = self.valuation[index] {
            self.previous_valuation[index] = value;
        }
        self.valuation[index] = None;
        self.decision_levels[index] = None;
        self.reasons[index] = None;
    }

    /// Bumps the activity of an atom, rescaling all activity if the limit is exceeded.
    pub fn bump_activity(&mut self, atom: Atom) {
        let index = atom as usize;
        self.activity[index] += self.bump;
        if self.activity[index] > defaults::ACTIVITY_MAX {
            for activity in self.activity.iter_mut() {
                *activity /= defaults::ACTIVITY_MAX;
            }
            self.bump /= defaults::ACTIVITY_MAX;
        }
    }

    /// Decays all activity, by increasing the amount of future bumps.
    pub fn decay_activity(&mut self, config: &Config) {
        self.bump /= config.decay_factor;
    }

    pub fn activity_of(&self, atom: Atom) -> ActivityType {
        self.activity[atom as usize]
    }

    /// The atom without a value with highest activity, with ties broken by the lowest atom.
    pub fn most_active_unvalued(&self) -> Option<Atom> {
        let mut the_atom: Option<Atom> = None;
        for atom in self.valuation.unvalued_atoms() {
            match the_atom {
                Some(current) if self.activity_of(current) >= self.activity_of(atom) => {}
                _ => the_atom = Some(atom),
            }
        }
        the_atom
    }

    /// The valuation, with atoms written by external name and negative values prefixed by '-'.
    pub fn valuation_string(&self) -> String {
        self.valuation
            .iter()
            .enumerate()
            .filter_map(|(atom, value)| match value {
                None => None,
                Some(true) => Some(self.external_name(atom as Atom).to_string()),
                Some(false) => Some(format!("-{}", self.external_name(atom as Atom))),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Valuation for AtomDB {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.valuation.unvalued_atoms()
    }

    fn atom_count(&self) -> usize {
        self.valuation.len()
    }
}

#[cfg(test)]
mod atom_db_tests {
    use super::*;

    #[test]
    fn names() {
        let mut atom_db = AtomDB::new(&Config::default());
        let p = atom_db.fresh_atom(Some("p"), false).unwrap();
        let anon = atom_db.fresh_atom(None, false).unwrap();

        assert_eq!(atom_db.atom_for_name("p"), Some(p));
        assert_eq!(atom_db.external_name(anon), "1");
        assert_eq!(atom_db.count(), 2);
    }

    #[test]
    fn phase_is_saved() {
        let mut atom_db = AtomDB::new(&Config::default());
        let p = atom_db.fresh_atom(Some("p"), false).unwrap();

        atom_db.set_value(CLiteral::new(p, true), 1, None);
        assert_eq!(atom_db.value_of(p), Some(true));
        assert_eq!(atom_db.decision_level_of(p), Some(1));

        atom_db.drop_value(p);
        assert_eq!(atom_db.value_of(p), None);
        assert!(atom_db.previous_value_of(p));
    }

    #[test]
    fn activity_picks() {
        let mut atom_db = AtomDB::new(&Config::default());
        let _p = atom_db.fresh_atom(Some("p"), false).unwrap();
        let q = atom_db.fresh_atom(Some("q"), false).unwrap();

        atom_db.bump_activity(q);
        assert_eq!(atom_db.most_active_unvalued(), Some(q));

        atom_db.set_value(CLiteral::new(q, false), 0, None);
        assert_eq!(atom_db.most_active_unvalued(), Some(0));
        assert_eq!(atom_db.valuation_string(), "-q");
    }
}
