//! A valuation is a (partial) assignment of values to atoms.
//!
//! The canonical valuation is a vector of optional booleans, indexed by atoms.

use crate::structures::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

pub trait Valuation {
    /// The value of an atom, if the atom has a value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator through all atoms without a value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_;

    /// A count of all atoms, valued or not.
    fn atom_count(&self) -> usize;
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}

impl Valuation for Vec<Option<bool>> {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.as_slice().value_of(atom)
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.as_slice().unvalued_atoms()
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
