/*!
(The internal representation of) an atom (aka. a 'variable').

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.
- 'Internal' atoms are used internal to a context.
- 'External' atoms are names used during external interaction with a context, e.g. the spelling of a compiler option.

Each internal atom is a u32 *u* such that either *u* is 0, or *u - 1* is an atom.
That is, the atoms of a context are [0..*m*) for some *m*, and so may be used directly as indicies.

# Notes
- The external representation of an atom is stored in the [atom database](crate::db::atom).
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
