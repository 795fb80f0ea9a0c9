//! Abstract elements of a solve: atoms, literals, clauses, and valuations.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
