/*!
Procedures which make up a solve.

- [bcp](crate::procedures::bcp) --- Boolean constraint propagation over watched literals.
- [decision](crate::procedures::decision) --- Choosing an atom to value, and the value.
- [analysis](crate::procedures::analysis) --- Learning a clause from a conflict.
- [backjump](crate::procedures::backjump) --- Undoing decisions, and their consequences.
- [solve](crate::procedures::solve) --- The loop which ties the above together.

Each procedure is implemented as a collection of methods on a [context](crate::context::GenericContext).
*/

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod solve;
