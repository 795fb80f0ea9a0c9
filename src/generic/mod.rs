//! Generic structures, used by a context though not specific to it.

pub mod luby;
pub mod minimal_pcg;
