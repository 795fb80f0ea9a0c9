//! A library for sampling configurations of boolean compiler options which avoid forbidden combinations of options.
//!
//! flagsat supports compiler fuzzing/testing campaigns, where many legal combinations of (for example) optimization flags are to be exercised.
//! Given a configuration, with a value for each option, and a collection of forbidden combinations, a [solver](crate::sampler) returns a revised configuration in which no forbidden combination holds.
//! And, as the revision is biased at random, repeated solves explore different regions of the space of legal configurations rather than settling on a single fixed configuration.
//!
//! # Orientation
//!
//! - [options] fixes the spelling of options (`-fX` and `-fno-X`) and the representation of a configuration.
//! - [constraints] stores forbidden combinations, typically read from a rules file.
//! - [sampler] encodes the forbidden combinations as a formula, and repeatedly asks an [oracle] for a model of the formula together with some random bias.
//! - [oracle] is the interface to a satisfiability checker, with a default implementation over the conflict-driven clause-learning [context].
//!
//! # Example
//!
//! ```rust
//! # use flagsat::config::SamplerConfig;
//! # use flagsat::constraints::ConstraintStore;
//! # use flagsat::options::configuration_from_flags;
//! # use flagsat::sampler::Solver;
//! let mut store = ConstraintStore::default();
//! store.append(vec!["-fA".to_string(), "-fB".to_string()]);
//!
//! let mut solver = Solver::from_config(store, SamplerConfig::default());
//!
//! let mut configuration = configuration_from_flags("-fA -fB -fno-C");
//! assert!(solver.solve(&mut configuration).is_ok());
//!
//! assert!(!(configuration["-fA"] && configuration["-fB"]));
//! assert_eq!(configuration.get("-fC"), Some(&false));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) and the `log` feature of the binary:
//! - Logs related to bias can be filtered with `RUST_LOG=bias …`
//! - Logs of each oracle query can be found with `RUST_LOG=oracle=debug …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

pub mod constraints;
pub mod options;
pub mod oracle;
pub mod sampler;
