//! Default values of configuration options.

use crate::config::{ActivityType, LubyConstant, PolarityLean, RandomDecisionBias};

pub const ACTIVITY_CONFLICT: ActivityType = 1.0;
pub const ACTIVITY_MAX: ActivityType = 1e100;
pub const DECAY_FACTOR: ActivityType = 0.95;
pub const LUBY_U: LubyConstant = 128;
pub const POLARITY_LEAN: PolarityLean = 0.0;
pub const RANDOM_DECISION_BIAS: RandomDecisionBias = 0.0;

pub const DEFAULT_VARIABLE_COUNT: usize = 1024;

pub const ATTEMPT_LIMIT: usize = 1024;
pub const BIAS_INCLUSION: f64 = 0.5;
pub const BIAS_POLARITY: f64 = 0.5;

pub const RNG_SEED: u64 = 0;
