/*!
Configuration of a [context](crate::context) and of a [solver](crate::sampler).

- [Config] is the configuration of a context, and so of the default [oracle](crate::oracle::CdclOracle).
- [SamplerConfig] is the configuration of a solver, and includes the configuration of the oracle it builds.

Defaults are collected in [defaults].
*/

pub mod defaults;

mod sampler;
pub use sampler::SamplerConfig;

use serde::Serialize;

pub type ActivityType = f64;
pub type LubyConstant = u32;

/// Representation for the probability of choosing `true`
pub type PolarityLean = f64;

/// Representation for the probability of making a random decision
pub type RandomDecisionBias = f64;

/// The configuration of a context.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// The amount to bump the activity of an atom by, on each conflict it is involved in.
    pub activity_conflict: ActivityType,

    /// The factor by which the bump is (inversely) scaled after each conflict.
    pub decay_factor: ActivityType,

    /// The `u` value to multiply the luby sequence by when determining whether to perform a restart.
    pub luby_u: LubyConstant,

    /// Default to the last set value of an atom when choosing a value for the atom.
    pub phase_saving: bool,

    /// The probability of assigning positive polarity to an atom when freely choosing an atom.
    pub polarity_lean: PolarityLean,

    /// The probability of choosing an atom at random, rather than by activity.
    pub random_decision_bias: RandomDecisionBias,

    /// Permit (scheduled) restarts.
    pub restart: bool,

    /// The time limit for a solve, if any.
    pub time_limit: Option<std::time::Duration>,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            activity_conflict: ACTIVITY_CONFLICT,
            decay_factor: DECAY_FACTOR,
            luby_u: LUBY_U,
            phase_saving: true,
            polarity_lean: POLARITY_LEAN,
            random_decision_bias: RANDOM_DECISION_BIAS,
            restart: true,
            time_limit: None,
        }
    }
}

/// Issues with a configuration, noted when a probability is out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigIssue {
    PolarityLean,
    RandomDecisionBias,
    BiasInclusion,
    BiasPolarity,
    DecayFactor,
}

fn is_probability(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

impl Config {
    /// Checks each probability is within [0, 1], and the decay factor is within (0, 1].
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        if !is_probability(self.polarity_lean) {
            return Err(ConfigIssue::PolarityLean);
        }
        if !is_probability(self.random_decision_bias) {
            return Err(ConfigIssue::RandomDecisionBias);
        }
        if self.decay_factor <= 0.0 || self.decay_factor > 1.0 {
            return Err(ConfigIssue::DecayFactor);
        }
        Ok(())
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolarityLean => write!(f, "polarity lean must be within [0, 1]"),
            Self::RandomDecisionBias => write!(f, "random decision bias must be within [0, 1]"),
            Self::BiasInclusion => write!(f, "bias inclusion must be within [0, 1]"),
            Self::BiasPolarity => write!(f, "bias polarity must be within [0, 1]"),
            Self::DecayFactor => write!(f, "decay factor must be within (0, 1]"),
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
        assert_eq!(SamplerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn lean_out_of_range() {
        let config = Config {
            polarity_lean: 1.5,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigIssue::PolarityLean));
    }

    #[test]
    fn sampler_checks_oracle() {
        let mut config = SamplerConfig::default();
        config.oracle.decay_factor = 0.0;
        assert_eq!(config.validate(), Err(ConfigIssue::DecayFactor));
    }
}
