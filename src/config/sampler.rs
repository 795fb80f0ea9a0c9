use serde::Serialize;

use crate::config::{defaults, is_probability, Config, ConfigIssue};

/// The configuration of a [solver](crate::sampler).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SamplerConfig {
    /// The maximum number of biased queries made to the oracle during a single solve.
    pub attempt_limit: usize,

    /// The probability a literal of a (non-unit) rule contributes to the bias of an attempt.
    pub bias_inclusion: f64,

    /// The probability a literal which contributes to the bias is asserted, rather than negated.
    pub bias_polarity: f64,

    /// The seed of the source of randomness for bias, and for the oracle.
    pub seed: u64,

    /// The configuration of the oracle.
    pub oracle: Config,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            attempt_limit: defaults::ATTEMPT_LIMIT,
            bias_inclusion: defaults::BIAS_INCLUSION,
            bias_polarity: defaults::BIAS_POLARITY,
            seed: defaults::RNG_SEED,
            oracle: Config::default(),
        }
    }
}

impl SamplerConfig {
    /// A default configuration with the given seed.
    pub fn seeded(seed: u64) -> Self {
        SamplerConfig {
            seed,
            ..SamplerConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigIssue> {
        if !is_probability(self.bias_inclusion) {
            return Err(ConfigIssue::BiasInclusion);
        }
        if !is_probability(self.bias_polarity) {
            return Err(ConfigIssue::BiasPolarity);
        }
        self.oracle.validate()
    }
}
