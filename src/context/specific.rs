use crate::{config::Config, generic::minimal_pcg::MinimalPCG32};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// A context with the default seed.
    pub fn from_config(config: Config) -> Self {
        Self::from_config_and_rng(config, MinimalPCG32::default())
    }

    /// A context whose decisions are made with rng from the given seed.
    pub fn from_config_seeded(config: Config, seed: u64) -> Self {
        Self::from_config_and_rng(config, MinimalPCG32::seed_from_u64(seed))
    }
}
