/*!
A solver, to revise a configuration so that no forbidden combination of options holds.

# Overview

A solve of a configuration proceeds in steps:
1. [Eviction](crate::sampler::eviction) of options which no value can satisfy.
2. [Encoding](crate::sampler::encoding) of the applicable rules as an avoidance formula, over interned variables.
3. Repeated queries to an [oracle](crate::oracle), each of the avoidance formula together with a fresh [random bias](crate::sampler::bias), until some query is satisfiable.
4. Write-back of the model of the satisfiable query to each interned variable of the configuration.

Options not mentioned by any applicable rule keep their value.
If no rule applies the oracle is not queried, and the configuration is unchanged (aside from eviction).

The number of queries is bounded by [attempt_limit](crate::config::SamplerConfig::attempt_limit).
If the limit is reached, the avoidance formula is checked alone, to distinguish rules which cannot all be avoided from an unlucky run of bias.

# Example

```rust
# use flagsat::config::SamplerConfig;
# use flagsat::constraints::ConstraintStore;
# use flagsat::options::{configuration_from_flags, flags_from_configuration};
# use flagsat::sampler::Solver;
let rules = "-finline -fno-unit-at-a-time\n-fpic\n";
let store = ConstraintStore::from_reader(rules.as_bytes()).unwrap();

let mut solver = Solver::from_config(store, SamplerConfig::seeded(42));
let mut configuration = configuration_from_flags("-finline -fno-unit-at-a-time -fpic -fomit-frame-pointer");

solver.solve(&mut configuration).unwrap();

assert_eq!(configuration["-fpic"], false);
assert!(configuration["-fomit-frame-pointer"]);
assert!(!(configuration["-finline"] && !configuration["-funit-at-a-time"]));
```
*/

pub mod bias;
pub mod encoding;
pub mod eviction;

use rand::{RngCore, SeedableRng};

use crate::{
    config::SamplerConfig,
    constraints::{Constraint, ConstraintStore},
    generic::minimal_pcg::MinimalPCG32,
    misc::log::targets::{self},
    options::Configuration,
    oracle::{CdclOracle, Oracle, Verdict},
    types::err::{self, ErrorKind},
};

use bias::random_bias;
use encoding::Encoding;
use eviction::evict_unconstrainable;

/// Counts of work done by a solver.
#[derive(Clone, Debug, Default)]
pub struct SampleCounters {
    /// Completed solves.
    pub solves: usize,

    /// Queries made during the most recent solve, including any final check of the avoidance formula.
    pub attempts: usize,

    /// Queries made over all solves.
    pub total_attempts: usize,
}

/// A solver, generic over the oracle queried and the source of randomness for bias.
pub struct ConfigSolver<O: Oracle, R: rand::Rng> {
    store: ConstraintStore,
    oracle: O,
    rng: R,
    config: SamplerConfig,
    pub counters: SampleCounters,
}

/// A solver using the default oracle.
pub type Solver = ConfigSolver<CdclOracle, MinimalPCG32>;

impl Solver {
    /// A solver over the store, with bias and oracle seeded from the seed of the config.
    pub fn from_config(store: ConstraintStore, config: SamplerConfig) -> Self {
        let mut rng = MinimalPCG32::seed_from_u64(config.seed);
        let oracle = CdclOracle::new(config.oracle.clone(), rng.next_u64());
        ConfigSolver::new(store, oracle, rng, config)
    }
}

impl<O: Oracle, R: rand::Rng> ConfigSolver<O, R> {
    pub fn new(store: ConstraintStore, oracle: O, rng: R, config: SamplerConfig) -> Self {
        ConfigSolver {
            store,
            oracle,
            rng,
            config,
            counters: SampleCounters::default(),
        }
    }

    /// Adds a constraint to the store of the solver, to be respected by future solves.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.store.append(constraint);
    }

    pub fn store(&self) -> &ConstraintStore {
        &self.store
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Revises the configuration in place so that no rule of the store is violated.
    ///
    /// On error the configuration may have had options evicted, but no value is changed.
    pub fn solve<'c>(&mut self, configuration: &'c mut Configuration) -> Result<&'c mut Configuration, ErrorKind> {
        self.config.validate()?;
        self.counters.attempts = 0;

        evict_unconstrainable(&self.store, configuration);

        let encoding = Encoding::new(&self.store, configuration);
        if encoding.is_empty() {
            self.counters.solves += 1;
            return Ok(configuration);
        }

        let avoidance = encoding.avoidance();

        for attempt in 1..=self.config.attempt_limit {
            self.note_attempt();

            let bias = random_bias(&encoding, &self.config, &mut self.rng);
            let query = avoidance.conjoin(&bias);

            match self.oracle.check(&query)? {
                Verdict::Model(model) => {
                    log::debug!(target: targets::ORACLE, "Satisfiable on attempt {attempt}");
                    for name in encoding.variables() {
                        let value = model.value_of(name).unwrap_or(false);
                        if let Some(entry) = configuration.get_mut(name.as_str()) {
                            *entry = value;
                        }
                    }
                    self.counters.solves += 1;
                    return Ok(configuration);
                }
                Verdict::Unsatisfiable | Verdict::Unknown => {
                    log::trace!(target: targets::ORACLE, "Attempt {attempt} failed");
                }
            }
        }

        self.note_attempt();
        match self.oracle.check(&avoidance)? {
            Verdict::Unsatisfiable => Err(err::SampleError::Unsatisfiable.into()),
            Verdict::Unknown => Err(err::SampleError::Unknown.into()),
            Verdict::Model(_) => Err(err::SampleError::AttemptsExhausted(self.config.attempt_limit).into()),
        }
    }

    fn note_attempt(&mut self) {
        self.counters.attempts += 1;
        self.counters.total_attempts += 1;
    }
}
