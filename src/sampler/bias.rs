/*!
Random bias, to spread solutions across the space of configurations.

For each applicable rule with more than one literal, each literal of the rule contributes to the bias with probability [bias_inclusion](crate::config::SamplerConfig::bias_inclusion).
A contributing literal asserts its variable true with probability [bias_polarity](crate::config::SamplerConfig::bias_polarity), and false otherwise, regardless of the polarity of the literal.

Rules with a single literal never contribute, as such a rule already fixes the value of its variable.
A variable may contribute more than once, and with different values, in which case the bias is unsatisfiable and a fresh bias is drawn.
*/

use rand::Rng;

use crate::{
    config::SamplerConfig,
    misc::log::targets::{self},
    oracle::{Formula, NamedLiteral},
    sampler::encoding::Encoding,
};

/// A conjunction of unit clauses, drawn at random over the variables of the encoding.
pub fn random_bias(encoding: &Encoding, config: &SamplerConfig, rng: &mut impl Rng) -> Formula {
    let mut bias = Formula::default();

    for rule in encoding.rules().iter().filter(|rule| rule.len() > 1) {
        for literal in rule {
            if !rng.gen_bool(config.bias_inclusion) {
                continue;
            }
            let value = rng.gen_bool(config.bias_polarity);
            if let Some(name) = encoding.variables().get_index(literal.variable) {
                bias.add_unit(NamedLiteral::new(name.as_str(), value));
            }
        }
    }

    log::trace!(target: targets::BIAS, "Bias: {bias}");
    bias
}

#[cfg(test)]
mod bias_tests {
    use rand::SeedableRng;

    use super::*;
    use crate::{
        constraints::ConstraintStore, generic::minimal_pcg::MinimalPCG32,
        options::configuration_from_flags,
    };

    #[test]
    fn unit_rules_do_not_bias() {
        let mut store = ConstraintStore::default();
        store.append(vec!["-fA".to_string()]);
        let configuration = configuration_from_flags("-fA");
        let encoding = Encoding::new(&store, &configuration);

        let mut rng = MinimalPCG32::seed_from_u64(3);
        for _ in 0..32 {
            assert!(random_bias(&encoding, &SamplerConfig::default(), &mut rng).is_empty());
        }
    }

    #[test]
    fn certain_inclusion() {
        let mut store = ConstraintStore::default();
        store.append(vec!["-fA".to_string(), "-fno-B".to_string()]);
        let configuration = configuration_from_flags("-fA -fB");
        let encoding = Encoding::new(&store, &configuration);

        let config = SamplerConfig {
            bias_inclusion: 1.0,
            bias_polarity: 1.0,
            ..SamplerConfig::default()
        };
        let mut rng = MinimalPCG32::seed_from_u64(3);
        let bias = random_bias(&encoding, &config, &mut rng);
        assert_eq!(bias.to_string(), "(-fA) & (-fB)");
    }

    #[test]
    fn no_inclusion() {
        let mut store = ConstraintStore::default();
        store.append(vec!["-fA".to_string(), "-fB".to_string()]);
        let configuration = configuration_from_flags("-fA -fB");
        let encoding = Encoding::new(&store, &configuration);

        let config = SamplerConfig {
            bias_inclusion: 0.0,
            ..SamplerConfig::default()
        };
        let mut rng = MinimalPCG32::seed_from_u64(3);
        assert!(random_bias(&encoding, &config, &mut rng).is_empty());
    }
}
