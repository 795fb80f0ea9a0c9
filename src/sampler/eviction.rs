/*!
Eviction of options which no configuration can satisfy.

If some rule forbids `-fX` alone and another rule forbids `-fno-X` alone, every value of the option violates some rule.
Such options are removed from the configuration before encoding, in two passes:
- First, the spellings forbidden alone are collected.
- Second, each option with both spellings forbidden alone is removed, under either spelling.

Collecting before removing ensures the result does not depend on the order of the rules.
*/

use std::collections::HashSet;

use crate::{
    constraints::ConstraintStore,
    misc::log::targets::{self},
    options::{negation_of, Configuration},
};

/// Removes each option of the configuration whose spellings are both forbidden alone, returning the options removed.
pub fn evict_unconstrainable(store: &ConstraintStore, configuration: &mut Configuration) -> Vec<String> {
    let forbidden_alone = store
        .iter()
        .filter(|constraint| constraint.len() == 1)
        .map(|constraint| constraint[0].as_str())
        .collect::<HashSet<_>>();

    let mut evicted = Vec::default();
    for spelling in &forbidden_alone {
        let negation = negation_of(spelling);
        if negation == *spelling || !forbidden_alone.contains(negation.as_str()) {
            continue;
        }

        for key in [spelling.to_string(), negation] {
            if configuration.shift_remove(&key).is_some() {
                log::info!(target: targets::EVICTION, "Evicted {key}");
                evicted.push(key);
            }
        }
    }
    evicted
}

#[cfg(test)]
mod eviction_tests {
    use super::*;
    use crate::options::configuration_from_flags;

    fn store_of(rules: &[&[&str]]) -> ConstraintStore {
        let mut store = ConstraintStore::default();
        for rule in rules {
            store.append(rule.iter().map(|s| s.to_string()).collect());
        }
        store
    }

    #[test]
    fn both_polarities_forbidden() {
        let store = store_of(&[&["-fX"], &["-fno-X"], &["-fY"]]);
        let mut configuration = configuration_from_flags("-fX -fno-Y -fZ");

        let evicted = evict_unconstrainable(&store, &mut configuration);

        assert_eq!(evicted, vec!["-fX"]);
        assert_eq!(configuration.keys().collect::<Vec<_>>(), vec!["-fY", "-fZ"]);
    }

    #[test]
    fn order_independent() {
        let store = store_of(&[&["-fno-X"], &["-fA", "-fB"], &["-fX"]]);
        let mut configuration = configuration_from_flags("-fA -fno-X -fB");

        evict_unconstrainable(&store, &mut configuration);

        assert!(!configuration.contains_key("-fX"));
        assert_eq!(configuration.len(), 2);
    }

    #[test]
    fn absent_options_ignored() {
        let store = store_of(&[&["-fQ"], &["-fno-Q"]]);
        let mut configuration = configuration_from_flags("-fA");

        assert!(evict_unconstrainable(&store, &mut configuration).is_empty());
        assert_eq!(configuration.len(), 1);
    }

    #[test]
    fn unmarked_spelling_not_evicted() {
        let store = store_of(&[&["-O2"]]);
        let mut configuration = configuration_from_flags("-O2");

        assert!(evict_unconstrainable(&store, &mut configuration).is_empty());
    }
}
