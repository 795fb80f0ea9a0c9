/*!
Encoding rules as a formula.

# Applicability

A rule applies to a configuration only if each spelling of the rule resolves, under either spelling, to a key of the configuration.
Other rules are skipped, as are empty rules.

# Variables

Each distinct option of an applicable rule is interned as a variable, named by the spelling which is a key of the configuration.
A spelling of a rule is then a literal: the variable itself if the spelling is the key, and the negation of the variable otherwise.

For example, with the key `-fX`, the spelling `-fX` is the literal `-fX` and the spelling `-fno-X` is the literal `!-fX`.

# Avoidance

A rule is violated when each of its literals holds, and so a configuration avoids every rule exactly when, for each rule, the negation of some literal of the rule holds.
The avoidance formula has one clause for each applicable rule, of the negations of the literals of the rule.
*/

use indexmap::IndexSet;

use crate::{
    constraints::ConstraintStore,
    misc::log::targets::{self},
    options::{negation_of, Configuration},
    oracle::{Formula, NamedLiteral},
};

/// A literal of an encoded rule, as the index of an interned variable and a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedLiteral {
    pub variable: usize,
    pub polarity: bool,
}

/// The applicable rules of a store, encoded over interned variables.
#[derive(Debug, Default)]
pub struct Encoding {
    variables: IndexSet<String>,
    rules: Vec<Vec<EncodedLiteral>>,
}

/// The key of the configuration for the given spelling, if either spelling is a key.
fn resolve<'c>(spelling: &str, configuration: &'c Configuration) -> Option<(&'c str, bool)> {
    if let Some((key, _)) = configuration.get_key_value(spelling) {
        return Some((key.as_str(), true));
    }
    configuration
        .get_key_value(negation_of(spelling).as_str())
        .map(|(key, _)| (key.as_str(), false))
}

impl Encoding {
    /// Encodes each rule of the store which applies to the configuration.
    pub fn new(store: &ConstraintStore, configuration: &Configuration) -> Self {
        let mut encoding = Encoding::default();

        'rule_loop: for rule in store.iter() {
            if rule.is_empty() {
                continue;
            }

            let mut resolved = Vec::with_capacity(rule.len());
            for spelling in rule {
                match resolve(spelling, configuration) {
                    Some(pair) => resolved.push(pair),
                    None => {
                        log::trace!(target: targets::ENCODING, "Skipped {rule:?}, as {spelling} is unknown");
                        continue 'rule_loop;
                    }
                }
            }

            let encoded_rule = resolved
                .into_iter()
                .map(|(key, polarity)| {
                    let (variable, _) = encoding.variables.insert_full(key.to_string());
                    EncodedLiteral { variable, polarity }
                })
                .collect();
            encoding.rules.push(encoded_rule);
        }

        log::debug!(target: targets::ENCODING,
            "{} of {} rules apply, over {} options",
            encoding.rules.len(),
            store.len(),
            encoding.variables.len()
        );
        encoding
    }

    /// The interned variables, in order of first appearance.
    pub fn variables(&self) -> &IndexSet<String> {
        &self.variables
    }

    pub fn rules(&self) -> &[Vec<EncodedLiteral>] {
        &self.rules
    }

    /// The variable name and polarity of an encoded literal, as a named literal.
    pub fn named(&self, literal: EncodedLiteral) -> Option<NamedLiteral> {
        self.variables
            .get_index(literal.variable)
            .map(|name| NamedLiteral::new(name.as_str(), literal.polarity))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The formula satisfied exactly when no applicable rule is violated.
    pub fn avoidance(&self) -> Formula {
        let mut formula = Formula::default();
        for rule in &self.rules {
            let clause = rule
                .iter()
                .filter_map(|literal| self.named(*literal))
                .map(|literal| literal.negate())
                .collect();
            formula.add_clause(clause);
        }
        formula
    }
}

#[cfg(test)]
mod encoding_tests {
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
    fn applicability() {
        let store = store_of(&[&["-fA", "-fQ"], &["-fA", "-fno-B"], &[]]);
        let configuration = configuration_from_flags("-fA -fB");

        let encoding = Encoding::new(&store, &configuration);
        assert_eq!(encoding.rules().len(), 1);
    }

    #[test]
    fn shared_variables() {
        let store = store_of(&[&["-fA", "-fno-B"], &["-fno-A", "-fB"]]);
        let configuration = configuration_from_flags("-fA -fB");

        let encoding = Encoding::new(&store, &configuration);
        assert_eq!(encoding.variables().len(), 2);
        assert_eq!(
            encoding.rules()[1],
            vec![
                EncodedLiteral { variable: 0, polarity: false },
                EncodedLiteral { variable: 1, polarity: true },
            ]
        );
    }

    #[test]
    fn avoidance_clauses() {
        let store = store_of(&[&["-fA", "-fno-B"], &["-fC"]]);
        let configuration = configuration_from_flags("-fA -fno-B -fC");

        let avoidance = Encoding::new(&store, &configuration).avoidance();
        assert_eq!(avoidance.to_string(), "(!-fA | -fB) & (!-fC)");
    }

    #[test]
    fn negative_keys() {
        let store = store_of(&[&["-fX"]]);
        let mut configuration = Configuration::default();
        configuration.insert("-fno-X".to_string(), true);

        let encoding = Encoding::new(&store, &configuration);
        assert_eq!(encoding.variables().get_index(0).map(|s| s.as_str()), Some("-fno-X"));
        assert_eq!(encoding.avoidance().to_string(), "(-fno-X)");
    }
}
