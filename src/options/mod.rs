/*!
Options and configurations.

An option has two spellings:
- A positive spelling, `-fX`, asserting the option.
- A negative spelling, `-fno-X`, denying the option.

Each spelling is the negation of the other, and [negation_of] swaps one spelling for the other.
A spelling without the `-f` marker has no distinct negation, and is its own negation.

A [Configuration] maps (the spelling of) each option to a value, preserving the order in which options were added.
Typically, keys are positive spellings, as produced by [configuration_from_flags].

```rust
# use flagsat::options::*;
assert_eq!(negation_of("-fno-inline"), "-finline");
assert_eq!(negation_of("-finline"), "-fno-inline");

let configuration = configuration_from_flags("-finline -fno-unroll-loops");
assert_eq!(configuration.get("-funroll-loops"), Some(&false));
assert_eq!(flags_from_configuration(&configuration), vec!["-finline", "-fno-unroll-loops"]);
```
*/

use indexmap::IndexMap;

/// The marker of a positive spelling.
pub const POSITIVE_MARKER: &str = "-f";

/// The marker of a negative spelling.
pub const NEGATIVE_MARKER: &str = "-fno-";

/// A configuration, mapping options to values.
pub type Configuration = IndexMap<String, bool>;

/// The other spelling of the given spelling.
pub fn negation_of(spelling: &str) -> String {
    if let Some(name) = spelling.strip_prefix(NEGATIVE_MARKER) {
        format!("{POSITIVE_MARKER}{name}")
    } else if let Some(name) = spelling.strip_prefix(POSITIVE_MARKER) {
        format!("{NEGATIVE_MARKER}{name}")
    } else {
        spelling.to_string()
    }
}

/// Whether the spelling is a negative spelling.
pub fn is_negative(spelling: &str) -> bool {
    spelling.starts_with(NEGATIVE_MARKER)
}

/// A configuration from a whitespace separated string of flags.
///
/// A negative spelling sets the (positive) option to false, and any other flag is set to true.
/// If an option is given more than once, the last value given is kept.
pub fn configuration_from_flags(flags: &str) -> Configuration {
    let mut configuration = Configuration::default();
    for flag in flags.split_whitespace() {
        match is_negative(flag) {
            true => configuration.insert(negation_of(flag), false),
            false => configuration.insert(flag.to_string(), true),
        };
    }
    configuration
}

/// The spelling of each option of a configuration which holds on the configuration, sorted.
pub fn flags_from_configuration(configuration: &Configuration) -> Vec<String> {
    let mut flags = configuration
        .iter()
        .map(|(option, value)| match value {
            true => option.clone(),
            false => negation_of(option),
        })
        .collect::<Vec<_>>();
    flags.sort();
    flags
}

#[cfg(test)]
mod option_tests {
    use super::*;

    #[test]
    fn negation_is_an_involution() {
        for spelling in ["-fX", "-fno-X", "-fno-", "-f", "-O2", "-fnothing"] {
            assert_eq!(negation_of(&negation_of(spelling)), spelling);
        }
    }

    #[test]
    fn unmarked_spellings() {
        assert_eq!(negation_of("-O2"), "-O2");
        assert!(!is_negative("-O2"));
    }

    #[test]
    fn negative_flags() {
        let configuration = configuration_from_flags("-fA -fno-B\n-O2  -fno-B");
        assert_eq!(configuration.len(), 3);
        assert_eq!(configuration.get("-fA"), Some(&true));
        assert_eq!(configuration.get("-fB"), Some(&false));
        assert_eq!(configuration.get("-O2"), Some(&true));
        assert_eq!(configuration.get("-fno-B"), None);
    }

    #[test]
    fn last_value_kept() {
        let configuration = configuration_from_flags("-fA -fno-A");
        assert_eq!(configuration.get("-fA"), Some(&false));
    }

    #[test]
    fn flags_are_sorted() {
        let configuration = configuration_from_flags("-fno-zeta -fbeta -falpha");
        assert_eq!(
            flags_from_configuration(&configuration),
            vec!["-falpha", "-fbeta", "-fno-zeta"]
        );
    }

    #[test]
    fn empty_flags() {
        assert!(configuration_from_flags("  \n ").is_empty());
    }
}
