/*!
A store of constraints, each a forbidden combination of options.

A constraint is a list of option spellings, and is violated on a configuration exactly when each spelling holds on the configuration.
For example, the constraint `-fA -fno-B` is violated when `-fA` is true and `-fB` is false.

# Rules files

Constraints are typically read from a rules file, with one constraint per line:
- Each line is trimmed of surrounding whitespace.
- A line beginning with `-` is split on whitespace into a constraint.
- Any other line (blank lines, comments, etc.) is ignored.

No check is made that the options of a constraint exist.
A missing rules file results in an empty store, rather than an error.

```rust
# use flagsat::constraints::ConstraintStore;
let rules = "# inline conflicts\n-finline -fno-unit-at-a-time\n\n-fpic\n";
let store = ConstraintStore::from_reader(rules.as_bytes()).unwrap();

assert_eq!(store.len(), 2);
assert_eq!(store.constraints()[1], vec!["-fpic"]);
```
*/

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

/// A forbidden combination of option spellings.
pub type Constraint = Vec<String>;

/// An ordered collection of constraints, which may grow but never shrinks.
#[derive(Clone, Debug, Default)]
pub struct ConstraintStore {
    constraints: Vec<Constraint>,
}

impl ConstraintStore {
    /// Reads constraints from the rules file at the given path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ErrorKind> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(target: targets::RULES, "No rules file at {path:?}");
                return Ok(ConstraintStore::default());
            }
            Err(e) => return Err(err::RulesError::Open(e.kind()).into()),
        };

        let store = Self::from_reader(BufReader::new(file))?;
        log::info!(target: targets::RULES, "Read {} rules from {path:?}", store.len());
        Ok(store)
    }

    /// Reads constraints from any buffered reader, in the format of a rules file.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, ErrorKind> {
        let mut store = ConstraintStore::default();

        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Err(err::RulesError::Line(index + 1, e.kind()).into()),
            };

            let trimmed_line = line.trim();
            if !trimmed_line.starts_with('-') {
                continue;
            }

            let constraint = trimmed_line
                .split_whitespace()
                .map(|spelling| spelling.to_string())
                .collect::<Constraint>();
            log::trace!(target: targets::RULES, "Rule {}: {constraint:?}", index + 1);
            store.append(constraint);
        }

        Ok(store)
    }

    /// Adds a constraint to the end of the store.
    pub fn append(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

#[cfg(test)]
mod constraint_store_tests {
    use super::*;

    #[test]
    fn lines_are_trimmed() {
        let store = ConstraintStore::from_reader("   -fA   -fB  \n\t-fno-C\n".as_bytes()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.constraints()[0], vec!["-fA", "-fB"]);
        assert_eq!(store.constraints()[1], vec!["-fno-C"]);
    }

    #[test]
    fn other_lines_ignored() {
        let rules = "# comment\n\nfA -fB\n-fA\n";
        let store = ConstraintStore::from_reader(rules.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.constraints()[0], vec!["-fA"]);
    }

    #[test]
    fn duplicates_kept() {
        let store = ConstraintStore::from_reader("-fA -fB\n-fA -fB\n".as_bytes()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn append() {
        let mut store = ConstraintStore::default();
        assert!(store.is_empty());
        store.append(vec!["-fX".to_string()]);
        assert_eq!(store.iter().count(), 1);
    }

    #[test]
    fn missing_file() {
        let store = ConstraintStore::load("/this/path/should/not/exist/rules.txt").unwrap();
        assert!(store.is_empty());
    }
}
