use flagsat::{
    config::SamplerConfig,
    constraints::{Constraint, ConstraintStore},
    options::{configuration_from_flags, flags_from_configuration, negation_of, Configuration},
    sampler::Solver,
    types::err::{ErrorKind, SampleError},
};

fn store_of(rules: &[&[&str]]) -> ConstraintStore {
    let mut store = ConstraintStore::default();
    for rule in rules {
        store.append(rule.iter().map(|s| s.to_string()).collect());
    }
    store
}

fn holds(spelling: &str, configuration: &Configuration) -> bool {
    configuration.get(spelling) == Some(&true)
        || configuration.get(negation_of(spelling).as_str()) == Some(&false)
}

fn violated(constraint: &Constraint, configuration: &Configuration) -> bool {
    !constraint.is_empty() && constraint.iter().all(|spelling| holds(spelling, configuration))
}

mod scenarios {
    use super::*;

    #[test]
    fn pair_not_both_true() {
        for seed in 0..32 {
            let mut solver = Solver::from_config(store_of(&[&["-fA", "-fB"]]), SamplerConfig::seeded(seed));
            let mut configuration = configuration_from_flags("-fA -fB -fno-C");

            assert!(solver.solve(&mut configuration).is_ok());

            assert!(!(configuration["-fA"] && configuration["-fB"]));
            assert_eq!(configuration.get("-fC"), Some(&false));
        }
    }

    #[test]
    fn contradictory_singles_evicted() {
        let mut solver = Solver::from_config(store_of(&[&["-fX"], &["-fno-X"]]), SamplerConfig::default());
        let mut configuration = configuration_from_flags("-fX");

        assert!(solver.solve(&mut configuration).is_ok());

        assert!(!configuration.contains_key("-fX"));
        assert!(!configuration.contains_key("-fno-X"));
        assert_eq!(solver.counters.attempts, 0);
    }

    #[test]
    fn no_rules() {
        let mut solver = Solver::from_config(ConstraintStore::default(), SamplerConfig::default());
        let mut configuration = configuration_from_flags("-fA -fno-B -fC");
        let original = configuration.clone();

        assert!(solver.solve(&mut configuration).is_ok());
        assert_eq!(configuration, original);
        assert_eq!(solver.counters.attempts, 0);
    }

    #[test]
    fn inapplicable_rules_ignored() {
        let mut solver = Solver::from_config(store_of(&[&["-fA", "-fQ"], &["-fZ"]]), SamplerConfig::default());
        let mut configuration = configuration_from_flags("-fA -fB");
        let original = configuration.clone();

        assert!(solver.solve(&mut configuration).is_ok());
        assert_eq!(configuration, original);
    }

    #[test]
    fn single_rule_fixes_value() {
        let mut solver = Solver::from_config(store_of(&[&["-fno-C"], &["-fD"]]), SamplerConfig::seeded(9));
        let mut configuration = configuration_from_flags("-fno-C -fD -fE");

        assert!(solver.solve(&mut configuration).is_ok());
        assert_eq!(configuration.get("-fC"), Some(&true));
        assert_eq!(configuration.get("-fD"), Some(&false));
        assert_eq!(configuration.get("-fE"), Some(&true));
    }
}

mod properties {
    use super::*;

    const RULES: &[&[&str]] = &[
        &["-fA", "-fB"],
        &["-fno-A", "-fC", "-fD"],
        &["-fB", "-fno-D"],
        &["-fE"],
        &["-fC", "-fno-E", "-fF"],
        &["-fno-F", "-fno-B"],
        &["-fG", "-fUnknown"],
    ];

    #[test]
    fn no_violation() {
        for seed in 1..=64 {
            let store = store_of(RULES);
            let mut solver = Solver::from_config(store.clone(), SamplerConfig::seeded(seed));
            let mut configuration = configuration_from_flags("-fA -fB -fC -fD -fno-E -fF -fG -fH");

            assert!(solver.solve(&mut configuration).is_ok());

            for constraint in store.iter() {
                assert!(!violated(constraint, &configuration), "{constraint:?} on seed {seed}");
            }
        }
    }

    #[test]
    fn write_back_coverage() {
        let mut solver = Solver::from_config(store_of(RULES), SamplerConfig::seeded(3));
        let mut configuration = configuration_from_flags("-fA -fB -fC -fD -fno-E -fF -fno-G -fH");

        assert!(solver.solve(&mut configuration).is_ok());

        let keys = configuration.keys().map(|k| k.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["-fA", "-fB", "-fC", "-fD", "-fE", "-fF", "-fG", "-fH"]);
        // Neither is referenced by an applicable rule.
        assert_eq!(configuration.get("-fG"), Some(&false));
        assert_eq!(configuration.get("-fH"), Some(&true));
    }

    #[test]
    fn equal_seeds_agree() {
        let flags = "-fA -fB -fC -fD -fno-E -fF -fG -fH";

        let mut first = configuration_from_flags(flags);
        let mut second = configuration_from_flags(flags);

        let mut solver = Solver::from_config(store_of(RULES), SamplerConfig::seeded(17));
        assert!(solver.solve(&mut first).is_ok());

        let mut solver = Solver::from_config(store_of(RULES), SamplerConfig::seeded(17));
        assert!(solver.solve(&mut second).is_ok());

        assert_eq!(first, second);
    }

    #[test]
    fn repeated_solves_keep_keys() {
        let mut solver = Solver::from_config(store_of(RULES), SamplerConfig::seeded(5));
        let mut configuration = configuration_from_flags("-fA -fB -fC -fD -fno-E -fF -fG -fH");

        assert!(solver.solve(&mut configuration).is_ok());
        let keys = configuration.keys().cloned().collect::<Vec<_>>();

        assert!(solver.solve(&mut configuration).is_ok());
        assert_eq!(configuration.keys().cloned().collect::<Vec<_>>(), keys);
        assert_eq!(solver.counters.solves, 2);
    }

    #[test]
    fn seeds_vary_results() {
        let mut results = std::collections::HashSet::new();
        for seed in 1..=64 {
            let mut solver = Solver::from_config(store_of(&[&["-fA", "-fB"]]), SamplerConfig::seeded(seed));
            let mut configuration = configuration_from_flags("-fA -fB");
            assert!(solver.solve(&mut configuration).is_ok());
            results.insert(flags_from_configuration(&configuration));
        }
        assert!(results.len() > 1);
    }

    #[test]
    fn added_constraints_respected() {
        let mut solver = Solver::from_config(store_of(&[&["-fA", "-fB"]]), SamplerConfig::seeded(1));
        let mut configuration = configuration_from_flags("-fA -fB -fC");
        assert!(solver.solve(&mut configuration).is_ok());

        solver.add_constraint(vec!["-fC".to_string()]);
        assert_eq!(solver.store().len(), 2);

        assert!(solver.solve(&mut configuration).is_ok());
        assert_eq!(configuration.get("-fC"), Some(&false));
    }
}

mod failures {
    use super::*;

    use flagsat::{
        generic::minimal_pcg::MinimalPCG32,
        oracle::{Formula, Model, Oracle, Verdict},
        sampler::ConfigSolver,
    };
    use rand::SeedableRng;

    /// Refuses the given number of queries, and then returns an empty model.
    struct StubbornOracle {
        refusals: usize,
        calls: usize,
    }

    impl Oracle for StubbornOracle {
        fn check(&mut self, _formula: &Formula) -> Result<Verdict, ErrorKind> {
            self.calls += 1;
            match self.calls <= self.refusals {
                true => Ok(Verdict::Unsatisfiable),
                false => Ok(Verdict::Model(Model::default())),
            }
        }
    }

    struct UndecidedOracle;

    impl Oracle for UndecidedOracle {
        fn check(&mut self, _formula: &Formula) -> Result<Verdict, ErrorKind> {
            Ok(Verdict::Unknown)
        }
    }

    fn limited(limit: usize) -> SamplerConfig {
        SamplerConfig {
            attempt_limit: limit,
            ..SamplerConfig::default()
        }
    }

    #[test]
    fn unavoidable_rules() {
        let store = store_of(&[
            &["-fA", "-fB"],
            &["-fA", "-fno-B"],
            &["-fno-A", "-fB"],
            &["-fno-A", "-fno-B"],
        ]);
        let mut solver = Solver::from_config(store, limited(8));
        let mut configuration = configuration_from_flags("-fA -fB");
        let original = configuration.clone();

        assert_eq!(
            solver.solve(&mut configuration),
            Err(ErrorKind::Sample(SampleError::Unsatisfiable))
        );
        assert_eq!(solver.counters.attempts, 9);
        assert_eq!(configuration, original);
    }

    #[test]
    fn attempts_exhausted() {
        let oracle = StubbornOracle { refusals: 4, calls: 0 };
        let mut solver = ConfigSolver::new(
            store_of(&[&["-fA", "-fB"]]),
            oracle,
            MinimalPCG32::seed_from_u64(0),
            limited(4),
        );
        let mut configuration = configuration_from_flags("-fA -fB");

        assert_eq!(
            solver.solve(&mut configuration),
            Err(ErrorKind::Sample(SampleError::AttemptsExhausted(4)))
        );
        assert_eq!(solver.oracle().calls, 5);
    }

    #[test]
    fn late_model_written() {
        let oracle = StubbornOracle { refusals: 2, calls: 0 };
        let mut solver = ConfigSolver::new(
            store_of(&[&["-fA", "-fB"]]),
            oracle,
            MinimalPCG32::seed_from_u64(0),
            limited(4),
        );
        let mut configuration = configuration_from_flags("-fA -fB -fC");

        assert!(solver.solve(&mut configuration).is_ok());
        assert_eq!(solver.counters.attempts, 3);
        // Absent from the model, so false.
        assert_eq!(configuration.get("-fA"), Some(&false));
        assert_eq!(configuration.get("-fB"), Some(&false));
        assert_eq!(configuration.get("-fC"), Some(&true));
    }

    #[test]
    fn undecided() {
        let mut solver = ConfigSolver::new(
            store_of(&[&["-fA"]]),
            UndecidedOracle,
            MinimalPCG32::seed_from_u64(0),
            limited(2),
        );
        let mut configuration = configuration_from_flags("-fA");

        assert_eq!(
            solver.solve(&mut configuration),
            Err(ErrorKind::Sample(SampleError::Unknown))
        );
    }

    #[test]
    fn invalid_config() {
        let config = SamplerConfig {
            bias_inclusion: 2.0,
            ..SamplerConfig::default()
        };
        let mut solver = Solver::from_config(store_of(&[&["-fA", "-fB"]]), config);
        let mut configuration = configuration_from_flags("-fA -fB");

        assert!(matches!(solver.solve(&mut configuration), Err(ErrorKind::Config(_))));
    }
}

mod rules_files {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_and_solve() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# forbidden combinations").unwrap();
        writeln!(file, "  -fA -fno-B  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "-fC").unwrap();
        writeln!(file, "-fno-C").unwrap();

        let store = ConstraintStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 3);

        let mut solver = Solver::from_config(store, SamplerConfig::seeded(2));
        let mut configuration = configuration_from_flags("-fA -fno-B -fC -fD");

        assert!(solver.solve(&mut configuration).is_ok());
        assert!(!configuration.contains_key("-fC"));
        assert!(!(configuration["-fA"] && !configuration["-fB"]));
        assert_eq!(configuration.get("-fD"), Some(&true));
    }

    #[test]
    fn missing_file_is_empty() {
        let directory = tempfile::tempdir().unwrap();
        let store = ConstraintStore::load(directory.path().join("absent.rules")).unwrap();
        assert!(store.is_empty());
    }
}
