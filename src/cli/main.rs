#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{io::Read, path::PathBuf, time::Duration};

use rand::Rng;
use serde::Serialize;

use flagsat::{
    config::{LubyConstant, PolarityLean, SamplerConfig},
    constraints::ConstraintStore,
    options::{configuration_from_flags, flags_from_configuration, Configuration},
    sampler::Solver,
};

mod parse;

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct JsonReport<'r> {
    seed: u64,
    rules: usize,
    attempts: usize,
    configuration: &'r Configuration,
    flags: Vec<String>,
}

fn read_flags(matches: &clap::ArgMatches) -> Result<String, std::io::Error> {
    if let Some(flags) = matches.get_one::<String>("flags") {
        return Ok(flags.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("flags_file") {
        return std::fs::read_to_string(path);
    }
    let mut flags = String::default();
    std::io::stdin().read_to_string(&mut flags)?;
    Ok(flags)
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let seed = match matches.get_one::<u64>("seed") {
        Some(seed) => *seed,
        None => rand::thread_rng().gen_range(1..=1000),
    };

    let mut config = SamplerConfig::seeded(seed);
    if let Some(limit) = matches.get_one::<usize>("attempt_limit") {
        config.attempt_limit = *limit;
    }
    if let Some(lean) = matches.get_one::<PolarityLean>("polarity_lean") {
        config.oracle.polarity_lean = *lean;
    }
    if let Some(u) = matches.get_one::<LubyConstant>("luby") {
        config.oracle.luby_u = *u;
    }
    if let Some(seconds) = matches.get_one::<u64>("time_limit") {
        config.oracle.time_limit = Some(Duration::from_secs(*seconds));
    }
    if let Err(issue) = config.validate() {
        eprintln!("c Invalid configuration: {issue}");
        std::process::exit(1);
    }

    let json = matches.get_flag("json");
    if !json {
        eprintln!("c Random seed: {seed}");
    }

    let store = match matches.get_one::<PathBuf>("rules") {
        Some(path) => match ConstraintStore::load(path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("c {e}");
                std::process::exit(1);
            }
        },
        None => ConstraintStore::default(),
    };
    let rule_count = store.len();

    let mut configuration = match read_flags(&matches) {
        Ok(flags) => configuration_from_flags(&flags),
        Err(e) => {
            eprintln!("c Failed to read flags: {e}");
            std::process::exit(1);
        }
    };

    let mut solver = Solver::from_config(store, config);
    if let Err(e) = solver.solve(&mut configuration) {
        eprintln!("c {e}");
        std::process::exit(1);
    }

    let flags = flags_from_configuration(&configuration);

    if json {
        let report = JsonReport {
            seed,
            rules: rule_count,
            attempts: solver.counters.attempts,
            configuration: &configuration,
            flags,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(string) => println!("{string}"),
            Err(e) => {
                eprintln!("c Failed to write report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", flags.join(" "));
    }
}
