use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

use flagsat::config::{defaults, LubyConstant, PolarityLean};

pub fn cli() -> Command {
    Command::new("flagsat")
        .about("Revises a configuration of compiler options so that no forbidden combination of options holds")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("rules")
            .long("rules")
            .short('r')
            .value_parser(value_parser!(PathBuf))
            .required(true)
            .num_args(1)
            .help("The rules file, with one forbidden combination of options per line.")
            .long_help("The rules file, with one forbidden combination of options per line.

Lines beginning with '-' are read as rules, and all other lines are ignored.
If the file does not exist, no rules are read."))

        .arg(Arg::new("flags")
            .long("flags")
            .short('f')
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .allow_hyphen_values(true)
            .help("The configuration to revise, as a string of options."))

        .arg(Arg::new("flags_file")
            .long("flags-file")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("A file containing the configuration to revise, as a string of options."))

        .group(ArgGroup::new("input")
            .args(["flags", "flags_file"])
            .required(false))

        .arg(Arg::new("seed")
            .long("seed")
            .short('s')
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The seed for random choices.")
            .long_help("The seed for random choices.

If no seed is given, a seed between 1 and 1000 is drawn at random and reported."))

        .arg(Arg::new("attempt_limit")
            .long("attempt-limit")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The maximum number of biased queries to make.
Default: {}", defaults::ATTEMPT_LIMIT)))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .value_parser(value_parser!(PolarityLean))
            .required(false)
            .num_args(1)
            .help(format!("The chance of choosing true when the oracle freely values an option.
Default: {}", defaults::POLARITY_LEAN)))

        .arg(Arg::new("luby")
            .long("luby")
            .value_parser(value_parser!(LubyConstant))
            .required(false)
            .num_args(1)
            .help(format!("The constant to multiply the luby sequence by when scheduling restarts.
Default: {}", defaults::LUBY_U)))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("A time limit, in seconds, for each query to the oracle."))

        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Report the revised configuration as JSON."))
}
