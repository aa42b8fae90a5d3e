use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use equal_path::config::{Config, LengthOrder, Search};

use crate::config::{CliConfig, ConfigError};

pub fn cli() -> Command {
    Command::new("equal_path")
        .about("Decides whether some length k exists such that each graph has a simple path of exactly k edges from its source to its target")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(false)
            .trailing_var_arg(true)
            .num_args(0..)
            .value_parser(value_parser!(PathBuf))
            .help("The dot files of the graphs."))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help("Print each graph read."))

        .arg(Arg::new("formula")
            .short('F')
            .long("formula")
            .action(ArgAction::SetTrue)
            .help("Print each formula handed to the oracle."))

        .arg(Arg::new("dimacs")
            .long("dimacs")
            .action(ArgAction::SetTrue)
            .help("Print the clauses of each formula handed to the oracle, in DIMACS form."))

        .arg(Arg::new("paths_found")
            .short('t')
            .long("paths")
            .action(ArgAction::SetTrue)
            .help("Print the paths found."))

        .arg(Arg::new("dot")
            .short('f')
            .long("dot")
            .action(ArgAction::SetTrue)
            .help("Write a dot file of the paths found to the 'sol' directory."))

        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("NAME")
            .value_parser(value_parser!(String))
            .num_args(1)
            .help("The name of dot files written, as NAME-lK.dot for paths of length K.
Default: result"))

        .arg(Arg::new("separate")
            .short('s')
            .long("separate")
            .action(ArgAction::SetTrue)
            .help("Check each length separately, rather than all lengths with a single formula."))

        .arg(Arg::new("decreasing")
            .short('d')
            .long("decreasing")
            .action(ArgAction::SetTrue)
            .help("When checking each length separately, check from the greatest length down."))

        .arg(Arg::new("all")
            .short('a')
            .long("all")
            .action(ArgAction::SetTrue)
            .help("When checking each length separately, check every length rather than stopping at the first length with paths."))

        .arg(Arg::new("prefilter")
            .short('p')
            .long("prefilter")
            .action(ArgAction::SetTrue)
            .help("Before building a single formula over all lengths, check each length separately and keep only those with paths.
Ignored when checking each length separately."))

        .arg(Arg::new("formula_limit")
            .long("formula-limit")
            .value_name("NODES")
            .value_parser(value_parser!(usize))
            .num_args(1)
            .help(format!("The estimated size of a formula above which the formula is not built.
Default: {}", Config::default().formula_limit.value)))
}

/// Parse CLI arguments to a [Config] struct and a [CliConfig] struct.
pub fn config_from_args(args: &ArgMatches) -> Result<(Config, CliConfig), ConfigError> {
    let mut config = Config::default();
    let mut cli_config = CliConfig::default();

    if args.get_flag("separate") {
        config.search.value = Search::Separate;
    }

    if args.get_flag("decreasing") {
        config.order.value = LengthOrder::Descending;
    }

    if args.get_flag("all") {
        config.exhaustive.value = true;
    }

    if args.get_flag("prefilter") {
        config.prefilter.value = true;
    }

    if let Some(limit) = args.get_one::<usize>("formula_limit") {
        if !config.formula_limit.set(*limit) {
            return Err(ConfigError::OutOfBounds {
                option: config.formula_limit.name,
            });
        }
    }

    cli_config.show_graphs = args.get_flag("verbose");
    cli_config.show_formula = args.get_flag("formula");
    cli_config.show_dimacs = args.get_flag("dimacs");
    cli_config.show_paths = args.get_flag("paths_found");
    cli_config.write_dot = args.get_flag("dot");

    if let Some(name) = args.get_one::<String>("output") {
        let name = name.strip_suffix(".dot").unwrap_or(name);
        if name.is_empty() || name.contains(std::path::MAIN_SEPARATOR) || name.starts_with('-') {
            return Err(ConfigError::NonSpecific(
                "The output name must be a non-empty file name, without a leading '-'",
            ));
        }
        cli_config.output_name = name.to_owned();
    }

    Ok((config, cli_config))
}
