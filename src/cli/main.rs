use std::path::{Path, PathBuf};

use equal_path::{
    encoding::cnf::Cnf,
    oracle::varisat::VarisatOracle,
    procedures::Session,
    reports::{Answer, Decision},
    render,
    structures::graph::Graph,
    types::err::ErrorKind,
};

use config::CliConfig;
use parse_args::{cli, config_from_args};

mod config;
mod parse_args;
mod read;

/// The directory dot files are written to.
const DOT_DIR: &str = "sol";

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = cli().get_matches();

    let paths = matches
        .get_many::<PathBuf>("paths")
        .map(|paths| paths.cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    if paths.is_empty() {
        let _ = cli().print_help();
        std::process::exit(0);
    }

    let (config, cli_config) = match config_from_args(&matches) {
        Ok(configs) => configs,
        Err(e) => {
            println!("c Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let mut graphs = Vec::with_capacity(paths.len());
    for path in &paths {
        match read::read_graph(path) {
            Ok(graph) => graphs.push(graph),
            Err(e) => {
                println!("c Failed to read {path:?}: {e}");
                std::process::exit(1);
            }
        }
    }

    if cli_config.show_graphs {
        for graph in &graphs {
            print!("{graph}");
        }
    }

    let mut session = match Session::new(config, &graphs, VarisatOracle::default()) {
        Ok(session) => session,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    if cli_config.show_formula || cli_config.show_dimacs {
        let show_formula = cli_config.show_formula;
        let show_dimacs = cli_config.show_dimacs;

        session.set_callback_formula(Box::new(move |length, formula, table| {
            match length {
                Some(length) => println!("c Formula for k = {length}:"),
                None => println!("c Formula for all k:"),
            }

            if show_formula {
                println!("{}", formula.named(|atom| table.name_of(atom)));
            }

            if show_dimacs {
                match Cnf::lowered(formula) {
                    Ok(cnf) => print!("{}", cnf.as_dimacs()),
                    Err(e) => println!("c {e}"),
                }
            }
        }));
    }

    let decision = match session.decide() {
        Ok(decision) => decision,
        Err(e @ ErrorKind::Decode(_)) => {
            println!("c {e}");
            std::process::exit(2);
        }
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    report(&decision, &graphs, &cli_config);
}

fn report(decision: &Decision, graphs: &[Graph], cli_config: &CliConfig) {
    for attempt in &decision.attempts {
        if let Some(length) = attempt.length {
            println!("For k = {length}:");
        }

        match &attempt.answer {
            Answer::Yes(witness) => {
                println!("Yes");
                println!("c Paths of length {}", witness.length);

                if cli_config.show_paths {
                    print!("{}", render::listing(graphs, witness));
                }

                if cli_config.write_dot {
                    let name = &cli_config.output_name;
                    match render::write_dot(Path::new(DOT_DIR), name, graphs, witness) {
                        Ok(file) => println!("c Wrote {}", file.display()),
                        Err(e) => println!("c Failed to write a dot file: {e}"),
                    }
                }
            }

            Answer::No => println!("No"),

            Answer::Unknown => println!("Unknown"),
        }
    }
}
