/// A collection of configuration options relevant only to the CLI.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Whether to print each graph read.
    pub show_graphs: bool,

    /// Whether to print each formula handed to the oracle.
    pub show_formula: bool,

    /// Whether to print the clauses of each formula handed to the oracle, in DIMACS form.
    pub show_dimacs: bool,

    /// Whether to print the paths of each witness.
    pub show_paths: bool,

    /// Whether to write a dot file for each witness.
    pub write_dot: bool,

    /// The name of dot files written, before the length of the witness.
    pub output_name: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            show_graphs: false,
            show_formula: false,
            show_dimacs: false,
            show_paths: false,
            write_dot: false,
            output_name: "result".to_owned(),
        }
    }
}

pub enum ConfigError {
    NonSpecific(&'static str),
    OutOfBounds { option: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
            ConfigError::OutOfBounds { option } => {
                write!(f, "The value given for {option} is out of bounds")
            }
        }
    }
}
