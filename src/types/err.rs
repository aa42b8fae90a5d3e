//! Error types used in the library.
//!
//! - Graph errors are raised before any formula is built, when the graphs of a session are found to be degenerate.
//! - Build errors are raised when a formula would be unreasonably large, and may be recovered from by revising the input or the [formula limit](crate::config::Config::formula_limit).
//! - Decode errors indicate a mismatch between the encoding and the decoding of a model, and are not expected.
//!
//! Names of the error enums overlap with the concern they are raised from.
//  As such, throughout the library err::{self} is used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Decode(DecodeError),
    Graph(GraphError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "Build error: {e}"),
            Self::Decode(e) => write!(f, "Decode error: {e}"),
            Self::Graph(e) => write!(f, "Graph error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

/// Noted errors when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// The formula requested is estimated to exceed the configured limit.
    ///
    /// The estimate is `None` if counting the size of the formula would itself overflow.
    FormulaTooLarge {
        estimate: Option<usize>,
        limit: usize,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomsExhausted => write!(f, "all atoms have been used"),

            Self::FormulaTooLarge {
                estimate: Some(estimate),
                limit,
            } => write!(
                f,
                "the formula would have roughly {estimate} nodes, above the limit of {limit}"
            ),

            Self::FormulaTooLarge {
                estimate: None,
                limit,
            } => write!(
                f,
                "the formula would be too large to count, above the limit of {limit}"
            ),
        }
    }
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors when decoding a model.
///
/// Each of these signals the encoding and decoding disagree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// No length was found at which every position of every graph holds exactly one vertex.
    NoConsistentLength,

    /// No vertex is at some position of some graph.
    MissingVertex { graph: usize, position: usize },

    /// Two or more vertices are at some position of some graph.
    AmbiguousPosition { graph: usize, position: usize },

    /// The sequence of vertices read is not a simple accepting path of the graph.
    InvalidPath { graph: usize },

    /// The length read from a model differs from the length the formula was built for.
    LengthMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConsistentLength => write!(f, "no consistent path length in the model"),

            Self::MissingVertex { graph, position } => {
                write!(f, "graph {graph} has no vertex at position {position}")
            }

            Self::AmbiguousPosition { graph, position } => {
                write!(f, "graph {graph} has several vertices at position {position}")
            }

            Self::InvalidPath { graph } => {
                write!(f, "the path read for graph {graph} is not a simple accepting path")
            }

            Self::LengthMismatch { expected, found } => {
                write!(f, "expected paths of length {expected}, read length {found}")
            }
        }
    }
}

impl From<DecodeError> for ErrorKind {
    fn from(e: DecodeError) -> Self {
        ErrorKind::Decode(e)
    }
}

/// Noted issues with a graph, or a collection of graphs.
///
/// Where relevant, the graph is identified by its index in the collection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphError {
    /// The collection of graphs is empty.
    NoGraphs,

    /// A graph without vertices.
    EmptyGraph(usize),

    /// No vertex of the graph is flagged as the source.
    MissingSource(usize),

    /// No vertex of the graph is flagged as the target.
    MissingTarget(usize),

    /// More than one vertex of the graph is flagged as the source.
    MultipleSources(usize),

    /// More than one vertex of the graph is flagged as the target.
    MultipleTargets(usize),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoGraphs => write!(f, "at least one graph is required"),
            Self::EmptyGraph(g) => write!(f, "graph {g} has no vertices"),
            Self::MissingSource(g) => write!(f, "graph {g} has no source vertex"),
            Self::MissingTarget(g) => write!(f, "graph {g} has no target vertex"),
            Self::MultipleSources(g) => write!(f, "graph {g} has more than one source vertex"),
            Self::MultipleTargets(g) => write!(f, "graph {g} has more than one target vertex"),
        }
    }
}

impl From<GraphError> for ErrorKind {
    fn from(e: GraphError) -> Self {
        ErrorKind::Graph(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input does not open with `digraph`.
    MissingHeader,

    /// Some issue reading the input at a specific line.
    Line(usize),

    /// Some token was found where another was expected.
    Unexpected { line: usize, found: String },

    /// A quoted identifier or a comment is not closed.
    Unterminated(usize),

    /// The input ended before the graph was closed.
    UnexpectedEnd,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "expected 'digraph'"),
            Self::Line(line) => write!(f, "failed to read line {line}"),
            Self::Unexpected { line, found } => write!(f, "unexpected '{found}' on line {line}"),
            Self::Unterminated(line) => {
                write!(f, "unterminated string or comment from line {line}")
            }
            Self::UnexpectedEnd => write!(f, "unexpected end of input"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
