use std::path::Path;

use equal_path::{builder::dot::read_dot, structures::graph::Graph, types::err::ErrorKind};

pub enum ReadError {
    FailedToOpen,
    ParseError(ErrorKind),
    #[cfg(not(feature = "xz"))]
    CompressionDisabled,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen => write!(f, "Failed to open the graph file."),
            Self::ParseError(err) => write!(f, "{err}."),
            #[cfg(not(feature = "xz"))]
            Self::CompressionDisabled => {
                write!(f, "Reading xz compressed files requires the 'xz' feature.")
            }
        }
    }
}

/// The name of a graph without a name of its own, taken from the file at `path`.
fn name_from_path(path: &Path) -> String {
    let mut stem = path.file_stem().map(|stem| stem.to_string_lossy().into_owned());
    if path.extension().is_some_and(|extension| extension == "xz") {
        stem = stem.map(|stem| match stem.rsplit_once('.') {
            Some((name, _)) => name.to_owned(),
            None => stem,
        });
    }
    stem.unwrap_or_else(|| "G".to_owned())
}

/// Reads the graph in the dot file at `path`.
pub fn read_graph(path: &Path) -> Result<Graph, ReadError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let name = name_from_path(path);

    let graph = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => read_dot(
            std::io::BufReader::new(xz2::read::XzDecoder::new(&file)),
            &name,
        ),

        #[cfg(not(feature = "xz"))]
        Some(extension) if *extension == "xz" => return Err(ReadError::CompressionDisabled),

        _ => read_dot(std::io::BufReader::new(&file), &name),
    };

    graph.map_err(ReadError::ParseError)
}
