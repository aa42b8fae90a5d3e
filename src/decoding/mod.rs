/*!
Reading witnesses from a model.

A model of a path formula (or the full formula) is read through the variable table the formula was built with.
For a graph and a length, the vertices at a position are those whose variable is true on the model, and a variable the table has not allocated is taken to be false.

- The [solution length](solution_length) is the least length at which each position of each graph holds exactly one vertex, with the source first and the target last.
- A [path](path_from_model) is read by taking the vertex at each position, and is checked to be a simple accepting path before being returned.

Any failure to read a model is a [DecodeError](crate::types::err::DecodeError), as this indicates the encoding and decoding disagree.
*/

use crate::{
    db::variable::VariableTable,
    misc::log::targets,
    structures::{
        graph::{GraphSource, Vertex},
        model::Model,
        path::Path,
        position::PositionKey,
    },
    types::err::{self, ErrorKind},
};

/// The vertices of `graph` at `position` of a path of `length`, on `model`.
pub fn vertices_at<G: GraphSource>(
    model: &Model,
    table: &VariableTable,
    graph: &G,
    index: usize,
    position: usize,
    length: usize,
) -> Vec<Vertex> {
    (0..graph.order())
        .filter(|vertex| {
            table
                .get(&PositionKey::new(index, position, length, *vertex))
                .is_some_and(|atom| model.value_of(atom))
        })
        .collect()
}

/// Whether each position of a path of `length` through `graph` holds exactly one vertex on `model`, with the source first and the target last.
fn consistent_at<G: GraphSource>(
    model: &Model,
    table: &VariableTable,
    graph: &G,
    index: usize,
    length: usize,
) -> bool {
    (0..=length).all(|position| {
        match vertices_at(model, table, graph, index, position, length).as_slice() {
            [vertex] => {
                (position != 0 || graph.is_source(*vertex))
                    && (position != length || graph.is_target(*vertex))
            }
            _ => false,
        }
    })
}

/// The least length at which `model` holds a consistent path through every graph.
///
/// Lengths are checked from zero up to the greatest order of any graph.
pub fn solution_length<G: GraphSource>(
    model: &Model,
    table: &VariableTable,
    graphs: &[G],
) -> Result<usize, ErrorKind> {
    let max_order = graphs.iter().map(|graph| graph.order()).max().unwrap_or(0);

    for length in 0..max_order {
        if graphs
            .iter()
            .enumerate()
            .all(|(index, graph)| consistent_at(model, table, graph, index, length))
        {
            log::info!(target: targets::DECODING, "Solution length {length}");
            return Ok(length);
        }
    }

    log::error!(target: targets::DECODING, "No consistent length in a model");
    Err(err::DecodeError::NoConsistentLength.into())
}

/// The path of `length` through `graph` on `model`.
///
/// The path is verified to be a simple accepting path of the graph.
pub fn path_from_model<G: GraphSource>(
    model: &Model,
    table: &VariableTable,
    graph: &G,
    index: usize,
    length: usize,
) -> Result<Path, ErrorKind> {
    let mut vertices = Vec::with_capacity(length + 1);

    for position in 0..=length {
        match vertices_at(model, table, graph, index, position, length).as_slice() {
            [] => {
                return Err(err::DecodeError::MissingVertex {
                    graph: index,
                    position,
                }
                .into())
            }

            [vertex] => vertices.push(*vertex),

            _ => {
                return Err(err::DecodeError::AmbiguousPosition {
                    graph: index,
                    position,
                }
                .into())
            }
        }
    }

    let path = Path::new(index, vertices);
    if !path.is_accepting_in(graph) {
        log::error!(target: targets::DECODING, "Invalid path {:?} in graph {index}", path.vertices);
        return Err(err::DecodeError::InvalidPath { graph: index }.into());
    }

    Ok(path)
}

/// The path of `length` through each graph on `model`, in the order of the graphs.
pub fn paths_from_model<G: GraphSource>(
    model: &Model,
    table: &VariableTable,
    graphs: &[G],
    length: usize,
) -> Result<Vec<Path>, ErrorKind> {
    graphs
        .iter()
        .enumerate()
        .map(|(index, graph)| path_from_model(model, table, graph, index, length))
        .collect()
}
