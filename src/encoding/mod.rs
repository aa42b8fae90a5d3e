/*!
Formulas whose models are witnesses to a common length of simple accepting paths.

# Overview

For a single graph and length, the [families] are conjoined to a formula satisfiable exactly when the graph has a simple accepting path of the length.
From this:

- A [path formula](path_formula) for a length is the conjunction of the formula of each graph at that length.
  As each variable is keyed by the index of its graph, the formulas of distinct graphs share no variables, and a model of the path formula is a choice of path in each graph.
- The [full formula](full_formula) is the disjunction of the path formula of each candidate length.
  Candidate lengths range from zero to one less than the smallest order of any graph, as no simple path has more edges than this.

Each disjunct of the full formula is paired with a 'silence' clause, which states no vertex is at the first position of a path of any other candidate length.
As every path of a length has a vertex at its first position, this ensures a model of the full formula witnesses exactly one length, and so [solution_length](crate::decoding::solution_length) recovers the length witnessed.

```rust
# use equal_path::db::variable::VariableTable;
# use equal_path::encoding::{full_formula, path_formula};
# use equal_path::structures::graph::Graph;
let graphs = [Graph::from_edges("line", 3, &[(0, 1), (1, 2)], 0, 2)];
let mut table = VariableTable::default();

let formula = path_formula(&mut table, &graphs, 2).unwrap();
// Three positions for each of three vertices.
assert_eq!(table.count(), 9);

let _ = full_formula(&mut table, &graphs).unwrap();
// Lengths zero and one add one and four positions of three vertices.
assert_eq!(table.count(), 9 + 3 + 6);
```

# Size

The size of a path formula is roughly cubic in the order of the graphs, and the full formula adds a further factor of the order.
So, before any formula is built, an [estimate] of its size may be compared against a limit.
*/

pub mod cnf;
pub mod families;

use crate::{
    db::variable::VariableTable,
    misc::log::targets,
    structures::{
        formula::Formula,
        graph::{endpoints, Endpoints, GraphSource},
        position::PositionKey,
    },
    types::err::{self, ErrorKind},
};

/// The conjunction of each of the six families, for `graph` at `length`.
pub fn graph_formula<G: GraphSource>(
    table: &mut VariableTable,
    graph: &G,
    index: usize,
    length: usize,
    endpoints: Endpoints,
) -> Result<Formula, err::BuildError> {
    Ok(Formula::and([
        families::start_anchor(table, index, length, endpoints.source)?,
        families::end_anchor(table, index, length, endpoints.target)?,
        families::coverage(table, graph, index, length)?,
        families::unique_per_position(table, graph, index, length)?,
        families::unique_per_vertex(table, graph, index, length)?,
        families::edge_continuity(table, graph, index, length)?,
    ]))
}

/// A formula satisfiable exactly when each graph has a simple accepting path of `length` edges.
pub fn path_formula<G: GraphSource>(
    table: &mut VariableTable,
    graphs: &[G],
    length: usize,
) -> Result<Formula, ErrorKind> {
    let mut conjuncts = Vec::with_capacity(graphs.len());
    for (index, graph) in graphs.iter().enumerate() {
        let endpoints = endpoints(graph, index)?;
        conjuncts.push(graph_formula(table, graph, index, length, endpoints)?);
    }
    let formula = Formula::and(conjuncts);

    log::info!(target: targets::ENCODING, "Path formula of length {length} with {} nodes", formula.size());
    Ok(formula)
}

/// The greatest candidate length, if any graph is given and every graph has some vertex.
pub fn max_length<G: GraphSource>(graphs: &[G]) -> Option<usize> {
    graphs.iter().map(|graph| graph.order()).min()?.checked_sub(1)
}

/// Each candidate length, in ascending order.
pub fn candidate_lengths<G: GraphSource>(graphs: &[G]) -> Vec<usize> {
    match max_length(graphs) {
        Some(max) => (0..=max).collect(),
        None => Vec::default(),
    }
}

/// A formula stating no vertex is at the first position of a path of length other than `length`, for each length in `lengths`.
fn silence<G: GraphSource>(
    table: &mut VariableTable,
    graphs: &[G],
    length: usize,
    lengths: &[usize],
) -> Result<Formula, err::BuildError> {
    let mut conjuncts = Vec::default();
    for other in lengths.iter().filter(|other| **other != length) {
        for (index, graph) in graphs.iter().enumerate() {
            for vertex in 0..graph.order() {
                let atom = table.variable(PositionKey::new(index, 0, *other, vertex))?;
                conjuncts.push(Formula::not(Formula::atom(atom)));
            }
        }
    }
    Ok(Formula::and(conjuncts))
}

/// The disjunction of the path formula of each length in `lengths`, with each silencing the others.
///
/// Any length without a candidate is left out, and so if `lengths` contains no candidate the formula is ⊥.
pub fn full_formula_over<G: GraphSource>(
    table: &mut VariableTable,
    graphs: &[G],
    lengths: &[usize],
) -> Result<Formula, ErrorKind> {
    let max = max_length(graphs);
    let mut lengths = lengths
        .iter()
        .copied()
        .filter(|length| max.is_some_and(|max| *length <= max))
        .collect::<Vec<_>>();
    lengths.sort_unstable();
    lengths.dedup();

    let mut disjuncts = Vec::with_capacity(lengths.len());
    for length in &lengths {
        let path = path_formula(table, graphs, *length)?;
        let silence = silence(table, graphs, *length, &lengths)?;
        disjuncts.push(Formula::and([path, silence]));
    }
    let formula = Formula::or(disjuncts);

    log::info!(target: targets::ENCODING, "Full formula over lengths {lengths:?} with {} nodes", formula.size());
    Ok(formula)
}

/// A formula satisfiable exactly when there is some length such that each graph has a simple accepting path of that length.
pub fn full_formula<G: GraphSource>(
    table: &mut VariableTable,
    graphs: &[G],
) -> Result<Formula, ErrorKind> {
    let lengths = candidate_lengths(graphs);
    full_formula_over(table, graphs, &lengths)
}

/// An estimate of the number of nodes in the path formula of `graph` at `length`.
fn graph_estimate<G: GraphSource>(graph: &G, length: usize) -> Option<usize> {
    let order = graph.order();
    let edges = (0..order)
        .flat_map(|from| (0..order).map(move |to| (from, to)))
        .filter(|(from, to)| graph.is_edge(*from, *to))
        .count();

    let positions = length.checked_add(1)?;

    let coverage = positions.checked_mul(order.checked_add(1)?)?;
    let position_pairs = positions.checked_mul(order.checked_mul(order.saturating_sub(1))? / 2)?;
    let vertex_pairs = order.checked_mul(positions.checked_mul(length)? / 2)?;
    let steps = length.checked_mul(edges.checked_mul(3)?.checked_add(1)?)?;

    [
        2,
        coverage,
        position_pairs.checked_mul(3)?,
        vertex_pairs.checked_mul(3)?,
        steps,
        4,
    ]
    .into_iter()
    .try_fold(0_usize, |total, part| total.checked_add(part))
}

/// An estimate of the number of nodes in the path formula of `graphs` at `length`.
///
/// `None` if the estimate overflows.
pub fn estimate<G: GraphSource>(graphs: &[G], length: usize) -> Option<usize> {
    graphs
        .iter()
        .map(|graph| graph_estimate(graph, length))
        .try_fold(1_usize, |total, part| total.checked_add(part?))
}

/// An estimate of the number of nodes in the full formula of `graphs` over `lengths`.
///
/// `None` if the estimate overflows.
pub fn estimate_over<G: GraphSource>(graphs: &[G], lengths: &[usize]) -> Option<usize> {
    let vertices = graphs
        .iter()
        .try_fold(0_usize, |total, graph| total.checked_add(graph.order()))?;
    let silence = lengths.len().saturating_sub(1).checked_mul(vertices)?;

    lengths.iter().try_fold(1_usize, |total, length| {
        total
            .checked_add(estimate(graphs, *length)?)?
            .checked_add(silence)?
            .checked_add(2)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{graph::Graph, model::Model};

    fn path_model(table: &VariableTable, paths: &[(usize, usize, &[usize])]) -> Model {
        let mut values = vec![false; table.count()];
        for (index, length, vertices) in paths {
            for (position, vertex) in vertices.iter().enumerate() {
                let key = PositionKey::new(*index, position, *length, *vertex);
                values[table.get(&key).unwrap() as usize] = true;
            }
        }
        Model::from(values)
    }

    #[test]
    fn path_formula_models_paths() {
        let graphs = [Graph::from_edges("g", 3, &[(0, 1), (1, 2), (0, 2)], 0, 2)];
        let mut table = VariableTable::default();

        let one = path_formula(&mut table, &graphs, 1).unwrap();
        let two = path_formula(&mut table, &graphs, 2).unwrap();

        assert!(one.evaluate(&path_model(&table, &[(0, 1, &[0, 2])])));
        assert!(two.evaluate(&path_model(&table, &[(0, 2, &[0, 1, 2])])));
        assert!(!two.evaluate(&path_model(&table, &[(0, 2, &[0, 2, 1])])));
    }

    #[test]
    fn silence_excludes_other_lengths() {
        let graphs = [Graph::from_edges("g", 3, &[(0, 1), (1, 2), (0, 2)], 0, 2)];
        let mut table = VariableTable::default();

        let full = full_formula(&mut table, &graphs).unwrap();

        assert!(full.evaluate(&path_model(&table, &[(0, 2, &[0, 1, 2])])));
        assert!(full.evaluate(&path_model(&table, &[(0, 1, &[0, 2])])));
        assert!(!full.evaluate(&path_model(
            &table,
            &[(0, 1, &[0, 2]), (0, 2, &[0, 1, 2])]
        )));
    }

    #[test]
    fn zero_length_requires_equal_endpoints() {
        let apart = [Graph::from_edges("apart", 2, &[(0, 1)], 0, 1)];
        let mut table = VariableTable::default();
        let formula = path_formula(&mut table, &apart, 0).unwrap();
        assert!(!formula.evaluate(&path_model(&table, &[(0, 0, &[0])])));
        assert!(!formula.evaluate(&path_model(&table, &[(0, 0, &[1])])));

        let together = [Graph::from_edges("together", 2, &[(0, 1)], 1, 1)];
        let mut table = VariableTable::default();
        let formula = path_formula(&mut table, &together, 0).unwrap();
        assert!(formula.evaluate(&path_model(&table, &[(0, 0, &[1])])));
    }

    #[test]
    fn candidates_follow_the_smallest_graph() {
        let graphs = [
            Graph::from_edges("big", 5, &[], 0, 4),
            Graph::from_edges("small", 2, &[], 0, 1),
        ];
        assert_eq!(max_length(&graphs), Some(1));
        assert_eq!(candidate_lengths(&graphs), vec![0, 1]);

        let none: [Graph; 0] = [];
        assert_eq!(max_length(&none), None);
        assert!(candidate_lengths(&none).is_empty());
    }

    #[test]
    fn full_formula_over_nothing() {
        let graphs = [Graph::from_edges("g", 2, &[(0, 1)], 0, 1)];
        let mut table = VariableTable::default();
        assert_eq!(
            full_formula_over(&mut table, &graphs, &[7]).unwrap(),
            Formula::Bottom
        );
        assert_eq!(table.count(), 0);
    }

    #[test]
    fn missing_source_is_an_error() {
        let graphs = [Graph::from_edges("g", 2, &[(0, 1)], 0, 1), {
            let mut builder = crate::structures::graph::GraphBuilder::new("h");
            let t = builder.vertex("t");
            builder.mark_target(t);
            builder.build()
        }];
        let mut table = VariableTable::default();
        assert_eq!(
            path_formula(&mut table, &graphs, 0),
            Err(ErrorKind::Graph(err::GraphError::MissingSource(1)))
        );
    }

    #[test]
    fn estimates_grow_and_bound() {
        let graphs = [Graph::from_edges("g", 4, &[(0, 1), (1, 2), (2, 3)], 0, 3)];

        let small = estimate(&graphs, 1).unwrap();
        let large = estimate(&graphs, 3).unwrap();
        assert!(small < large);

        let mut table = VariableTable::default();
        let formula = path_formula(&mut table, &graphs, 3).unwrap();
        assert!(formula.size() <= large);

        let lengths = candidate_lengths(&graphs);
        let mut table = VariableTable::default();
        let full = full_formula(&mut table, &graphs).unwrap();
        assert!(full.size() <= estimate_over(&graphs, &lengths).unwrap());
    }
}
