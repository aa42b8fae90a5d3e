/*!
The six clause families which together axiomatise a simple accepting path of a fixed length through a graph.

Each family is built for a single graph (identified by its index) and a single length *k*, over positions `0..=k` and the vertices of the graph.
Writing x<sub>j,v</sub> for the variable stating vertex *v* is at position *j* (the graph and length being fixed):

| Family | Formula |
|---|---|
| [start_anchor] | x<sub>0,s</sub> for *s* the source |
| [end_anchor] | x<sub>k,t</sub> for *t* the target |
| [coverage] | ∧<sub>j</sub> ∨<sub>v</sub> x<sub>j,v</sub> |
| [unique_per_position] | ∧<sub>j</sub> ∧<sub>u < v</sub> (¬x<sub>j,u</sub> ∨ ¬x<sub>j,v</sub>) |
| [unique_per_vertex] | ∧<sub>v</sub> ∧<sub>j < j'</sub> (¬x<sub>j,v</sub> ∨ ¬x<sub>j',v</sub>) |
| [edge_continuity] | ∧<sub>j < k</sub> ∨<sub>(u,v) ∈ E</sub> (x<sub>j,u</sub> ∧ x<sub>j+1,v</sub>) |

Coverage and uniqueness per position make the variables a function from positions to vertices, uniqueness per vertex makes the function injective, the anchors fix the endpoints, and continuity requires each step to be an edge.

When *k* is zero, uniqueness per vertex and continuity are empty conjunctions, and the anchors place both the source and target at position zero.
With uniqueness per position, this is satisfiable exactly when the source is the target.
*/

use crate::{
    db::variable::VariableTable,
    structures::{
        formula::Formula,
        graph::{GraphSource, Vertex},
        position::PositionKey,
    },
    types::err::{self},
};

/// The formula stating `vertex` is at `position` on the path of `length` edges through graph `index`.
pub fn at(
    table: &mut VariableTable,
    index: usize,
    position: usize,
    length: usize,
    vertex: Vertex,
) -> Result<Formula, err::BuildError> {
    let atom = table.variable(PositionKey::new(index, position, length, vertex))?;
    Ok(Formula::atom(atom))
}

/// φ1: the source is at position zero.
pub fn start_anchor(
    table: &mut VariableTable,
    index: usize,
    length: usize,
    source: Vertex,
) -> Result<Formula, err::BuildError> {
    at(table, index, 0, length, source)
}

/// φ2: the target is at the last position.
pub fn end_anchor(
    table: &mut VariableTable,
    index: usize,
    length: usize,
    target: Vertex,
) -> Result<Formula, err::BuildError> {
    at(table, index, length, length, target)
}

/// φ3: each position holds at least one vertex.
pub fn coverage<G: GraphSource>(
    table: &mut VariableTable,
    graph: &G,
    index: usize,
    length: usize,
) -> Result<Formula, err::BuildError> {
    let mut conjuncts = Vec::with_capacity(length + 1);
    for position in 0..=length {
        let mut disjuncts = Vec::with_capacity(graph.order());
        for vertex in 0..graph.order() {
            disjuncts.push(at(table, index, position, length, vertex)?);
        }
        conjuncts.push(Formula::or(disjuncts));
    }
    Ok(Formula::and(conjuncts))
}

/// φ4: no position holds two distinct vertices.
pub fn unique_per_position<G: GraphSource>(
    table: &mut VariableTable,
    graph: &G,
    index: usize,
    length: usize,
) -> Result<Formula, err::BuildError> {
    let mut conjuncts = Vec::default();
    for position in 0..=length {
        for vertex in 0..graph.order() {
            for other in vertex + 1..graph.order() {
                conjuncts.push(Formula::or([
                    Formula::not(at(table, index, position, length, vertex)?),
                    Formula::not(at(table, index, position, length, other)?),
                ]));
            }
        }
    }
    Ok(Formula::and(conjuncts))
}

/// φ5: no vertex is at two distinct positions.
pub fn unique_per_vertex<G: GraphSource>(
    table: &mut VariableTable,
    graph: &G,
    index: usize,
    length: usize,
) -> Result<Formula, err::BuildError> {
    let mut conjuncts = Vec::default();
    for vertex in 0..graph.order() {
        for position in 0..=length {
            for later in position + 1..=length {
                conjuncts.push(Formula::or([
                    Formula::not(at(table, index, position, length, vertex)?),
                    Formula::not(at(table, index, later, length, vertex)?),
                ]));
            }
        }
    }
    Ok(Formula::and(conjuncts))
}

/// φ6: each pair of consecutive positions is joined by an edge.
///
/// If the graph has no edges, each step is ⊥, and so the family is ⊥ for any non-zero length.
pub fn edge_continuity<G: GraphSource>(
    table: &mut VariableTable,
    graph: &G,
    index: usize,
    length: usize,
) -> Result<Formula, err::BuildError> {
    let mut conjuncts = Vec::with_capacity(length);
    for position in 0..length {
        let mut steps = Vec::default();
        for from in 0..graph.order() {
            for to in 0..graph.order() {
                if graph.is_edge(from, to) {
                    steps.push(Formula::and([
                        at(table, index, position, length, from)?,
                        at(table, index, position + 1, length, to)?,
                    ]));
                }
            }
        }
        conjuncts.push(Formula::or(steps));
    }
    Ok(Formula::and(conjuncts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{graph::Graph, model::Model};

    fn model_of(table: &VariableTable, true_keys: &[PositionKey]) -> Model {
        let mut values = vec![false; table.count()];
        for key in true_keys {
            if let Some(atom) = table.get(key) {
                values[atom as usize] = true;
            }
        }
        Model::from(values)
    }

    #[test]
    fn anchors_share_variables_with_coverage() {
        let graph = Graph::from_edges("g", 2, &[(0, 1)], 0, 1);
        let mut table = VariableTable::default();

        let start = start_anchor(&mut table, 0, 1, 0).unwrap();
        let count = table.count();
        let _ = coverage(&mut table, &graph, 0, 1).unwrap();

        // Coverage mentions the anchored variable, along with three others.
        assert_eq!(table.count(), count + 3);
        assert_eq!(
            start,
            Formula::atom(table.get(&PositionKey::new(0, 0, 1, 0)).unwrap())
        );
    }

    #[test]
    fn uniqueness_counts() {
        let graph = Graph::from_edges("g", 4, &[], 0, 3);
        let mut table = VariableTable::default();

        // Four vertices give six pairs at each of the three positions.
        match unique_per_position(&mut table, &graph, 0, 2).unwrap() {
            Formula::And(clauses) => assert_eq!(clauses.len(), 3 * 6),
            other => panic!("Unexpected {other:?}"),
        }

        // Three positions give three pairs for each of the four vertices.
        match unique_per_vertex(&mut table, &graph, 0, 2).unwrap() {
            Formula::And(clauses) => assert_eq!(clauses.len(), 4 * 3),
            other => panic!("Unexpected {other:?}"),
        }
    }

    #[test]
    fn zero_length_families() {
        let graph = Graph::from_edges("g", 3, &[(0, 1)], 0, 0);
        let mut table = VariableTable::default();

        assert_eq!(
            unique_per_vertex(&mut table, &graph, 0, 0).unwrap(),
            Formula::Top
        );
        assert_eq!(
            edge_continuity(&mut table, &graph, 0, 0).unwrap(),
            Formula::Top
        );
    }

    #[test]
    fn continuity_without_edges() {
        let graph = Graph::from_edges("g", 2, &[], 0, 1);
        let mut table = VariableTable::default();
        assert_eq!(
            edge_continuity(&mut table, &graph, 0, 1).unwrap(),
            Formula::Bottom
        );
    }

    #[test]
    fn continuity_on_a_path() {
        let graph = Graph::from_edges("g", 3, &[(0, 1), (1, 2)], 0, 2);
        let mut table = VariableTable::default();
        let continuity = edge_continuity(&mut table, &graph, 0, 2).unwrap();

        let along = model_of(
            &table,
            &[
                PositionKey::new(0, 0, 2, 0),
                PositionKey::new(0, 1, 2, 1),
                PositionKey::new(0, 2, 2, 2),
            ],
        );
        assert!(continuity.evaluate(&along));

        let against = model_of(
            &table,
            &[
                PositionKey::new(0, 0, 2, 0),
                PositionKey::new(0, 1, 2, 2),
                PositionKey::new(0, 2, 2, 1),
            ],
        );
        assert!(!continuity.evaluate(&against));
    }
}
