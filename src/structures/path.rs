/*!
Paths through a graph, as read from a model.

A path of length *k* is a sequence of *k + 1* vertices.
A path is accepting in a graph if it starts at the source and ends at the target of the graph, and simple if no vertex repeats.

```rust
# use equal_path::structures::graph::Graph;
# use equal_path::structures::path::Path;
let graph = Graph::from_edges("triangle", 3, &[(0, 1), (1, 2), (0, 2)], 0, 2);

let path = Path::new(0, vec![0, 1, 2]);
assert_eq!(path.length(), 2);
assert!(path.is_accepting_in(&graph));

assert!(!Path::new(0, vec![0, 2, 1]).is_accepting_in(&graph));
```
*/

use std::collections::HashSet;

use crate::structures::graph::{GraphSource, Vertex};

/// The vertices of a path through the graph with index `graph`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// The index of the graph the path is through.
    pub graph: usize,

    /// The vertices of the path, in order.
    pub vertices: Vec<Vertex>,
}

impl Path {
    pub fn new(graph: usize, vertices: Vec<Vertex>) -> Self {
        Path { graph, vertices }
    }

    /// The number of edges on the path.
    ///
    /// The empty sequence of vertices is taken to have length zero.
    pub fn length(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// An iterator over the edges of the path, in order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Whether `vertex` is on the path.
    pub fn visits(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Whether the edge from `from` to `to` is on the path.
    pub fn traverses(&self, from: Vertex, to: Vertex) -> bool {
        self.edges().any(|edge| edge == (from, to))
    }

    /// Whether the path is a simple accepting path of `graph`.
    ///
    /// That is, the path is non-empty, starts at the source, ends at the target, visits each vertex at most once, and each consecutive pair of vertices is an edge.
    pub fn is_accepting_in<G: GraphSource>(&self, graph: &G) -> bool {
        let (Some(first), Some(last)) = (self.vertices.first(), self.vertices.last()) else {
            return false;
        };

        if !graph.is_source(*first) || !graph.is_target(*last) {
            return false;
        }

        let mut seen = HashSet::with_capacity(self.vertices.len());
        if !self.vertices.iter().all(|vertex| seen.insert(*vertex)) {
            return false;
        }

        self.edges().all(|(from, to)| graph.is_edge(from, to))
    }
}
