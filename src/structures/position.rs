/*!
Keys identifying the variables of an encoding.

Each variable of an encoding states that some vertex of some graph is at some position of a path of some length.
The key of such a variable is the tuple (graph, position, length, vertex), written x<sub>g,j,k,v</sub>.

Keys are compared as tuples, and so two keys are the same key exactly when each component is the same.
No serialisation of the key is used to identify a variable, though keys are displayed as `x_g,j,k,v`, which is unambiguous as each component is written in decimal.

```rust
# use equal_path::structures::position::PositionKey;
let key = PositionKey::new(1, 12, 3, 4);
let other = PositionKey::new(11, 2, 3, 4);

assert_ne!(key, other);
assert_eq!(key.to_string(), "x_1,12,3,4");
assert_eq!(other.to_string(), "x_11,2,3,4");
```
*/

use crate::structures::graph::Vertex;

/// The key of a variable stating `vertex` of graph `graph` is at `position` on a path of `length` edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionKey {
    /// The index of the graph in the collection of graphs.
    pub graph: usize,

    /// The position on the path, from `0` to `length` (inclusive).
    pub position: usize,

    /// The number of edges on the path.
    pub length: usize,

    /// The vertex.
    pub vertex: Vertex,
}

impl PositionKey {
    pub fn new(graph: usize, position: usize, length: usize, vertex: Vertex) -> Self {
        Self {
            graph,
            position,
            length,
            vertex,
        }
    }
}

impl std::fmt::Display for PositionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x_{},{},{},{}",
            self.graph, self.position, self.length, self.vertex
        )
    }
}
