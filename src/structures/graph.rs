/*!
Directed graphs with a designated source and target vertex.

The encoding only requires a handful of queries on a graph, and these are collected in the [GraphSource] trait.
The canonical implementation is [Graph], which stores the graph as a [petgraph] directed graph with named vertices.

Vertices of a graph are `[0..n)` for `n` the order of the graph.

A graph is expected to have exactly one source and exactly one target, though nothing prevents a graph from being built otherwise.
Whether this is so is checked by [endpoints], and a [session](crate::procedures::Session) refuses graphs which fail the check.

```rust
# use equal_path::structures::graph::{GraphBuilder, GraphSource};
let mut builder = GraphBuilder::new("example");
let s = builder.vertex("s");
let t = builder.vertex("t");
builder.mark_source(s);
builder.mark_target(t);
builder.edge(s, t);

let graph = builder.build();

assert_eq!(graph.order(), 2);
assert!(graph.is_edge(s, t));
assert!(!graph.is_edge(t, s));
assert_eq!(graph.name_of(t), "t");
```
*/

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::types::err::GraphError;

/// A vertex, as an index into the vertices of a graph.
pub type Vertex = usize;

/// The queries made of a graph during encoding, decoding, and rendering.
pub trait GraphSource {
    /// The name of the graph.
    fn name(&self) -> &str;

    /// The number of vertices of the graph.
    fn order(&self) -> usize;

    /// Whether there is an edge from `from` to `to`.
    fn is_edge(&self, from: Vertex, to: Vertex) -> bool;

    /// Whether `vertex` is flagged as the source of the graph.
    fn is_source(&self, vertex: Vertex) -> bool;

    /// Whether `vertex` is flagged as the target of the graph.
    fn is_target(&self, vertex: Vertex) -> bool;

    /// The display name of `vertex`.
    fn name_of(&self, vertex: Vertex) -> &str;
}

/// The source and target of a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub source: Vertex,
    pub target: Vertex,
}

/// The unique source and target of `graph`, which is identified by `index` in any error.
pub fn endpoints<G: GraphSource>(graph: &G, index: usize) -> Result<Endpoints, GraphError> {
    if graph.order() == 0 {
        return Err(GraphError::EmptyGraph(index));
    }

    let mut source = None;
    let mut target = None;

    for vertex in 0..graph.order() {
        if graph.is_source(vertex) {
            match source {
                None => source = Some(vertex),
                Some(_) => return Err(GraphError::MultipleSources(index)),
            }
        }

        if graph.is_target(vertex) {
            match target {
                None => target = Some(vertex),
                Some(_) => return Err(GraphError::MultipleTargets(index)),
            }
        }
    }

    match (source, target) {
        (None, _) => Err(GraphError::MissingSource(index)),
        (_, None) => Err(GraphError::MissingTarget(index)),
        (Some(source), Some(target)) => Ok(Endpoints { source, target }),
    }
}

/// Details of a vertex.
#[derive(Clone, Debug, Default)]
pub struct VertexInfo {
    pub name: String,
    pub source: bool,
    pub target: bool,
}

/// A directed graph with named vertices, some of which may be flagged as the source or target.
#[derive(Clone, Debug)]
pub struct Graph {
    name: String,
    structure: DiGraph<VertexInfo, ()>,
}

impl Graph {
    /// A graph on vertices `[0..order)`, named by their index, with the given edges, source and target.
    ///
    /// ```rust
    /// # use equal_path::structures::graph::{Graph, GraphSource};
    /// let graph = Graph::from_edges("line", 3, &[(0, 1), (1, 2)], 0, 2);
    /// assert!(graph.is_source(0));
    /// assert_eq!(graph.name_of(2), "2");
    /// ```
    ///
    /// # Panics
    /// If an endpoint of an edge, or the source or target, is not a vertex.
    pub fn from_edges(
        name: &str,
        order: usize,
        edges: &[(Vertex, Vertex)],
        source: Vertex,
        target: Vertex,
    ) -> Self {
        let mut builder = GraphBuilder::new(name);
        for vertex in 0..order {
            builder.vertex(&vertex.to_string());
        }
        for (from, to) in edges {
            assert!(*from < order && *to < order, "Edge outside of the graph");
            builder.edge(*from, *to);
        }
        assert!(source < order && target < order, "Endpoint outside of the graph");
        builder.mark_source(source);
        builder.mark_target(target);
        builder.build()
    }

    /// An iterator over all edges of the graph, order is not guaranteed.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.structure
            .edge_indices()
            .filter_map(|edge| self.structure.edge_endpoints(edge))
            .map(|(from, to)| (from.index(), to.index()))
    }

    /// The number of edges of the graph.
    pub fn size(&self) -> usize {
        self.structure.edge_count()
    }

    /// The successors of `vertex`, order is not guaranteed.
    pub fn successors(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.structure
            .neighbors(NodeIndex::new(vertex))
            .map(|successor| successor.index())
    }

    /// The underlying petgraph structure.
    pub fn structure(&self) -> &DiGraph<VertexInfo, ()> {
        &self.structure
    }
}

impl GraphSource for Graph {
    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self) -> usize {
        self.structure.node_count()
    }

    fn is_edge(&self, from: Vertex, to: Vertex) -> bool {
        from < self.order()
            && to < self.order()
            && self
                .structure
                .contains_edge(NodeIndex::new(from), NodeIndex::new(to))
    }

    fn is_source(&self, vertex: Vertex) -> bool {
        self.structure
            .node_weight(NodeIndex::new(vertex))
            .is_some_and(|info| info.source)
    }

    fn is_target(&self, vertex: Vertex) -> bool {
        self.structure
            .node_weight(NodeIndex::new(vertex))
            .is_some_and(|info| info.target)
    }

    fn name_of(&self, vertex: Vertex) -> &str {
        match self.structure.node_weight(NodeIndex::new(vertex)) {
            Some(info) => &info.name,
            None => "",
        }
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Graph {} with {} vertices and {} edges",
            self.name,
            self.order(),
            self.size()
        )?;

        for vertex in 0..self.order() {
            let mut flags = Vec::new();
            if self.is_source(vertex) {
                flags.push("source");
            }
            if self.is_target(vertex) {
                flags.push("target");
            }

            let successors = self
                .successors(vertex)
                .map(|successor| self.name_of(successor))
                .collect::<Vec<_>>()
                .join(" ");

            match flags.is_empty() {
                true => writeln!(f, "  {} -> {{{successors}}}", self.name_of(vertex))?,
                false => writeln!(
                    f,
                    "  {} ({}) -> {{{successors}}}",
                    self.name_of(vertex),
                    flags.join(", ")
                )?,
            }
        }
        Ok(())
    }
}

/// Incremental construction of a [Graph].
///
/// Vertices are identified by name, and requesting a vertex by an existing name returns the existing vertex.
pub struct GraphBuilder {
    name: String,
    structure: DiGraph<VertexInfo, ()>,
    vertex_map: HashMap<String, Vertex>,
}

impl GraphBuilder {
    pub fn new(name: &str) -> Self {
        GraphBuilder {
            name: name.to_owned(),
            structure: DiGraph::default(),
            vertex_map: HashMap::default(),
        }
    }

    /// Sets the display name of `vertex` to `name`, without changing how the vertex is requested.
    pub fn label(&mut self, vertex: Vertex, name: &str) {
        if let Some(info) = self.structure.node_weight_mut(NodeIndex::new(vertex)) {
            info.name = name.to_owned();
        }
    }

    /// The vertex named `name`, added to the graph if not already present.
    pub fn vertex(&mut self, name: &str) -> Vertex {
        match self.vertex_map.get(name) {
            Some(vertex) => *vertex,
            None => {
                let index = self.structure.add_node(VertexInfo {
                    name: name.to_owned(),
                    ..Default::default()
                });
                self.vertex_map.insert(name.to_owned(), index.index());
                index.index()
            }
        }
    }

    /// Adds an edge from `from` to `to`, if the edge is not already present.
    pub fn edge(&mut self, from: Vertex, to: Vertex) {
        self.structure
            .update_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }

    /// Flags `vertex` as a source.
    pub fn mark_source(&mut self, vertex: Vertex) {
        if let Some(info) = self.structure.node_weight_mut(NodeIndex::new(vertex)) {
            info.source = true;
        }
    }

    /// Flags `vertex` as a target.
    pub fn mark_target(&mut self, vertex: Vertex) {
        if let Some(info) = self.structure.node_weight_mut(NodeIndex::new(vertex)) {
            info.target = true;
        }
    }

    pub fn build(self) -> Graph {
        Graph {
            name: self.name,
            structure: self.structure,
        }
    }
}
