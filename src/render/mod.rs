/*!
Text for witnesses.

- A [path line](path_line) lists the vertices of a path by name, e.g. `s -> a -> t`.
- A [listing] has a path line for each graph, prefixed by the name of the graph.
- A [dot graph](dot) draws each graph with the path through it highlighted.

A dot graph is written through [petgraph's dot writer](petgraph::dot), with each vertex numbered through the graphs in turn and labelled with its name, so graphs which share vertex names are drawn apart.
The source of each graph is marked with `initial=1` and the target with `final=1`, so a dot graph of a single graph may be read back as that graph.

```rust
# use equal_path::render::{listing, path_line};
# use equal_path::reports::Witness;
# use equal_path::structures::graph::Graph;
# use equal_path::structures::path::Path;
let graphs = [Graph::from_dot_str("digraph g { s [initial=1]; t [final=1]; s -> a -> t; }").unwrap()];
let witness = Witness {
    length: 2,
    paths: vec![Path::new(0, vec![0, 2, 1])],
};

assert_eq!(path_line(&graphs[0], &witness.paths[0]), "s -> a -> t");
assert_eq!(listing(&graphs, &witness), "g: s -> a -> t\n");
```
*/

use std::path::{Path as FilePath, PathBuf};

use petgraph::{
    dot::{Config, Dot},
    graph::{DiGraph, EdgeReference, NodeIndex},
};

use crate::{
    reports::Witness,
    structures::{graph::GraphSource, path::Path},
};

/// The vertex name, joined by arrows, of each vertex in `path`.
pub fn path_line<G: GraphSource>(graph: &G, path: &Path) -> String {
    path.vertices
        .iter()
        .map(|vertex| graph.name_of(*vertex))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// A line for the path through each graph of `witness`, prefixed by the name of the graph.
pub fn listing<G: GraphSource>(graphs: &[G], witness: &Witness) -> String {
    let mut text = String::default();
    for path in &witness.paths {
        if let Some(graph) = graphs.get(path.graph) {
            text.push_str(&format!("{}: {}\n", graph.name(), path_line(graph, path)));
        }
    }
    text
}

/// A vertex as drawn, displayed by name.
struct Drawn<'g> {
    name: &'g str,
    source: bool,
    target: bool,
    visited: bool,
}

impl std::fmt::Display for Drawn<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Each graph as a part of a single graph, with edges weighted by whether the path of `witness` traverses them.
fn drawing<'g, G: GraphSource>(
    graphs: &'g [G],
    witness: &Witness,
) -> DiGraph<Drawn<'g>, bool> {
    let mut drawing = DiGraph::default();

    for (index, graph) in graphs.iter().enumerate() {
        let path = witness.paths.iter().find(|path| path.graph == index);

        let nodes = (0..graph.order())
            .map(|vertex| {
                drawing.add_node(Drawn {
                    name: graph.name_of(vertex),
                    source: graph.is_source(vertex),
                    target: graph.is_target(vertex),
                    visited: path.is_some_and(|path| path.visits(vertex)),
                })
            })
            .collect::<Vec<_>>();

        for from in 0..graph.order() {
            for to in 0..graph.order() {
                if graph.is_edge(from, to) {
                    let on_path = path.is_some_and(|path| path.traverses(from, to));
                    drawing.add_edge(nodes[from], nodes[to], on_path);
                }
            }
        }
    }

    drawing
}

fn vertex_attributes(
    _: &DiGraph<Drawn<'_>, bool>,
    (_, vertex): (NodeIndex, &Drawn<'_>),
) -> String {
    let mut attributes = String::default();
    if vertex.source {
        attributes.push_str("initial=1 color=green ");
    }
    if vertex.target {
        attributes.push_str("final=1 color=red ");
    }
    if vertex.visited {
        attributes.push_str("style=filled fillcolor=lightblue ");
    }
    attributes
}

fn edge_attributes(_: &DiGraph<Drawn<'_>, bool>, edge: EdgeReference<'_, bool>) -> String {
    match *edge.weight() {
        true => "color=blue penwidth=2 ".to_owned(),
        false => String::default(),
    }
}

/// A dot graph of each graph, with the path of `witness` through each graph highlighted.
///
/// The graph is preceded by a comment with `name` and the length of the witness.
pub fn dot<G: GraphSource>(graphs: &[G], witness: &Witness, name: &str) -> String {
    let drawing = drawing(graphs, witness);
    format!(
        "// {name}-l{}\n{}",
        witness.length,
        Dot::with_attr_getters(
            &drawing,
            &[Config::EdgeNoLabel],
            &edge_attributes,
            &vertex_attributes
        )
    )
}

/// Writes the [dot graph](dot) of `witness` to `<dir>/<name>-l<length>.dot`, creating `dir` if needed.
///
/// Returns the path to the file written.
pub fn write_dot<G: GraphSource>(
    dir: &FilePath,
    name: &str,
    graphs: &[G],
    witness: &Witness,
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let file = dir.join(format!("{name}-l{}.dot", witness.length));
    std::fs::write(&file, dot(graphs, witness, name))?;
    Ok(file)
}
