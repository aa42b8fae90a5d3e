#![allow(dead_code)]

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use equal_path::{
    builder::dot::read_dot,
    config::{Config, LengthOrder, Search},
    oracle::varisat::VarisatOracle,
    procedures::Session,
    reports::Decision,
    structures::graph::{endpoints, Graph},
};
use petgraph::{algo::all_simple_paths, graph::NodeIndex};

pub fn graphs_path() -> PathBuf {
    Path::new(".").join("tests").join("graphs")
}

pub fn load_graph(path: &Path) -> Graph {
    let file = match std::fs::File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };
    let stem = path.file_stem().unwrap().to_string_lossy();
    read_dot(std::io::BufReader::new(&file), &stem).unwrap()
}

pub fn fixture(name: &str) -> Graph {
    load_graph(&graphs_path().join(format!("{name}.dot")))
}

/// The lengths of simple accepting paths through `graph`, by enumerating the paths.
pub fn accepting_lengths(graph: &Graph) -> BTreeSet<usize> {
    let ends = endpoints(graph, 0).unwrap();
    if ends.source == ends.target {
        return BTreeSet::from([0]);
    }

    all_simple_paths::<Vec<_>, _>(
        graph.structure(),
        NodeIndex::new(ends.source),
        NodeIndex::new(ends.target),
        0,
        None,
    )
    .map(|path| path.len() - 1)
    .collect()
}

/// The lengths shared by each graph, by enumerating the paths.
pub fn common_lengths(graphs: &[Graph]) -> BTreeSet<usize> {
    let mut graphs = graphs.iter();
    let mut common = match graphs.next() {
        Some(graph) => accepting_lengths(graph),
        None => return BTreeSet::default(),
    };
    for graph in graphs {
        let lengths = accepting_lengths(graph);
        common.retain(|length| lengths.contains(length));
    }
    common
}

pub fn global_config() -> Config {
    Config::default()
}

pub fn exhaustive_config() -> Config {
    let mut config = Config::default();
    config.search.value = Search::Separate;
    config.order.value = LengthOrder::Ascending;
    config.exhaustive.value = true;
    config
}

pub fn decide(graphs: &[Graph], config: Config) -> Decision {
    let mut session = Session::new(config, graphs, VarisatOracle::default()).unwrap();
    session.decide().unwrap()
}

/// The lengths witnessed by an exhaustive separate search.
pub fn witnessed_lengths(graphs: &[Graph]) -> BTreeSet<usize> {
    decide(graphs, exhaustive_config())
        .witnesses()
        .map(|witness| witness.length)
        .collect()
}
