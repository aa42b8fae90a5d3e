//! A library for deciding whether a collection of directed graphs share a common length of simple accepting paths.
//!
//! Each graph has a designated source and target vertex.
//! A path of a graph is *accepting* if it starts at the source and ends at the target, and *simple* if no vertex is visited twice.
//! The question decided is whether some *k* exists such that every graph has a simple accepting path of exactly *k* edges.
//!
//! The question is reduced to boolean satisfiability: a [formula](structures::formula) is built whose models are exactly the witnesses, the formula is handed to an [oracle], and on satisfiability the witnessing paths are [decoded](decoding) from the model.
//!
//! # Orientation
//!
//! The library is built around a [session](procedures::Session), which borrows the graphs, owns an oracle, and owns a [table of variables](db::variable::VariableTable).
//!
//! - The [encoding] details the six clause families which together axiomatise a simple accepting path of a fixed length, and how these are assembled over graphs and lengths.
//! - The [decoding] recovers the witnessed length and paths from a model.
//! - The [render] module turns decoded paths into text, either as a listing or as a dot graph.
//! - Graphs are read through the [dot builder](builder::dot), or built directly with a [GraphBuilder](structures::graph::GraphBuilder).
//!
//! # Example
//!
//! ```rust
//! # use equal_path::config::Config;
//! # use equal_path::oracle::varisat::VarisatOracle;
//! # use equal_path::procedures::Session;
//! # use equal_path::reports::Report;
//! # use equal_path::structures::graph::Graph;
//! let triangle = Graph::from_dot_str(
//!     "digraph triangle {
//!        s [initial=1];
//!        t [final=1];
//!        s -> m -> t;
//!        s -> t;
//!      }",
//! )
//! .unwrap();
//!
//! let line = Graph::from_dot_str(
//!     "digraph line {
//!        a [initial=1];
//!        c [final=1];
//!        a -> b -> c;
//!      }",
//! )
//! .unwrap();
//!
//! let graphs = [triangle, line];
//! let mut session = Session::new(Config::default(), &graphs, VarisatOracle::default()).unwrap();
//!
//! let decision = session.decide().unwrap();
//! assert_eq!(decision.report(), Report::Satisfiable);
//!
//! let witness = decision.witnesses().next().unwrap();
//! assert_eq!(witness.length, 2);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with targets listed in [misc::log].
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), the size of each formula built can be seen with `RUST_LOG=encoding=info …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod db;
pub mod decoding;
pub mod encoding;
pub mod misc;
pub mod oracle;
pub mod procedures;
pub mod render;
pub mod reports;
pub mod structures;
pub mod types;
