/*!
Tools for building graphs.

Graphs may be built directly through a [GraphBuilder](crate::structures::graph::GraphBuilder), or read from a dot file with [read_dot](dot::read_dot).
*/

pub mod dot;
