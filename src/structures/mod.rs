/*!
Abstract elements of a decision and their representation.

- [Graphs](graph), with a designated source and target.
- [Position keys](position), the tuples identifying each boolean variable of an encoding.
- [Atoms](atom), [literals](literal) and [clauses](clause), as passed to an [oracle](crate::oracle).
- [Formulas](formula), as built by the [encoding](crate::encoding).
- [Models](model), as returned from an oracle.
- [Paths](path), as read from a model.
*/

pub mod atom;
pub mod clause;
pub mod formula;
pub mod graph;
pub mod literal;
pub mod model;
pub mod path;
pub mod position;
