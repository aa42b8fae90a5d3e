/*!
(The internal representation of) an atom (aka. a 'variable').

Atoms are allocated by a [variable table](crate::db::variable::VariableTable) in order, from `0`, and so the atoms of a formula are `[0..m)` for some `m`.
This allows atoms to be used as the indicies of a structure, e.g. the values of a [model](crate::structures::model::Model).

Auxiliary atoms introduced when lowering a formula to clauses follow the atoms of the table.

# Notes
In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// The DIMACS representation of an atom is the atom plus one, as a signed 32 bit integer.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs() - 1;
