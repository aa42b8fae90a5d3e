/*!
Oracles for the satisfiability of a formula.

An oracle is treated as opaque: it is given a formula, and returns a [Verdict].
On satisfiability, the verdict carries a [Model] of the formula, in which each atom of the formula is valued.

- Atoms which do not appear in the formula are valued false in the model, even if the oracle made use of the atom in some way.
- An oracle may fail to reach a verdict, e.g. due to some internal limit, and this is reported as [Verdict::Unknown] rather than as an error.

Errors are reserved for issues in handing the formula to the oracle, such as the [lowering](crate::encoding::cnf) of the formula exhausting atoms.

The default oracle is [VarisatOracle](varisat::VarisatOracle).
*/

pub mod varisat;

use crate::{
    structures::{formula::Formula, model::Model},
    types::err::ErrorKind,
};

/// The verdict of an oracle on a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The formula is satisfiable, as witnessed by the model.
    Satisfiable(Model),

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// The oracle did not reach a verdict.
    Unknown,
}

/// The oracle trait.
pub trait Oracle {
    /// A verdict on the satisfiability of `formula`.
    fn solve(&mut self, formula: &Formula) -> Result<Verdict, ErrorKind>;
}
