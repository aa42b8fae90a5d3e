//! An oracle backed by [varisat](::varisat).
//!
//! Each call lowers the formula to [clauses](crate::encoding::cnf) and hands these to a fresh solver, so no state is carried between calls.
//! Auxiliary atoms from the lowering begin after the greatest atom of the formula.
//! Only atoms of the formula are reported in a model.
//!
//! ```rust
//! # use equal_path::oracle::{Oracle, Verdict};
//! # use equal_path::oracle::varisat::VarisatOracle;
//! # use equal_path::structures::formula::Formula;
//! let mut oracle = VarisatOracle::default();
//!
//! let p = Formula::atom(0);
//! let q = Formula::atom(1);
//!
//! let formula = Formula::and([Formula::or([p.clone(), q.clone()]), Formula::not(p.clone())]);
//! match oracle.solve(&formula).unwrap() {
//!     Verdict::Satisfiable(model) => assert!(!model.value_of(0) && model.value_of(1)),
//!     _ => panic!("p ∨ q with ¬p is satisfiable"),
//! }
//!
//! let formula = Formula::and([p.clone(), Formula::not(p)]);
//! assert_eq!(oracle.solve(&formula).unwrap(), Verdict::Unsatisfiable);
//! assert_eq!(oracle.calls(), 2);
//! ```

use ::varisat::{CnfFormula, ExtendFormula, Lit, Solver, Var};

use crate::{
    encoding::cnf::Cnf,
    misc::log::targets,
    oracle::{Oracle, Verdict},
    structures::{atom::Atom, clause::Clause, formula::Formula, literal::CLiteral, model::Model},
    types::err::ErrorKind,
};

/// An oracle which solves each formula with a fresh varisat solver.
#[derive(Debug, Default)]
pub struct VarisatOracle {
    /// A count of calls made to the oracle.
    calls: usize,
}

impl VarisatOracle {
    /// A count of calls made to the oracle.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// A verdict on `cnf`, with the model restricted to atoms for which `reported` holds.
    pub fn solve_cnf(&mut self, cnf: &Cnf, reported: impl Fn(Atom) -> bool) -> Verdict {
        self.calls += 1;

        let mut clauses = CnfFormula::new();
        for clause in &cnf.clauses {
            let literals = clause
                .literals()
                .map(|literal| {
                    let var = Var::from_index(literal.atom() as usize);
                    match literal.polarity() {
                        true => var.positive(),
                        false => var.negative(),
                    }
                })
                .collect::<Vec<Lit>>();
            clauses.add_clause(&literals);
        }

        let mut solver = Solver::new();
        solver.add_formula(&clauses);

        log::info!(target: targets::ORACLE, "Call {} with {} clauses over {} atoms", self.calls, cnf.clauses.len(), cnf.atom_count);

        match solver.solve() {
            Ok(true) => match solver.model() {
                Some(literals) => {
                    let model = literals
                        .into_iter()
                        .map(|literal| {
                            CLiteral::new(literal.index() as Atom, literal.is_positive())
                        })
                        .filter(|literal| reported(literal.atom()))
                        .collect::<Model>();
                    Verdict::Satisfiable(model)
                }

                None => {
                    log::warn!(target: targets::ORACLE, "No model for a satisfiable formula");
                    Verdict::Unknown
                }
            },

            Ok(false) => Verdict::Unsatisfiable,

            Err(e) => {
                log::warn!(target: targets::ORACLE, "Solve failed: {e:?}");
                Verdict::Unknown
            }
        }
    }
}

impl Oracle for VarisatOracle {
    fn solve(&mut self, formula: &Formula) -> Result<Verdict, ErrorKind> {
        let cnf = Cnf::lowered(formula)?;

        let atoms = formula.atoms();
        let verdict = self.solve_cnf(&cnf, |atom| atoms.contains(&atom));

        match verdict {
            Verdict::Satisfiable(_) => log::info!(target: targets::ORACLE, "Satisfiable"),
            Verdict::Unsatisfiable => log::info!(target: targets::ORACLE, "Unsatisfiable"),
            Verdict::Unknown => log::info!(target: targets::ORACLE, "Unknown"),
        }
        Ok(verdict)
    }
}

impl Drop for VarisatOracle {
    fn drop(&mut self) {
        log::debug!(target: targets::ORACLE, "Oracle released after {} calls", self.calls);
    }
}
