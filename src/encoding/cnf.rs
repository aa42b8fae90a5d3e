/*!
Conjunctive normal form, for oracles which take a formula as a collection of clauses.

A formula is lowered to clauses in two steps:
1. Negation is pushed inwards, so negation only applies to atoms.
2. Clauses are read from the top-level conjunction, and each compound formula within a clause is replaced by a fresh atom which implies the formula.

The second step is the one-sided (Plaisted-Greenbaum) variant of the Tseitin transformation.
As the formula is free of negation after the first step, a fresh atom only ever occurs positively in a clause, and so only requires clauses stating it implies the formula it replaces.
The clauses are equisatisfiable with the formula, and any model of the clauses is a model of the formula when restricted to the atoms of the formula.

```rust
# use equal_path::encoding::cnf::Cnf;
# use equal_path::structures::formula::Formula;
let p = Formula::atom(0);
let q = Formula::atom(1);
let r = Formula::atom(2);

let formula = Formula::and([
    Formula::or([p.clone(), Formula::and([q.clone(), r.clone()])]),
    Formula::not(p.clone()),
]);

let cnf = Cnf::from_formula(&formula, 3).unwrap();
assert_eq!(cnf.as_dimacs(), "p cnf 4 4\n-4 2 0\n-4 3 0\n1 4 0\n-1 0\n");
```
*/

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        formula::Formula,
        literal::CLiteral,
    },
    types::err::{self},
};

/// A collection of clauses, together with a count of the atoms used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cnf {
    /// The clauses.
    pub clauses: Vec<CClause>,

    /// One more than the greatest atom which may appear in a clause.
    pub atom_count: usize,
}

impl Cnf {
    /// Clauses equisatisfiable with `formula`, with fresh atoms allocated from `fresh`.
    ///
    /// Each atom of the formula should be less than `fresh`.
    pub fn from_formula(formula: &Formula, fresh: Atom) -> Result<Self, err::BuildError> {
        let mut lowering = Lowering {
            clauses: Vec::default(),
            fresh,
        };
        lowering.assert(&negation_normal_form(formula, false))?;

        Ok(Cnf {
            clauses: lowering.clauses,
            atom_count: lowering.fresh as usize,
        })
    }

    /// Clauses equisatisfiable with `formula`, with fresh atoms allocated after the greatest atom of the formula.
    ///
    /// These are the clauses an oracle is handed for the formula.
    pub fn lowered(formula: &Formula) -> Result<Self, err::BuildError> {
        let fresh = match formula.max_atom() {
            Some(atom) => atom.checked_add(1).ok_or(err::BuildError::AtomsExhausted)?,
            None => 0,
        };
        Self::from_formula(formula, fresh)
    }

    /// The clauses as a DIMACS string, with a preceding header.
    pub fn as_dimacs(&self) -> String {
        let mut dimacs = format!("p cnf {} {}\n", self.atom_count, self.clauses.len());
        for clause in &self.clauses {
            dimacs.push_str(&clause.as_dimacs(true));
            dimacs.push('\n');
        }
        dimacs
    }
}

/// The formula with negation pushed to the atoms, and negated if `negate` is set.
fn negation_normal_form(formula: &Formula, negate: bool) -> Formula {
    match formula {
        Formula::Top | Formula::Bottom | Formula::Literal(_) => match negate {
            true => Formula::not(formula.clone()),
            false => formula.clone(),
        },

        Formula::Not(inner) => negation_normal_form(inner, !negate),

        Formula::And(inner) => {
            let inner = inner
                .iter()
                .map(|formula| negation_normal_form(formula, negate));
            match negate {
                true => Formula::or(inner),
                false => Formula::and(inner),
            }
        }

        Formula::Or(inner) => {
            let inner = inner
                .iter()
                .map(|formula| negation_normal_form(formula, negate));
            match negate {
                true => Formula::and(inner),
                false => Formula::or(inner),
            }
        }
    }
}

struct Lowering {
    clauses: Vec<CClause>,
    fresh: Atom,
}

impl Lowering {
    fn fresh_literal(&mut self) -> Result<CLiteral, err::BuildError> {
        if self.fresh > ATOM_MAX {
            return Err(err::BuildError::AtomsExhausted);
        }
        let literal = CLiteral::new(self.fresh, true);
        self.fresh += 1;
        Ok(literal)
    }

    /// Adds clauses requiring `formula` to be true.
    fn assert(&mut self, formula: &Formula) -> Result<(), err::BuildError> {
        match formula {
            Formula::Top => {}

            Formula::Bottom => self.clauses.push(CClause::default()),

            Formula::Literal(literal) => self.clauses.push(vec![*literal]),

            Formula::Not(inner) => self.assert(&negation_normal_form(inner, true))?,

            Formula::And(inner) => {
                for formula in inner {
                    self.assert(formula)?;
                }
            }

            Formula::Or(inner) => {
                let mut clause = Vec::with_capacity(inner.len());
                for formula in inner {
                    clause.push(self.literal_for(formula)?);
                }
                self.clauses.push(clause);
            }
        }
        Ok(())
    }

    /// A literal which implies `formula`, with clauses added to ensure this.
    fn literal_for(&mut self, formula: &Formula) -> Result<CLiteral, err::BuildError> {
        match formula {
            Formula::Literal(literal) => Ok(*literal),

            Formula::Not(inner) => self.literal_for(&negation_normal_form(inner, true)),

            Formula::Top => {
                let fresh = self.fresh_literal()?;
                self.clauses.push(vec![fresh]);
                Ok(fresh)
            }

            Formula::Bottom => {
                let fresh = self.fresh_literal()?;
                self.clauses.push(vec![fresh.negate()]);
                Ok(fresh)
            }

            Formula::And(inner) => {
                let fresh = self.fresh_literal()?;
                for formula in inner {
                    let literal = self.literal_for(formula)?;
                    self.clauses.push(vec![fresh.negate(), literal]);
                }
                Ok(fresh)
            }

            Formula::Or(inner) => {
                let fresh = self.fresh_literal()?;
                let mut clause = Vec::with_capacity(inner.len() + 1);
                clause.push(fresh.negate());
                for formula in inner {
                    clause.push(self.literal_for(formula)?);
                }
                self.clauses.push(clause);
                Ok(fresh)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::model::Model;

    // Every assignment to the atoms of the formula, as a model.
    fn assignments(atoms: usize) -> impl Iterator<Item = Model> {
        (0..1_usize << atoms).map(move |bits| {
            let values = (0..atoms).map(|atom| bits >> atom & 1 == 1);
            Model::from(values.collect::<Vec<_>>())
        })
    }

    // Whether some extension of `model` to the atoms of the clauses satisfies the clauses.
    fn extends(cnf: &Cnf, model: &Model, atoms: usize) -> bool {
        let fresh = cnf.atom_count - atoms;
        (0..1_usize << fresh).any(|bits| {
            let mut values = (0..atoms)
                .map(|atom| model.value_of(atom as Atom))
                .collect::<Vec<_>>();
            values.extend((0..fresh).map(|atom| bits >> atom & 1 == 1));
            let extended = Model::from(values);
            cnf.clauses
                .iter()
                .all(|clause| clause.iter().any(|literal| extended.satisfies(*literal)))
        })
    }

    #[test]
    fn constants() {
        let top = Cnf::from_formula(&Formula::Top, 0).unwrap();
        assert!(top.clauses.is_empty());

        let bottom = Cnf::from_formula(&Formula::Bottom, 0).unwrap();
        assert_eq!(bottom.clauses, vec![CClause::default()]);
        assert_eq!(bottom.as_dimacs(), "p cnf 0 1\n0\n");
    }

    #[test]
    fn negated_compounds() {
        let p = Formula::atom(0);
        let q = Formula::atom(1);
        let formula = Formula::not(Formula::and([p.clone(), Formula::not(q.clone())]));

        let cnf = Cnf::from_formula(&formula, 2).unwrap();
        assert_eq!(cnf.clauses, vec![vec![CLiteral::new(0, false), CLiteral::new(1, true)]]);
    }

    #[test]
    fn equisatisfiable_on_every_assignment() {
        let atom = Formula::atom;
        let formulas = [
            Formula::or([
                Formula::and([atom(0), atom(1)]),
                Formula::and([Formula::not(atom(1)), atom(2)]),
            ]),
            Formula::not(Formula::or([
                Formula::and([atom(0), Formula::not(atom(2))]),
                atom(1),
            ])),
            Formula::and([
                Formula::or([
                    atom(0),
                    Formula::or([Formula::and([atom(1), atom(2)]), Formula::Bottom]),
                ]),
                Formula::not(Formula::and([atom(0), atom(2)])),
            ]),
        ];

        for formula in formulas {
            let cnf = Cnf::from_formula(&formula, 3).unwrap();
            for model in assignments(3) {
                assert_eq!(formula.evaluate(&model), extends(&cnf, &model, 3), "{formula}");
            }
        }
    }

    #[test]
    fn lowering_allocates_past_the_formula() {
        let formula = Formula::or([
            Formula::and([Formula::atom(5), Formula::atom(9)]),
            Formula::not(Formula::atom(7)),
        ]);

        let cnf = Cnf::lowered(&formula).unwrap();
        assert_eq!(cnf, Cnf::from_formula(&formula, 10).unwrap());
        assert_eq!(cnf.atom_count, 11);
        assert!(cnf.as_dimacs().starts_with("p cnf 11 3\n"));

        assert_eq!(Cnf::lowered(&Formula::Top).unwrap().atom_count, 0);
    }
}
