/*!
Formulas of propositional logic, over [literals](crate::structures::literal).

Formulas are built through constructors which perform some light simplification:
- Nested conjunctions (and disjunctions) are flattened.
- ⊤ is dropped from conjunctions and ⊥ from disjunctions.
- A conjunction containing ⊥ is ⊥, and a disjunction containing ⊤ is ⊤.
- A conjunction (or disjunction) of a single formula is that formula.
- Negation is pushed onto literals and constants.

Notably, the empty conjunction is ⊤ and the empty disjunction is ⊥.

```rust
# use equal_path::structures::formula::Formula;
# use equal_path::structures::model::Model;
let p = Formula::atom(0);
let q = Formula::atom(1);

let f = Formula::and([Formula::or([p.clone(), q.clone()]), Formula::not(p.clone())]);
assert_eq!(f.to_string(), "((0 ∨ 1) ∧ ¬0)");

assert!(f.evaluate(&Model::from(vec![false, true])));
assert!(!f.evaluate(&Model::from(vec![true, true])));

assert_eq!(Formula::and(Vec::new()), Formula::Top);
assert_eq!(Formula::or(Vec::new()), Formula::Bottom);
assert_eq!(Formula::and([p.clone(), Formula::Bottom]), Formula::Bottom);
```
*/

use std::collections::BTreeSet;

use crate::structures::{atom::Atom, literal::CLiteral, model::Model};

/// A formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// Verum, always true.
    Top,

    /// Falsum, never true.
    Bottom,

    /// A literal.
    Literal(CLiteral),

    /// The negation of a (non-literal, non-constant) formula.
    Not(Box<Formula>),

    /// The conjunction of (at least two) formulas.
    And(Vec<Formula>),

    /// The disjunction of (at least two) formulas.
    Or(Vec<Formula>),
}

impl Formula {
    /// The formula consisting of `atom`.
    pub fn atom(atom: Atom) -> Self {
        Formula::Literal(CLiteral::new(atom, true))
    }

    /// The formula consisting of `literal`.
    pub fn literal(literal: CLiteral) -> Self {
        Formula::Literal(literal)
    }

    /// The negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(formula: Formula) -> Self {
        match formula {
            Formula::Top => Formula::Bottom,
            Formula::Bottom => Formula::Top,
            Formula::Literal(literal) => Formula::Literal(literal.negate()),
            Formula::Not(inner) => *inner,
            other => Formula::Not(Box::new(other)),
        }
    }

    /// The conjunction of `formulas`.
    pub fn and(formulas: impl IntoIterator<Item = Formula>) -> Self {
        let mut conjuncts = Vec::default();
        for formula in formulas {
            match formula {
                Formula::Top => {}
                Formula::Bottom => return Formula::Bottom,
                Formula::And(inner) => conjuncts.extend(inner),
                other => conjuncts.push(other),
            }
        }

        match conjuncts.len() {
            0 => Formula::Top,
            1 => conjuncts.swap_remove(0),
            _ => Formula::And(conjuncts),
        }
    }

    /// The disjunction of `formulas`.
    pub fn or(formulas: impl IntoIterator<Item = Formula>) -> Self {
        let mut disjuncts = Vec::default();
        for formula in formulas {
            match formula {
                Formula::Bottom => {}
                Formula::Top => return Formula::Top,
                Formula::Or(inner) => disjuncts.extend(inner),
                other => disjuncts.push(other),
            }
        }

        match disjuncts.len() {
            0 => Formula::Bottom,
            1 => disjuncts.swap_remove(0),
            _ => Formula::Or(disjuncts),
        }
    }

    /// The count of nodes in the formula.
    pub fn size(&self) -> usize {
        match self {
            Formula::Top | Formula::Bottom | Formula::Literal(_) => 1,
            Formula::Not(inner) => 1 + inner.size(),
            Formula::And(inner) | Formula::Or(inner) => {
                1 + inner.iter().map(|formula| formula.size()).sum::<usize>()
            }
        }
    }

    /// The greatest atom in the formula, if the formula contains some atom.
    pub fn max_atom(&self) -> Option<Atom> {
        match self {
            Formula::Top | Formula::Bottom => None,
            Formula::Literal(literal) => Some(literal.atom()),
            Formula::Not(inner) => inner.max_atom(),
            Formula::And(inner) | Formula::Or(inner) => {
                inner.iter().filter_map(|formula| formula.max_atom()).max()
            }
        }
    }

    /// The atoms of the formula.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<Atom>) {
        match self {
            Formula::Top | Formula::Bottom => {}
            Formula::Literal(literal) => {
                atoms.insert(literal.atom());
            }
            Formula::Not(inner) => inner.collect_atoms(atoms),
            Formula::And(inner) | Formula::Or(inner) => {
                for formula in inner {
                    formula.collect_atoms(atoms);
                }
            }
        }
    }

    /// The value of the formula on `model`.
    pub fn evaluate(&self, model: &Model) -> bool {
        match self {
            Formula::Top => true,
            Formula::Bottom => false,
            Formula::Literal(literal) => model.satisfies(*literal),
            Formula::Not(inner) => !inner.evaluate(model),
            Formula::And(inner) => inner.iter().all(|formula| formula.evaluate(model)),
            Formula::Or(inner) => inner.iter().any(|formula| formula.evaluate(model)),
        }
    }

    /// The formula, with atoms displayed through `name`.
    pub fn named<F: Fn(Atom) -> String>(&self, name: F) -> NamedFormula<'_, F> {
        NamedFormula {
            formula: self,
            name,
        }
    }

    fn write_with(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        name: &impl Fn(Atom) -> String,
    ) -> std::fmt::Result {
        match self {
            Formula::Top => write!(f, "⊤"),
            Formula::Bottom => write!(f, "⊥"),
            Formula::Literal(literal) => match literal.polarity() {
                true => write!(f, "{}", name(literal.atom())),
                false => write!(f, "¬{}", name(literal.atom())),
            },
            Formula::Not(inner) => {
                write!(f, "¬")?;
                inner.write_with(f, name)
            }
            Formula::And(inner) | Formula::Or(inner) => {
                let connective = match self {
                    Formula::And(_) => " ∧ ",
                    _ => " ∨ ",
                };
                write!(f, "(")?;
                for (index, formula) in inner.iter().enumerate() {
                    if index > 0 {
                        write!(f, "{connective}")?;
                    }
                    formula.write_with(f, name)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_with(f, &|atom: Atom| atom.to_string())
    }
}

/// A formula paired with a method for naming atoms, for display.
pub struct NamedFormula<'f, F: Fn(Atom) -> String> {
    formula: &'f Formula,
    name: F,
}

impl<F: Fn(Atom) -> String> std::fmt::Display for NamedFormula<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.formula.write_with(f, &self.name)
    }
}
