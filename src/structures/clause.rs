//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use equal_path::structures::literal::CLiteral;
//! # use equal_path::structures::clause::Clause;
//! let clause = vec![CLiteral::new(3, true), CLiteral::new(0, false)];
//!
//! assert_eq!(clause.literals().count(), 2);
//! assert_eq!(clause.as_dimacs(true), "4 -1 0");
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::literal::CLiteral;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.as_dimacs().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }
}
