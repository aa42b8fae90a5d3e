//! Literals are atoms paired with a (boolean) polarity.
//!
//! ```rust
//! # use equal_path::structures::literal::CLiteral;
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.as_dimacs(), 80);
//! assert_eq!(literal.negate().as_dimacs(), -80);
//! ```
//!
//! In other solvers an integer is often used, with the sign of the integer indicating the value of the literal.
//! The [DIMACS](CLiteral::as_dimacs) form shifts atoms by one, as `0` terminates a clause.

use crate::structures::atom::Atom;

/// The representation of a literal as an atom paired with a boolean.
///
/// Literals are ordered by atom and then polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl CLiteral {
    /// A fresh literal, specified by pairing an atom with a boolean.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The literal in DIMACS form: the atom shifted by one, with sign indicating polarity.
    pub fn as_dimacs(&self) -> i64 {
        let shifted = self.atom as i64 + 1;
        match self.polarity {
            true => shifted,
            false => -shifted,
        }
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}
