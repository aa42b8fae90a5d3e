/*!
A total function from atoms to truth values, as returned by an [oracle](crate::oracle) for a satisfiable formula.

The canonical representation of a model is a vector of booleans, where the value of atom *a* is the *a*th element of the vector.
Atoms outside of the vector, e.g. those the oracle never saw, are read as false.

```rust
# use equal_path::structures::model::Model;
let model = Model::from(vec![true, false, true]);

assert!(model.value_of(0));
assert!(!model.value_of(1));
assert!(!model.value_of(97));
```
*/

use crate::structures::{atom::Atom, literal::CLiteral};

/// A model, read-only once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    /// The value of `atom` on the model.
    pub fn value_of(&self, atom: Atom) -> bool {
        self.values.get(atom as usize).copied().unwrap_or(false)
    }

    /// The value of `literal` on the model.
    pub fn satisfies(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()) == literal.polarity()
    }

    /// A count of the atoms explicitly valued by the model.
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }
}

impl From<Vec<bool>> for Model {
    fn from(values: Vec<bool>) -> Self {
        Model { values }
    }
}

impl FromIterator<CLiteral> for Model {
    /// A model from literals, with each literal setting the value of its atom.
    fn from_iter<T: IntoIterator<Item = CLiteral>>(iter: T) -> Self {
        let mut values = Vec::default();
        for literal in iter {
            let index = literal.atom() as usize;
            if values.len() <= index {
                values.resize(index + 1, false);
            }
            values[index] = literal.polarity();
        }
        Model { values }
    }
}
