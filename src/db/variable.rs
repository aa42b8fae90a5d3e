/*!
A table mapping [position keys](crate::structures::position::PositionKey) to atoms.

The table is the naming of variables for an encoding:
- Requesting the variable of a key for the first time allocates a fresh atom, and each later request for the same key returns the same atom.
- Distinct keys are always given distinct atoms.

In other words, the atom of a key is a function of the key, and so the same proposition referenced from different clause families is the same atom.

```rust
# use equal_path::db::variable::VariableTable;
# use equal_path::structures::position::PositionKey;
let mut table = VariableTable::default();

let p = table.variable(PositionKey::new(0, 1, 2, 3)).unwrap();
let q = table.variable(PositionKey::new(0, 1, 2, 4)).unwrap();

assert_ne!(p, q);
assert_eq!(table.variable(PositionKey::new(0, 1, 2, 3)), Ok(p));
assert_eq!(table.key_of(q), Some(PositionKey::new(0, 1, 2, 4)));
assert_eq!(table.name_of(p), "x_0,1,2,3");
```

The table is a single-threaded structure, owned by a session.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets,
    structures::{
        atom::{Atom, ATOM_MAX},
        position::PositionKey,
    },
    types::err::{self},
};

/// Atoms of keys, and keys of atoms.
#[derive(Default)]
pub struct VariableTable {
    /// A map from keys to atoms.
    atoms: HashMap<PositionKey, Atom>,

    /// The key of each atom, indexed by atom.
    keys: Vec<PositionKey>,
}

impl VariableTable {
    /// The atom of `key`, allocated if the key has not been seen.
    pub fn variable(&mut self, key: PositionKey) -> Result<Atom, err::BuildError> {
        if let Some(atom) = self.atoms.get(&key) {
            return Ok(*atom);
        }

        let atom = match Atom::try_from(self.keys.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => {
                log::error!(target: targets::ENCODING, "Atoms exhausted at {key}");
                return Err(err::BuildError::AtomsExhausted);
            }
        };

        self.atoms.insert(key, atom);
        self.keys.push(key);
        Ok(atom)
    }

    /// The atom of `key`, if the key has been seen.
    pub fn get(&self, key: &PositionKey) -> Option<Atom> {
        self.atoms.get(key).copied()
    }

    /// The key of `atom`, if the atom was allocated by the table.
    pub fn key_of(&self, atom: Atom) -> Option<PositionKey> {
        self.keys.get(atom as usize).copied()
    }

    /// A name for `atom`.
    ///
    /// Atoms of the table are named by their key, and any other atom by a `_` prefixed to its index.
    pub fn name_of(&self, atom: Atom) -> String {
        match self.key_of(atom) {
            Some(key) => key.to_string(),
            None => format!("_{atom}"),
        }
    }

    /// A count of all atoms allocated.
    pub fn count(&self) -> usize {
        self.keys.len()
    }
}
