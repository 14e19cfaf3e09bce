/*!
A total function from atoms to truth values.

Local search differs from clause-learning search in that a valuation is never partial: every atom has some value from the moment the valuation is drawn.
So, the canonical representation of a valuation is a vector of booleans, where:
- The zero index (first) element is padding, fixed to false.
- Each non-zero index of the vector is interpreted as an atom.

```rust
# use meerkat_sat::structures::valuation::Valuation;
let valuation = vec![false, true, false, true];

assert_eq!(valuation.value_of(1), true);
assert_eq!(valuation.value_of(2), false);
assert_eq!(valuation.as_dimacs(), "1 -2 3");
```

# Soundness

The valuation trait is implemented for anything which can be dereferenced to a slice of booleans, and the value of an atom is the content of the atom's index on that slice.
There is no structural guarantee that a slice is padded at index zero, and the value of an atom on an unpadded slice is the value of some other atom.
Within the library every valuation originates in the [score database](crate::db::score), which pads.
*/

use crate::structures::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<bool>;

/// A valuation is something which stores the value of each atom of a formula.
pub trait Valuation {
    /// The value of the given atom under the valuation.
    ///
    /// # Panics
    /// If the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> bool;

    /// A count of all the atoms in the valuation (excluding padding).
    fn atom_count(&self) -> usize;

    /// The valuation as a line of DIMACS literals, atoms in ascending order, signed by value.
    ///
    /// This is the form handed to an external verifier.
    fn as_dimacs(&self) -> String;
}

impl<V: std::ops::Deref<Target = [bool]>> Valuation for V {
    fn value_of(&self, atom: Atom) -> bool {
        (**self)[atom as usize]
    }

    fn atom_count(&self) -> usize {
        self.len().saturating_sub(1)
    }

    fn as_dimacs(&self) -> String {
        let mut the_string = String::with_capacity(self.len() * 3);
        for (atom, value) in self.iter().enumerate().skip(1) {
            match value {
                true => the_string.push_str(&format!("{atom} ")),
                false => the_string.push_str(&format!("-{atom} ")),
            }
        }
        the_string.pop();
        the_string
    }
}
