/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* with 1 ≤ *u* ≤ *n* for a formula over *n* atoms.

Zero is never an atom.
Index-addressed structures (valuations, occurrence lists) are sized *n* + 1 so an atom may be used as an index directly, with the zero index as padding.

```rust
# use meerkat_sat::structures::atom::Atom;
let n = 97;
let atoms = (1..=n).collect::<Vec<Atom>>();
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- The external representation of an atom is the same integer, signed by polarity when part of a literal.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded by [i32::MAX] so every literal over an atom has a signed (DIMACS) representation.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
