//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [CLiteral] structure, made of an atom and a boolean.
//!
//! An example:
//!
//! ```rust
//! # use meerkat_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.as_int(), 79);
//! ```
//!
//! In generators, verifiers, and the DIMACS format an integer is used, with the sign of the integer indicating the polarity of the literal.
//! Conversions to and from the integer form are kept close at hand for this reason.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The canonical representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn as_int(&self) -> isize {
        match self.polarity {
            true => self.atom as isize,
            false => -(self.atom as isize),
        }
    }
}

// Traits

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl PartialEq for CLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity == other.polarity
    }
}

impl Eq for CLiteral {}

impl std::hash::Hash for CLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

// From

impl From<i32> for CLiteral {
    fn from(value: i32) -> Self {
        CLiteral::new(value.unsigned_abs(), value.is_positive())
    }
}

impl From<&i32> for CLiteral {
    fn from(value: &i32) -> Self {
        CLiteral::new(value.unsigned_abs(), value.is_positive())
    }
}

impl TryFrom<isize> for CLiteral {
    type Error = ();

    fn try_from(value: isize) -> Result<Self, Self::Error> {
        let atom = value.unsigned_abs();
        match Atom::try_from(atom) {
            Ok(atom) => Ok(CLiteral::new(atom, value.is_positive())),
            Err(_) => Err(()),
        }
    }
}
