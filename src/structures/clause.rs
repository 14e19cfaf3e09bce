//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use meerkat_sat::structures::clause::Clause;
//! # use meerkat_sat::structures::literal::{CLiteral, Literal};
//! let clause = vec![CLiteral::new(1, true),
//!                   CLiteral::new(2, false),
//!                   CLiteral::new(3, true)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
//!
//! let valuation = vec![false, false, true, false];
//! assert!(!clause.satisfied_on(&valuation));
//!
//! let valuation = vec![false, false, false, false];
//! assert!(clause.satisfied_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true), and for this reason never enters a formula (see [builder](crate::builder)).
//! - Clauses are *not* normalized: a clause may mention the same atom twice, with either polarity, and the search passes this through.
//!
//! [satisfied_on](Clause::satisfied_on) recomputes truth from the literals of the clause and a valuation alone, with no reference to any search structure.
//! It is the in-crate form of the independent check an external verifier makes, and the oracle the tests lean on.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over the literals in the clause, in clause order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the atoms in the clause, in clause order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause evaluates to true on the given valuation.
    ///
    /// A from-scratch check, independent of any maintained count.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

impl<C: std::ops::Deref<Target = [CLiteral]>> Clause for C {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self.iter() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        match zero {
            true => the_string += "0",
            false => {
                the_string.pop();
            }
        };
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(Literal::atom)
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of(literal.atom()) == literal.polarity())
    }
}

/// The canonical implementation of a clause as a vector of literals.
pub type CClause = Vec<CLiteral>;
