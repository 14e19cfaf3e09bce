//! A formula, aka. an ordered sequence of clauses over atoms `1..=n`, with a derived occurrence index.
//!
//! The formula is immutable: it is built once per problem instance, validated at construction, and from then on only read.
//! In particular a formula may be shared by reference across any number of concurrent searches without synchronization.
//!
//! # The occurrence index
//!
//! For each atom *v* the index holds two lists of clause indices: the clauses containing the literal *v* and the clauses containing the literal *-v*.
//! The index is built in a single pass over the clauses when the formula is built, and is the structure which makes a flip O(deg(*v*)) rather than O(*m*).
//!
//! A clause mentioning the same literal twice appears twice in the relevant list, so that occurrence walks and per-clause literal counts agree on what is counted.
//!
//! ```rust
//! # use meerkat_sat::structures::formula::Formula;
//! # use meerkat_sat::structures::literal::{CLiteral, Literal};
//! let clauses = vec![
//!     vec![CLiteral::new(1, true), CLiteral::new(2, true)],
//!     vec![CLiteral::new(1, false), CLiteral::new(2, true)],
//! ];
//! let formula = Formula::new(2, clauses).unwrap();
//!
//! assert_eq!(formula.clause_count(), 2);
//! assert_eq!(formula.occurrences(CLiteral::new(1, true)), &[0]);
//! assert_eq!(formula.occurrences(CLiteral::new(2, true)), &[0, 1]);
//! ```

use crate::{
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
    types::err,
};

/// The index of a clause in a formula.
///
/// Clause indices are stable: the formula never reorders nor removes clauses.
pub type ClauseIndex = u32;

/// An immutable CNF formula over atoms `1..=n`, with a derived occurrence index.
pub struct Formula {
    /// The count of atoms in the formula, *n*.
    atom_count: Atom,

    /// The clauses of the formula, in the order given.
    clauses: Vec<CClause>,

    /// For each atom *v*, the clauses containing the literal *v*.
    positive_occurrences: Vec<Vec<ClauseIndex>>,

    /// For each atom *v*, the clauses containing the literal *-v*.
    negative_occurrences: Vec<Vec<ClauseIndex>>,
}

impl Formula {
    /// A formula over atoms `1..=atom_count` with the given clauses.
    ///
    /// Construction fails, with nothing built, if some clause is empty or mentions an atom outside `1..=atom_count`.
    pub fn new(atom_count: Atom, clauses: Vec<CClause>) -> Result<Self, err::BuildError> {
        let length = atom_count as usize + 1;
        let mut positive_occurrences: Vec<Vec<ClauseIndex>> = vec![Vec::default(); length];
        let mut negative_occurrences: Vec<Vec<ClauseIndex>> = vec![Vec::default(); length];

        for (index, clause) in clauses.iter().enumerate() {
            if clause.is_empty() {
                return Err(err::BuildError::EmptyClause);
            }

            for literal in clause.literals() {
                let atom = literal.atom();
                if atom == 0 || atom > atom_count {
                    return Err(err::BuildError::AtomOutOfBounds(atom));
                }

                match literal.polarity() {
                    true => positive_occurrences[atom as usize].push(index as ClauseIndex),
                    false => negative_occurrences[atom as usize].push(index as ClauseIndex),
                }
            }
        }

        Ok(Self {
            atom_count,
            clauses,
            positive_occurrences,
            negative_occurrences,
        })
    }

    /// As [new](Formula::new), with a check that the clause list has the declared length.
    ///
    /// Input formats which declare counts up front (notably the DIMACS preamble) pass the declaration through here.
    pub fn expecting(
        atom_count: Atom,
        clause_count: usize,
        clauses: Vec<CClause>,
    ) -> Result<Self, err::BuildError> {
        if clauses.len() != clause_count {
            return Err(err::BuildError::ClauseCountMismatch {
                declared: clause_count,
                found: clauses.len(),
            });
        }
        Self::new(atom_count, clauses)
    }

    /// The count of atoms in the formula, *n*.
    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    /// The count of clauses in the formula, *m*.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clause at the given index.
    ///
    /// # Panics
    /// If the index is not the index of some clause.
    pub fn clause(&self, index: ClauseIndex) -> &CClause {
        &self.clauses[index as usize]
    }

    /// An iterator over the clauses of the formula, in order.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// The clauses containing the given literal.
    pub fn occurrences(&self, literal: CLiteral) -> &[ClauseIndex] {
        match literal.polarity() {
            true => &self.positive_occurrences[literal.atom() as usize],
            false => &self.negative_occurrences[literal.atom() as usize],
        }
    }

    /// The count of clauses mentioning the given atom, with either polarity.
    pub fn degree(&self, atom: Atom) -> usize {
        self.positive_occurrences[atom as usize].len()
            + self.negative_occurrences[atom as usize].len()
    }

    /// Whether every clause of the formula is satisfied on the given valuation.
    ///
    /// A from-scratch check over the clause text, used as the in-crate verifier (see [clause](crate::structures::clause)).
    pub fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.satisfied_on(valuation))
    }
}
