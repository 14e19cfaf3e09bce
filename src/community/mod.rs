/*!
The community partition of a formula, and the dominant community of each clause.

A *community* is a cluster of atoms which co-occur in clauses with each other more densely than with the rest of the formula.
The partition itself is produced externally (by a community detector over the variable-clause graph) and supplied as a map from each atom to a community id.
Here the supplied map is turned into the two static structures a community-biased search reads:

- The community of each atom, with atoms whose community has no other member treated as unaffiliated.
  A one-atom community says nothing about clustering, so such atoms neither attract nor receive any bias.
- The *dominant* community of each clause: the community holding the most of the clause's atoms.
  Ties go to the community encountered first when scanning the clause's literals in order, and a clause with no affiliated atom has no dominant community.

Both are derived once per formula and from then on only read, so a partition may be shared by reference across concurrent searches alongside the formula it was derived from.

```rust
# use meerkat_sat::community::Partition;
# use meerkat_sat::structures::formula::Formula;
# use meerkat_sat::structures::literal::CLiteral;
let clauses = vec![
    vec![CLiteral::from(1), CLiteral::from(-2), CLiteral::from(3)],
    vec![CLiteral::from(3), CLiteral::from(4)],
];
let formula = Formula::new(4, clauses).unwrap();

// Atoms 1 and 2 cluster together, as do 3 and 4.
let partition = Partition::derive(&formula, &[7, 7, 2, 2]).unwrap();

assert_eq!(partition.community_of(1), Some(7));
assert_eq!(partition.dominant_community(0), Some(7));
assert_eq!(partition.dominant_community(1), Some(2));
```
*/

use crate::{
    structures::{
        atom::Atom,
        clause::Clause,
        formula::{ClauseIndex, Formula},
    },
    types::err,
};

/// A community id, as assigned by the external community detector.
///
/// Ids carry no meaning beyond identity, and in particular need not be contiguous.
pub type CommunityId = u32;

/// The community structure of a formula: atom affiliations and per-clause dominant communities.
pub struct Partition {
    /// For each atom, the community of the atom, if the atom belongs to a community of size > 1.
    of_atom: Vec<Option<CommunityId>>,

    /// For each clause, the community holding the most of the clause's atoms, if any atom is affiliated.
    dominant: Vec<Option<CommunityId>>,

    /// One more than the largest community id, for sizing id-indexed scratch.
    bound: usize,
}

impl Partition {
    /// Derives the partition structures from a formula and an external atom → community map.
    ///
    /// `communities[i]` is the community of atom *i* + 1, so the slice must assign a community to every atom of the formula.
    pub fn derive(
        formula: &Formula,
        communities: &[CommunityId],
    ) -> Result<Self, err::PartitionError> {
        if communities.len() != formula.atom_count() as usize {
            return Err(err::PartitionError::WrongLength {
                expected: formula.atom_count() as usize,
                found: communities.len(),
            });
        }

        let bound = match communities.iter().max() {
            Some(largest) => *largest as usize + 1,
            None => 0,
        };

        let mut sizes = vec![0_usize; bound];
        for community in communities {
            sizes[*community as usize] += 1;
        }

        // Atoms alone in their community are unaffiliated.
        let mut of_atom = Vec::with_capacity(communities.len() + 1);
        of_atom.push(None);
        for community in communities {
            match sizes[*community as usize] {
                0 | 1 => of_atom.push(None),
                _ => of_atom.push(Some(*community)),
            }
        }

        let mut dominant = Vec::with_capacity(formula.clause_count());
        for clause in formula.clauses() {
            dominant.push(dominant_community_of(clause, &of_atom));
        }

        log::info!(target: crate::misc::log::targets::COMMUNITY,
            "Partition derived: {} communities, {} affiliated atoms",
            sizes.iter().filter(|size| **size > 1).count(),
            of_atom.iter().filter(|community| community.is_some()).count());

        Ok(Self {
            of_atom,
            dominant,
            bound,
        })
    }

    /// The community of the given atom, or none if the atom is unaffiliated.
    pub fn community_of(&self, atom: Atom) -> Option<CommunityId> {
        self.of_atom[atom as usize]
    }

    /// The dominant community of the given clause, or none if no atom of the clause is affiliated.
    pub fn dominant_community(&self, clause: ClauseIndex) -> Option<CommunityId> {
        self.dominant[clause as usize]
    }

    /// One more than the largest community id in the supplied map.
    pub fn community_bound(&self) -> usize {
        self.bound
    }
}

/// The community holding the most of the clause's atoms, ties to the community encountered first in clause order.
fn dominant_community_of(
    clause: &impl Clause,
    of_atom: &[Option<CommunityId>],
) -> Option<CommunityId> {
    // Clauses are short, so counts are kept in a vector ordered by first encounter.
    let mut counts: Vec<(CommunityId, usize)> = Vec::default();

    for atom in clause.atoms() {
        if let Some(community) = of_atom[atom as usize] {
            match counts.iter_mut().find(|(id, _)| *id == community) {
                Some((_, count)) => *count += 1,
                None => counts.push((community, 1)),
            }
        }
    }

    let mut the_dominant: Option<(CommunityId, usize)> = None;
    for (community, count) in counts {
        match the_dominant {
            Some((_, dominant_count)) if dominant_count >= count => {}
            _ => the_dominant = Some((community, count)),
        }
    }

    the_dominant.map(|(community, _)| community)
}

#[cfg(test)]
mod partition_tests {
    use super::*;
    use crate::structures::{clause::CClause, literal::CLiteral};

    fn clause(literals: &[i32]) -> CClause {
        literals.iter().map(CLiteral::from).collect()
    }

    #[test]
    fn singleton_communities_are_unaffiliated() {
        let formula = Formula::new(3, vec![clause(&[1, 2, 3])]).unwrap();
        let partition = Partition::derive(&formula, &[1, 1, 2]).unwrap();

        assert_eq!(partition.community_of(1), Some(1));
        assert_eq!(partition.community_of(2), Some(1));
        assert_eq!(partition.community_of(3), None);
    }

    #[test]
    fn dominant_tie_goes_to_first_encountered() {
        // Two communities with two atoms each in the clause: the first literal decides.
        let formula = Formula::new(4, vec![clause(&[3, 1, 4, 2])]).unwrap();
        let partition = Partition::derive(&formula, &[5, 5, 6, 6]).unwrap();

        assert_eq!(partition.dominant_community(0), Some(6));
    }

    #[test]
    fn unaffiliated_clause_has_no_dominant() {
        let formula = Formula::new(3, vec![clause(&[1, 2]), clause(&[3, 3])]).unwrap();
        let partition = Partition::derive(&formula, &[1, 1, 9]).unwrap();

        assert_eq!(partition.dominant_community(0), Some(1));
        assert_eq!(partition.dominant_community(1), None);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let formula = Formula::new(2, vec![clause(&[1, 2])]).unwrap();
        assert!(matches!(
            Partition::derive(&formula, &[1, 1, 1]),
            Err(err::PartitionError::WrongLength {
                expected: 2,
                found: 3
            })
        ));
    }
}
