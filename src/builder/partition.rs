//! Building a partition from a partition file.

use std::io::BufRead;

use crate::{
    community::{CommunityId, Partition},
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

impl Partition {
    /// Reads a partition file into a partition over the given formula.
    ///
    /// The format is that written by community detectors over the variable-clause graph: one community id per line, where line *i* (1-based) is the community of atom *i*.
    /// Blank lines are skipped; the ids must cover the atoms of the formula exactly.
    ///
    /// ```rust
    /// # use meerkat_sat::community::Partition;
    /// # use meerkat_sat::structures::formula::Formula;
    /// # use meerkat_sat::structures::literal::CLiteral;
    /// let formula = Formula::new(3, vec![vec![CLiteral::from(1), CLiteral::from(-2), CLiteral::from(3)]]).unwrap();
    /// let partition = Partition::from_reader("1\n1\n2\n".as_bytes(), &formula).unwrap();
    ///
    /// assert_eq!(partition.community_of(1), Some(1));
    /// assert_eq!(partition.community_of(3), None);
    /// ```
    pub fn from_reader(reader: impl BufRead, formula: &Formula) -> Result<Partition, ErrorKind> {
        let mut communities: Vec<CommunityId> = Vec::with_capacity(formula.atom_count() as usize);

        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(_) => return Err(ErrorKind::from(err::PartitionError::Line(index + 1))),
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match trimmed.parse::<CommunityId>() {
                Ok(community) => communities.push(community),
                Err(_) => return Err(ErrorKind::from(err::PartitionError::Line(index + 1))),
            }
        }

        let partition = Partition::derive(formula, &communities)?;
        Ok(partition)
    }
}

#[cfg(test)]
mod partition_file_tests {
    use super::*;
    use crate::structures::literal::CLiteral;

    fn two_atom_formula() -> Formula {
        Formula::new(2, vec![vec![CLiteral::from(1), CLiteral::from(2)]]).unwrap()
    }

    #[test]
    fn length_must_match_the_formula() {
        let formula = two_atom_formula();
        assert!(matches!(
            Partition::from_reader("1\n1\n2\n".as_bytes(), &formula),
            Err(ErrorKind::Partition(err::PartitionError::WrongLength {
                expected: 2,
                found: 3
            }))
        ));
    }

    #[test]
    fn junk_lines_are_rejected() {
        let formula = two_atom_formula();
        assert!(matches!(
            Partition::from_reader("1\ncommunity\n".as_bytes(), &formula),
            Err(ErrorKind::Partition(err::PartitionError::Line(2)))
        ));
    }
}
