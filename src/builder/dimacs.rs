//! Building a formula from a DIMACS source.

use std::io::BufRead;

use crate::{
    misc::log::targets,
    structures::{
        clause::CClause,
        formula::Formula,
        literal::CLiteral,
    },
    types::err::{self, ErrorKind},
};

impl Formula {
    /// Reads a DIMACS source into a formula.
    ///
    /// The format, read generously:
    /// - Lines beginning `c` are comments, and may appear anywhere.
    /// - A line `p cnf <atoms> <clauses>` precedes the clauses, and the declared counts are enforced.
    /// - Clauses are whitespace-separated integer literals, each clause terminated by `0`, with line breaks free.
    /// - A line beginning `%` ends the formula, as some benchmark files append one.
    ///
    /// ```rust
    /// # use meerkat_sat::structures::formula::Formula;
    /// # use std::io::Write;
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c A pair of clauses over a pair of atoms.
    /// p cnf 2 2
    ///  1  2 0
    /// -1  2 0
    /// ");
    ///
    /// let formula = Formula::from_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(formula.atom_count(), 2);
    /// assert_eq!(formula.clause_count(), 2);
    /// ```
    pub fn from_dimacs(mut reader: impl BufRead) -> Result<Formula, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        // First phase, read until the problem specification.
        let (atom_count, clause_count) = 'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(ErrorKind::from(err::ParseError::MissingProblem)),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('c') | Some('\n') => continue 'preamble_loop,

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();

                    let atom_count: u32 = match problem_details.nth(2) {
                        None => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(ErrorKind::from(err::ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    let clause_count: usize = match problem_details.next() {
                        None => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(ErrorKind::from(err::ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    break 'preamble_loop (atom_count, clause_count);
                }

                _ => return Err(ErrorKind::from(err::ParseError::MissingProblem)),
            }
        };

        log::info!(target: targets::BUILD,
            "Expecting {atom_count} atoms and {clause_count} clauses");

        // Second phase, read until the formula ends.
        let mut clauses: Vec<CClause> = Vec::with_capacity(clause_count);
        let mut clause_buffer: CClause = Vec::default();

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => {}

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => clauses.push(std::mem::take(&mut clause_buffer)),

                            _ => {
                                let literal = match item.parse::<isize>() {
                                    Ok(int) => match CLiteral::try_from(int) {
                                        Ok(literal) => literal,
                                        Err(_) => {
                                            return Err(ErrorKind::from(err::ParseError::Line(
                                                line_counter,
                                            )))
                                        }
                                    },
                                    Err(_) => {
                                        return Err(ErrorKind::from(err::ParseError::Line(
                                            line_counter,
                                        )))
                                    }
                                };
                                clause_buffer.push(literal);
                            }
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(ErrorKind::from(err::ParseError::UnterminatedClause));
        }

        let formula = Formula::expecting(atom_count, clause_count, clauses)?;
        log::info!(target: targets::BUILD,
            "Formula built: {} atoms, {} clauses", formula.atom_count(), formula.clause_count());
        Ok(formula)
    }
}

#[cfg(test)]
mod dimacs_tests {
    use super::*;

    #[test]
    fn counts_are_enforced() {
        let dimacs = "p cnf 2 3\n1 2 0\n-1 2 0\n";
        assert!(matches!(
            Formula::from_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Build(err::BuildError::ClauseCountMismatch {
                declared: 3,
                found: 2
            }))
        ));
    }

    #[test]
    fn out_of_bounds_atoms_are_rejected() {
        let dimacs = "p cnf 2 1\n1 3 0\n";
        assert!(matches!(
            Formula::from_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Build(err::BuildError::AtomOutOfBounds(3)))
        ));
    }

    #[test]
    fn clauses_span_lines_and_trailers_are_skipped() {
        let dimacs = "c generated\np cnf 3 2\n1 2\n3 0 -1\n-2 -3 0\n%\n0\n";
        let formula = Formula::from_dimacs(dimacs.as_bytes()).unwrap();

        assert_eq!(formula.clause_count(), 2);
        assert_eq!(formula.clause(0).len(), 3);
    }

    #[test]
    fn a_missing_problem_line_is_an_error() {
        let dimacs = "c only comments\n";
        assert!(matches!(
            Formula::from_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::MissingProblem))
        ));
    }

    #[test]
    fn an_unterminated_clause_is_an_error() {
        let dimacs = "p cnf 2 1\n1 2\n";
        assert!(matches!(
            Formula::from_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::UnterminatedClause))
        ));
    }
}
