//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - None of these report a failed search: exhausting the flip/try budget without finding a satisfying valuation is a documented outcome of a solve (see [reports](crate::reports)), not an error.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Config(ConfigError),
    Parse(ParseError),
    Partition(PartitionError),
}

/// Noted errors when building a formula.
///
/// A formula failing to build is fatal to that instance: nothing partial is kept.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clause mentions an atom outside `1..=atom_count`.
    AtomOutOfBounds(Atom),

    /// A declared clause count disagrees with the clauses supplied.
    ClauseCountMismatch { declared: usize, found: usize },

    /// Some attempt was made to include an empty clause.
    ///
    /// An empty clause is never satisfiable, and clause-directed selection would have no atom to flip in it.
    EmptyClause,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors in the configuration of a solve.
///
/// These are checked when a solve begins, as configuration values may be revised freely up to that point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A configuration value is outside the bounds of its option.
    ///
    /// E.g., a try or flip budget of zero, or a noise probability outside the unit interval.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// The input ended without the problem specification having been found.
    MissingProblem,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The input ended with literals pending for a clause with no terminating zero.
    UnterminatedClause,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors when deriving a community partition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PartitionError {
    /// The partition assigns communities to a different number of atoms than the formula has.
    WrongLength { expected: usize, found: usize },

    /// Some unspecific problem at a specific line of a partition file.
    Line(usize),
}

impl From<PartitionError> for ErrorKind {
    fn from(e: PartitionError) -> Self {
        ErrorKind::Partition(e)
    }
}
