//! Methods for building formulas and partitions from external sources.
//!
//! The sources are the outputs of the external generator pipeline:
//!
//! - A CNF formula in (a generous reading of) the DIMACS format --- see [dimacs].
//! - An atom → community map as a partition file, one community id per line --- see [partition].
//!
//! Building validates structural well-formedness and nothing more.
//! In particular no judgement is made on the content of a clause: a clause mentioning an atom twice, or with both polarities, is someone else's choice, passed through.

pub mod dimacs;
pub mod partition;
