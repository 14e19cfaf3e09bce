//! Structures and methods of general interest, with no particular tie to local search.

pub mod random;
