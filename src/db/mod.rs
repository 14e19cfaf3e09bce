//! Databases for a search.
//!
//! A local search holds a single mutable database: the [score database](score), which pairs a valuation with the per-clause satisfaction counts the valuation induces.
//! Everything else a search reads --- the formula, the occurrence index, the community partition --- is immutable and lives outside the database (see [structures](crate::structures) and [community](crate::community)).

pub mod score;
