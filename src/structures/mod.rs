//! Key structures, such as literals, clauses, and formulas.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A formula 𝐅 is an ordered sequence of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals).
//!
//! Unlike a clause-learning solver the formula of a search never changes, and so the formula is a single immutable structure rather than a database.
//! The [occurrence index](formula::Formula) from each signed literal to the clauses containing it is derived once, when the formula is built, and shares the formula's lifetime.
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of two things.
//! Typically the first of the pair is identified as [true] and the second as [false].

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
