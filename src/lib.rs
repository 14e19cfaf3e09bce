//! A library for searching for satisfying valuations of boolean formulas written in conjunctive normal form.
//!
//! meerkat_sat is a library for stochastic local search over CNF formulas, with support for biasing the search by the community structure of a formula's variable-clause graph.
//! It is developed to help researchers, developers, or anyone curious, to investigate how community structure affects the behaviour of local search, whether as a novice or through implementing novel ideas.
//!
//! The method is incomplete: a satisfying valuation, when found, witnesses satisfiability, while an exhausted search budget witnesses nothing.
//! If a proof of unsatisfiability is wanted, a clause-learning solver is the tool to reach for.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context borrows an immutable [formula](structures::formula) --- and, optionally, a [community partition](community) derived over the formula --- and owns everything mutable to one search: the [score database](db::score), the counters, and the source of randomness.
//! As the borrowed structures are never written, any number of contexts over distinct seeds may share them, one context per thread, with no further ceremony.
//!
//! A solve is a sequence of *tries*: each try draws a fresh random valuation and commits up to `max_flips` single-atom *flips*, each flip chosen by the configured selection policy and applied to the score database in time proportional to the flipped atom's occurrences.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a search.
//! - The [score database](crate::db::score) to inspect the state maintained during a search, and the invariants on it.
//! - The [selection procedures](crate::procedures) and their [configuration](crate::config) to see which policies are supported.
//! - The [community module](crate::community) for how a partition becomes a bias.
//!
//! # Example
//!
//! ```rust
//! use meerkat_sat::{config::Config, context::Context, reports::Report};
//! use meerkat_sat::structures::formula::Formula;
//!
//! let dimacs = "p cnf 3 3\n 1  2 0\n-1  3 0\n-2 -3 0\n";
//! let formula = Formula::from_dimacs(dimacs.as_bytes()).unwrap();
//!
//! let mut the_context = Context::from_config(&formula, Config::default());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//!
//! // The valuation is checked against the clauses themselves, not the search's own counts.
//! assert!(formula.satisfied_on(the_context.solution().unwrap()));
//! ```
//!
//! # Guiding principles
//!
//! ## Modularity
//!
//! + A search is built of a handful of parts, and where possible (and reasonable) interaction between parts happens through documented access points. For example:
//!   - The satisfaction counts live in the [score database](db::score), and a [flip](db::score::ScoreDB::flip) is the only operation which revises them.
//!   - Things such as [literals](structures::literal) and [clauses](structures::clause) are defined first as traits whose canonical instantiations are used only when there is 'good reason' to do so.
//!   - The algorithm for searching is factored into a collection of [procedures].
//!   - Use of external crates is limited to crates which help support modularity, such as [log](https://docs.rs/log/latest/log/) and [rand](https://docs.rs/rand/latest/rand/).
//!
//! ## Verification
//!
//! + The search's own bookkeeping is never the last word on satisfiability: a reported valuation is exposed for independent rechecking against the original clauses, and the library's own recheck ([satisfied_on](structures::formula::Formula::satisfied_on)) reads nothing but the clause text and the valuation.
//!
//! ## Reproducibility
//!
//! + There is no hidden random state.
//!   Each context owns its generator, seeded from its configuration, and every randomized decision of a search --- the initial draw of a try, clause choice, noise choice, tie-break --- draws from it.
//!   Two contexts configured alike search alike, and distinctly seeded contexts may run concurrently without correlating their trials.
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs of each try's progress can be filtered with `RUST_LOG=solve …`, and logs of individual flip choices with `RUST_LOG=selection …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod community;
pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
pub mod reports;
