/*!
The context --- within which a formula is searched, budgets are enforced, and the outcome is read.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters.
Though, for the moment this is limited to the source of randomness.
[from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config --- the default source is seeded from the config.

A context *borrows* the formula (and, optionally, the partition) it searches.
The instance structures are immutable, so any number of contexts over distinct seeds may share them concurrently; each context exclusively owns its mutable search state and its rng.

# Example
```rust
# use meerkat_sat::config::Config;
# use meerkat_sat::context::Context;
# use meerkat_sat::reports::Report;
# use meerkat_sat::structures::formula::Formula;
# use meerkat_sat::structures::literal::CLiteral;
let clauses = vec![
    vec![CLiteral::from(1), CLiteral::from(2)],
    vec![CLiteral::from(-1), CLiteral::from(2)],
];
let formula = Formula::new(2, clauses).unwrap();

let mut the_context = Context::from_config(&formula, Config::default());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.report(), Report::Satisfiable);
assert!(formula.satisfied_on(the_context.solution().unwrap()));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration; no solve has been made.
    Configuration,

    /// A solve is in progress.
    Solving,

    /// A satisfying valuation is held.
    Satisfiable,

    /// The try and flip budgets were exhausted without a satisfying valuation being found.
    ///
    /// Nothing follows regarding satisfiability: an exhausted search is a documented outcome, not evidence.
    Exhausted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}
