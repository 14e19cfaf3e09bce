//! Searches for a satisfying valuation of the formula in a context.
//!
//! # Overview
//!
//! [solve](crate::procedures::solve) drives a random-restart local search: a sequence of *tries*, each a sequence of *flips* over a freshly drawn valuation.
//!
//! Within a try the search state moves through three stages, with an outer loop over tries:
//!
//! ```none
//!   +----------+     fresh valuation, counts rebuilt      +----------+
//!   | try init |----------------------------------------->| flipping |--+
//!   +----------+                                          +----------+  |
//!        ⌃                                                  |   |   ⌃   | one flip,
//!        |                     all clauses satisfied <------+   |   +---+ per the selector
//!        |                                                      |
//!        |                flip budget spent                     ⌄
//!        +------------------------------------------- try exhausted
//! ```
//!
//! - Satisfaction is checked *before* each flip, so a valuation which satisfies the formula as drawn costs no flips --- and a formula with no clauses is satisfied by the first draw.
//! - A flip procedure may also note satisfaction on the flip it commits, which ends the search without a further check.
//! - When the flip budget is spent the try is abandoned; when the try budget is spent the search is abandoned.
//!
//! An abandoned search says nothing about satisfiability --- the outcome is [Exhausted](Report::Exhausted), not unsatisfiable --- and is not an error: exhaustion is the documented cost of an incomplete method.
//! The restart loop itself is part of the method, not failure recovery.
//!
//! # Counts
//!
//! On satisfaction the context records the 1-based try and the count of flips committed within that try.
//! On exhaustion the full budgets are reported, as every try spent every flip.
//!
//! # Example
//!
//! ```rust
//! # use meerkat_sat::config::Config;
//! # use meerkat_sat::context::Context;
//! # use meerkat_sat::reports::Report;
//! # use meerkat_sat::structures::formula::Formula;
//! # use meerkat_sat::structures::literal::CLiteral;
//! // A formula with a single unit clause: satisfied within at most one flip.
//! let formula = Formula::new(1, vec![vec![CLiteral::from(1)]]).unwrap();
//! let mut the_context = Context::from_config(&formula, Config::default());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert!(the_context.flips_used() <= 1);
//! ```

use crate::{
    config::Selector,
    context::{ContextState, Counters, GenericContext},
    misc::log::targets,
    procedures::FlipOutcome,
    reports::Report,
    types::err,
};

impl<R: rand::Rng> GenericContext<'_, R> {
    /// Searches for a satisfying valuation within the configured budgets, reporting the outcome.
    ///
    /// Fails only on a configuration outside its bounds; an unsuccessful search is the [Exhausted](Report::Exhausted) report, not an error.
    /// A further call makes a fresh search, with counters reset.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        self.config.check()?;

        let total_time = std::time::Instant::now();
        self.state = ContextState::Solving;
        self.counters = Counters::default();

        let max_tries = self.config.max_tries.value;
        let max_flips = self.config.max_flips.value;
        let clause_count = self.formula.clause_count();

        for try_index in 1..=max_tries {
            self.counters.tries = try_index;
            self.counters.flips_this_try = 0;

            {
                let Self {
                    formula,
                    score_db,
                    rng,
                    ..
                } = self;
                score_db.randomize(formula, rng);
            }

            log::trace!(target: targets::SOLVE,
                "Try {try_index}: {} of {clause_count} clauses satisfied on the initial valuation",
                self.score_db.satisfied_count());

            'flip_loop: loop {
                if self.score_db.satisfied_count() == clause_count {
                    return Ok(self.note_solved(total_time));
                }

                if self.counters.flips_this_try == max_flips {
                    break 'flip_loop;
                }

                let outcome = match self.config.selection.selector {
                    Selector::Gsat => self.gsat_flip(),
                    Selector::Walk => self.walk_flip(),
                };

                self.counters.flips_this_try += 1;
                self.counters.total_flips += 1;

                match outcome {
                    FlipOutcome::Solved => return Ok(self.note_solved(total_time)),
                    FlipOutcome::Flipped => {}
                }
            }

            log::trace!(target: targets::SOLVE, "Try {try_index} exhausted after {max_flips} flips");
        }

        self.counters.time = total_time.elapsed();
        self.state = ContextState::Exhausted;
        log::info!(target: targets::SOLVE, "Exhausted {max_tries} tries of {max_flips} flips");

        Ok(Report::Exhausted)
    }

    /// Notes a satisfying valuation: coordinates, time, and state.
    fn note_solved(&mut self, total_time: std::time::Instant) -> Report {
        debug_assert!(self.score_db.consistent_with(self.formula));

        self.counters.time = total_time.elapsed();
        self.counters.solved = Some((self.counters.tries, self.counters.flips_this_try));
        self.state = ContextState::Satisfiable;

        log::info!(target: targets::SOLVE,
            "Satisfied on try {} after {} flips",
            self.counters.tries, self.counters.flips_this_try);

        Report::Satisfiable
    }
}
