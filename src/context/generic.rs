use crate::{
    community::Partition,
    config::Config,
    db::score::ScoreDB,
    reports::Report,
    structures::{
        formula::Formula,
        valuation::{CValuation, Valuation},
    },
};

use super::{ContextState, Counters};

/// A generic context, parameterized to a source of randomness.
///
/// Requires a source of [rng](rand::Rng), exclusively owned by the context and threaded through every randomized decision of a solve --- the initial draw of each try, clause choice, noise choice, and tie-break.
/// Two contexts with the same configuration, formula, and rng state make the same search.
pub struct GenericContext<'f, R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The formula under search.
    pub formula: &'f Formula,

    /// The community partition of the formula, if one was derived.
    pub partition: Option<&'f Partition>,

    /// The score database.
    /// See [db::score](crate::db::score) for details.
    pub score_db: ScoreDB,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<'f, R: rand::Rng> GenericContext<'f, R> {
    /// A context for the given formula, with the given source of randomness.
    pub fn from_rng(formula: &'f Formula, config: Config, rng: R) -> Self {
        Self {
            counters: Counters::default(),
            score_db: ScoreDB::empty(formula),
            formula,
            partition: None,
            state: ContextState::Configuration,
            config,
            rng,
        }
    }

    /// The context, reading its community partition from the given derivation.
    ///
    /// Community-biased selection without a partition falls back to its unbiased form.
    pub fn with_partition(mut self, partition: &'f Partition) -> Self {
        self.partition = Some(partition);
        self
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The satisfying valuation held, if the context is satisfiable.
    ///
    /// The valuation is exposed for an external verifier to recheck against the original clauses; the context's own counts are not a correctness oracle.
    pub fn solution(&self) -> Option<&CValuation> {
        match self.state {
            ContextState::Satisfiable => Some(self.score_db.valuation()),
            _ => None,
        }
    }

    /// The satisfying valuation as a line of DIMACS literals, if the context is satisfiable.
    pub fn valuation_string(&self) -> Option<String> {
        self.solution().map(|valuation| valuation.as_dimacs())
    }

    /// The count of tries used by the solve: the successful try, or the full budget on exhaustion.
    pub fn tries_used(&self) -> usize {
        match self.state {
            ContextState::Satisfiable => match self.counters.solved {
                Some((tries, _)) => tries,
                None => unreachable!("context: satisfiable without solve coordinates"),
            },
            ContextState::Exhausted => self.config.max_tries.value,
            _ => self.counters.tries,
        }
    }

    /// The count of flips used by the solve: flips within the successful try, or the full budget on exhaustion.
    pub fn flips_used(&self) -> usize {
        match self.state {
            ContextState::Satisfiable => match self.counters.solved {
                Some((_, flips)) => flips,
                None => unreachable!("context: satisfiable without solve coordinates"),
            },
            ContextState::Exhausted => self.config.max_flips.value,
            _ => self.counters.flips_this_try,
        }
    }
}
