/*!
Configuration of a context.

All configuration for a context is contained within the context, and may be revised freely until a solve begins.
Bounded numeric options are held as a [ConfigOption], pairing the value with its name and bounds so interfaces (notably the cli) can report the permitted range.
The policy options of flip selection are plain enums, collected in a [SelectionConfig].
*/

mod config_option;
pub use config_option::ConfigOption;

mod selection;
pub use selection::{ClauseSelection, FreebieFilter, SelectionConfig, Selector, TieBreak};

use crate::types::err;

/// Representation for the probability of taking a random, non-greedy move.
pub type NoiseProbability = f64;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The count of tries before the search is abandoned.
    pub max_tries: ConfigOption<usize>,

    /// The count of flips in a try before the try is abandoned.
    pub max_flips: ConfigOption<usize>,

    /// The probability of flipping a random atom of the chosen clause rather than a minimum-break atom.
    ///
    /// Read only by clause-directed selection; steepest descent is deterministic given a valuation.
    pub noise: ConfigOption<NoiseProbability>,

    /// The seed of the context's source of randomness.
    pub seed: ConfigOption<u64>,

    /// The flip selection policy.
    pub selection: SelectionConfig,
}

impl Default for Config {
    /// The default configuration: clause-directed search at even noise, with a budget sized for quick results on small formulas.
    fn default() -> Self {
        Config {
            max_tries: ConfigOption {
                name: "max_tries",
                min: 1,
                max: usize::MAX,
                value: 10,
            },

            max_flips: ConfigOption {
                name: "max_flips",
                min: 1,
                max: usize::MAX,
                value: 1_000,
            },

            noise: ConfigOption {
                name: "noise",
                min: 0.0,
                max: 1.0,
                value: 0.5,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            selection: SelectionConfig::default(),
        }
    }
}

impl Config {
    /// Whether every bounded option holds a value within its bounds.
    ///
    /// Checked when a solve begins; budgets of zero and probabilities outside the unit interval are the interesting cases.
    pub fn check(&self) -> Result<(), err::ConfigError> {
        self.max_tries.check()?;
        self.max_flips.check()?;
        self.noise.check()?;
        Ok(())
    }
}
