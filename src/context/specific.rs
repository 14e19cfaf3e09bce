use rand::SeedableRng;

use crate::{config::Config, generic::random::Pcg32, structures::formula::Formula};

use super::GenericContext;

/// A context instantiated to the default source of randomness.
pub type Context<'f> = GenericContext<'f, Pcg32>;

impl<'f> Context<'f> {
    /// A context for the given formula, with the default source of randomness seeded from the configuration.
    pub fn from_config(formula: &'f Formula, config: Config) -> Self {
        let rng = Pcg32::from_seed(config.seed.value.to_le_bytes());
        Self::from_rng(formula, config, rng)
    }
}
