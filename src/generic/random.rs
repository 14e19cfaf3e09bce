//! The default source of (pseudo)randomness.
//!
//! Specifically, the PCG32 generator from <https://www.pcg-random.org/>, seeded by the reference `srandom` procedure over a fixed stream, implemented to satisfy the [rand_core] traits.[^note]
//!
//! PCG(32) was chosen as it is simple, fast, and has some nice supporting documentation.
//! A search makes no demand of its randomness beyond statistical independence of distinctly seeded runs, and so the generator is deliberately boring: no global state, no entropy, the seed alone determines the stream of values.
//!
//! Each [context](crate::context) owns an instance, seeded from its configuration.
//! The context is parameterized to anything which satisfies [Rng](rand::Rng), so revising the source of randomness for a context is all that's needed to use a different generator.
//!
//! [^note]: The C implementation seeded here is given on the [download page](https://www.pcg-random.org/download.html).

use rand_core::{impls, RngCore, SeedableRng};

/// The fixed increment of the generator, aka. the stream.
///
/// Any odd constant would do; this is the increment of the PCG32 reference demo.
const INCREMENT: u64 = 1442695040888963407;

/// The multiplier of the underlying linear congruential step.
const MULTIPLIER: u64 = 6364136223846793005;

/// The state of a PCG32 generator on the fixed stream.
#[derive(Clone, Debug, Default)]
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    /// Advances the state and returns the pre-advance state.
    fn step(&mut self) -> u64 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        old_state
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 8];

    /// The reference seeding procedure: step from zero, add the seed, step again.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut the_rng = Self { state: 0 };
        the_rng.step();
        the_rng.state = the_rng.state.wrapping_add(u64::from_le_bytes(seed));
        the_rng.step();
        the_rng
    }
}
