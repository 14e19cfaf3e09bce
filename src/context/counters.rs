use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// The try in progress, 1-based; zero before the first try.
    pub tries: usize,

    /// A count of the flips committed during the try in progress.
    pub flips_this_try: usize,

    /// A count of every flip committed during a solve, across tries.
    pub total_flips: usize,

    /// The try and flip at which a satisfying valuation was found, if one was.
    pub solved: Option<(usize, usize)>,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            tries: 0,
            flips_this_try: 0,
            total_flips: 0,
            solved: None,
            time: Duration::from_secs(0),
        }
    }
}
