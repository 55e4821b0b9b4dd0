//! How the solver chooses among equally good options.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// The rule for breaking ties between variables and for picking the
/// next arc during propagation.  The choice never changes whether a
/// solution is found, only which one and how quickly.
#[derive(Clone, Debug)]
pub enum Strategy {
    /// Always take the first option.
    Deterministic,

    /// Take a uniformly random option.
    Random(StdRng),
}

impl Strategy {
    /// A random strategy that repeats its choices for the same seed.
    ///
    /// # Examples
    ///
    /// ```
    /// let strategy = crossword_solver::Strategy::seeded(7);
    /// ```
    pub fn seeded(seed: u64) -> Self {
        Strategy::Random(StdRng::seed_from_u64(seed))
    }

    /// A random strategy with a fresh seed.  Returns the seed so that
    /// the run can be repeated.
    pub fn random() -> (Self, u64) {
        let seed = rand::rng().next_u64();
        (Strategy::seeded(seed), seed)
    }

    /// Choose an index below `len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub(crate) fn pick(&mut self, len: usize) -> usize {
        assert!(len > 0, "nothing to pick from");
        match self {
            Strategy::Deterministic => 0,
            Strategy::Random(rng) => rng.random_range(0..len),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Deterministic
    }
}
