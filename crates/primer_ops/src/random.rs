//! Seedable pseudo-random integers.
//!
//! Backed by `ChaCha8Rng`, so a recorded seed replays the same sequence on
//! every platform. Not suitable for cryptographic use.

use primer_foundation::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pseudo-random integer source.
#[derive(Clone, Debug)]
pub struct RandomSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source that replays the sequence for `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source with a seed drawn from the thread-local generator.
    ///
    /// The seed is kept so the run can be reproduced with [`Self::from_seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// The seed this source was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a uniformly distributed integer in `low..=high`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidRange`](primer_foundation::ErrorKind::InvalidRange)
    /// if `low > high`.
    pub fn int_inclusive(&mut self, low: i64, high: i64) -> Result<i64> {
        if low > high {
            return Err(Error::invalid_range(low, high));
        }
        Ok(self.rng.gen_range(low..=high))
    }
}
