//! Seeded random source for mean and sign sampling

use crate::io::error::{Result, invalid_parameter};
use rand::distr::{Distribution, Uniform};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Deterministic generator shared by every sampling call of one dataset
///
/// Counts categorical calls and sign draws so callers can verify how much
/// generator state an operation consumed.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: StdRng,
    seed: u64,
    categorical_calls: usize,
    sign_draws: usize,
}

impl RandomSource {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            categorical_calls: 0,
            sign_draws: 0,
        }
    }

    /// Seed this source was created with
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw `count` values from `[0, upper)` with replacement in one categorical call
    ///
    /// Builds a single uniform distribution and samples it repeatedly, which
    /// consumes generator state differently from repeated [`Self::choose`] calls.
    ///
    /// # Errors
    ///
    /// Returns an error if `upper` is zero
    pub fn choose_many(&mut self, upper: usize, count: usize) -> Result<Vec<usize>> {
        let distribution = Uniform::new(0, upper).map_err(|e| {
            invalid_parameter("upper", &upper, &format!("empty categorical range: {e}"))
        })?;
        self.categorical_calls += 1;
        Ok((0..count)
            .map(|_| distribution.sample(&mut self.rng))
            .collect())
    }

    /// Draw a single value from `[0, upper)` in one categorical call
    ///
    /// # Errors
    ///
    /// Returns an error if `upper` is zero
    pub fn choose(&mut self, upper: usize) -> Result<usize> {
        if upper == 0 {
            return Err(invalid_parameter(
                "upper",
                &upper,
                &"empty categorical range",
            ));
        }
        self.categorical_calls += 1;
        Ok(self.rng.random_range(0..upper))
    }

    /// Draw -1 or +1 with equal probability
    pub fn sign(&mut self) -> f64 {
        self.sign_draws += 1;
        if self.rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }

    /// Number of categorical sampling calls made so far
    pub const fn categorical_calls(&self) -> usize {
        self.categorical_calls
    }

    /// Number of sign draws made so far
    pub const fn sign_draws(&self) -> usize {
        self.sign_draws
    }
}
