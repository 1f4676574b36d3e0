//! Random-source seam for the threshold estimator.
//!
//! The estimator never owns a generator; it draws uniform integers through
//! the [`RandomSource`] trait so production code can plug in the bundled
//! [`SmallRngSource`] while tests script exact draw sequences.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Uniform integer generator over closed ranges.
pub trait RandomSource {
    /// Draws a uniformly distributed value from `[low, high]`.
    ///
    /// Callers guarantee `low <= high`; implementations may panic otherwise.
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize;
}

/// Production [`RandomSource`] backed by [`SmallRng`].
///
/// # Examples
/// ```
/// use permea_core::{RandomSource, SmallRngSource};
///
/// let mut source = SmallRngSource::seeded(7);
/// let draw = source.uniform_inclusive(1, 5);
/// assert!((1..=5).contains(&draw));
/// ```
#[derive(Clone, Debug)]
pub struct SmallRngSource {
    rng: SmallRng,
}

impl SmallRngSource {
    /// Creates a source with a deterministic stream derived from `seed`.
    ///
    /// Callers wanting a non-deterministic run seed with entropy (as the
    /// CLI does for its default seed) so the seed stays reportable.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SmallRngSource {
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}
