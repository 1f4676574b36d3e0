//! Monte Carlo estimation of the site-percolation threshold.
//!
//! Each trial opens uniformly random sites on a fresh grid until it
//! percolates and records the open fraction at that moment. Because
//! already-open draws are discarded by the idempotent `open`, sites are
//! effectively opened without replacement, making the recorded fraction a
//! consistent estimator of the percolation threshold.

use std::num::NonZeroUsize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    Result, grid::PercolationGrid, random::RandomSource, result::ThresholdEstimate,
};
#[cfg(feature = "parallel")]
use crate::random::SmallRngSource;

/// Runs independent randomised percolation trials and aggregates their
/// open-fraction samples into a [`ThresholdEstimate`].
///
/// Constructed via [`crate::EstimatorBuilder`].
///
/// # Examples
/// ```
/// use permea_core::{EstimatorBuilder, SmallRngSource};
///
/// let estimator = EstimatorBuilder::new()
///     .with_grid_size(5)
///     .with_trials(10)
///     .build()?;
/// let mut source = SmallRngSource::seeded(1);
/// let estimate = estimator.run(&mut source)?;
/// assert!(estimate.confidence_lo() <= estimate.mean());
/// assert!(estimate.mean() <= estimate.confidence_hi());
/// # Ok::<(), permea_core::PercolationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdEstimator {
    grid_size: NonZeroUsize,
    trials: NonZeroUsize,
    z_score: f64,
}

impl ThresholdEstimator {
    pub(crate) fn new(grid_size: NonZeroUsize, trials: NonZeroUsize, z_score: f64) -> Self {
        Self {
            grid_size,
            trials,
            z_score,
        }
    }

    /// Returns the grid dimension used for every trial.
    #[must_use]
    pub fn grid_size(&self) -> NonZeroUsize {
        self.grid_size
    }

    /// Returns the number of trials per run.
    #[must_use]
    pub fn trials(&self) -> NonZeroUsize {
        self.trials
    }

    /// Returns the confidence-interval z-score.
    #[must_use]
    pub fn z_score(&self) -> f64 {
        self.z_score
    }

    /// Runs all trials sequentially, drawing coordinates from `source`.
    ///
    /// # Errors
    /// Grid construction and site access use indices derived from validated
    /// parameters, so in practice this only surfaces programming errors in a
    /// misbehaving [`RandomSource`] that returns out-of-range draws.
    #[instrument(
        name = "estimator.run",
        skip(self, source),
        fields(grid_size = %self.grid_size, trials = %self.trials),
    )]
    pub fn run<S: RandomSource + ?Sized>(&self, source: &mut S) -> Result<ThresholdEstimate> {
        let mut samples = Vec::with_capacity(self.trials.get());
        for trial in 0..self.trials.get() {
            let sample = self.run_trial(source)?;
            debug!(trial, sample, "trial complete");
            samples.push(sample);
        }
        Ok(ThresholdEstimate::from_samples(samples, self.z_score))
    }

    /// Runs all trials in parallel, each on an independent random sub-stream
    /// derived from `seed` and the trial index.
    ///
    /// Deterministic for a fixed seed and trial count regardless of how the
    /// trials are scheduled across threads.
    ///
    /// # Errors
    /// As [`Self::run`].
    #[cfg(feature = "parallel")]
    #[instrument(
        name = "estimator.run_seeded",
        skip(self),
        fields(grid_size = %self.grid_size, trials = %self.trials, seed),
    )]
    pub fn run_seeded(&self, seed: u64) -> Result<ThresholdEstimate> {
        let samples = (0..self.trials.get() as u64)
            .into_par_iter()
            .map(|trial| {
                let mut source = SmallRngSource::seeded(stream_seed(seed, trial));
                self.run_trial(&mut source)
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(ThresholdEstimate::from_samples(samples, self.z_score))
    }

    fn run_trial<S: RandomSource + ?Sized>(&self, source: &mut S) -> Result<f64> {
        let n = self.grid_size.get();
        let mut grid = PercolationGrid::new(n)?;
        while !grid.percolates() {
            let row = source.uniform_inclusive(1, n);
            let col = source.uniform_inclusive(1, n);
            grid.open(row, col)?;
        }
        Ok(grid.open_site_count() as f64 / (n * n) as f64)
    }
}

/// SplitMix64 finaliser so adjacent trial indices map to well-separated
/// seeds even when the master seed is small.
#[cfg(feature = "parallel")]
fn stream_seed(seed: u64, trial: u64) -> u64 {
    let mut z = seed.wrapping_add(trial.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
