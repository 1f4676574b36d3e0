//! Builder for configuring [`ThresholdEstimator`] instances.

use std::num::NonZeroUsize;

use crate::{Result, error::PercolationError, estimator::ThresholdEstimator};

/// z-score for a two-sided 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

const DEFAULT_GRID_SIZE: usize = 20;
const DEFAULT_TRIALS: usize = 30;

/// Configures and constructs [`ThresholdEstimator`] instances.
///
/// # Examples
/// ```
/// use permea_core::EstimatorBuilder;
///
/// let estimator = EstimatorBuilder::new()
///     .with_grid_size(10)
///     .with_trials(50)
///     .build()?;
/// assert_eq!(estimator.grid_size().get(), 10);
/// assert_eq!(estimator.trials().get(), 50);
/// # Ok::<(), permea_core::PercolationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EstimatorBuilder {
    grid_size: usize,
    trials: usize,
    z_score: f64,
}

impl Default for EstimatorBuilder {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            trials: DEFAULT_TRIALS,
            z_score: CONFIDENCE_95,
        }
    }
}

impl EstimatorBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the grid dimension N.
    #[must_use]
    pub fn with_grid_size(mut self, n: usize) -> Self {
        self.grid_size = n;
        self
    }

    /// Returns the configured grid dimension.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Overrides the number of independent trials.
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Returns the configured trial count.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Overrides the confidence-interval z-score.
    ///
    /// Defaults to [`CONFIDENCE_95`]. The value is a trusted statistical
    /// parameter and is not validated.
    #[must_use]
    pub fn with_z_score(mut self, z_score: f64) -> Self {
        self.z_score = z_score;
        self
    }

    /// Returns the configured z-score.
    #[must_use]
    pub fn z_score(&self) -> f64 {
        self.z_score
    }

    /// Validates the configuration and constructs a [`ThresholdEstimator`].
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidSize`] when the grid size or trial
    /// count is zero.
    pub fn build(self) -> Result<ThresholdEstimator> {
        let grid_size =
            NonZeroUsize::new(self.grid_size).ok_or(PercolationError::InvalidSize {
                param: "grid size",
                got: self.grid_size,
            })?;
        let trials = NonZeroUsize::new(self.trials).ok_or(PercolationError::InvalidSize {
            param: "trial count",
            got: self.trials,
        })?;

        Ok(ThresholdEstimator::new(grid_size, trials, self.z_score))
    }
}
