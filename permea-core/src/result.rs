//! Estimate produced by a completed set of percolation trials.

/// Descriptive statistics over per-trial open-fraction samples.
///
/// All values are fixed when the estimate is constructed; the accessors are
/// pure reads.
///
/// The sample standard deviation uses Bessel's correction (divisor
/// `trials - 1`). With a single trial it is mathematically undefined and is
/// reported as NaN rather than silently coerced to zero, which makes both
/// confidence bounds NaN as well.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdEstimate {
    mean: f64,
    stddev: f64,
    confidence_lo: f64,
    confidence_hi: f64,
    samples: Vec<f64>,
}

impl ThresholdEstimate {
    /// Computes the statistics for a non-empty sample sequence.
    ///
    /// The estimator guarantees at least one sample, so the mean is always
    /// well defined.
    pub(crate) fn from_samples(samples: Vec<f64>, z_score: f64) -> Self {
        let trials = samples.len();
        let mean = samples.iter().sum::<f64>() / trials as f64;
        let stddev = if trials < 2 {
            f64::NAN
        } else {
            let squared_deviations: f64 = samples.iter().map(|s| (s - mean).powi(2)).sum();
            (squared_deviations / (trials - 1) as f64).sqrt()
        };
        let margin = z_score * stddev / (trials as f64).sqrt();
        Self {
            mean,
            stddev,
            confidence_lo: mean - margin,
            confidence_hi: mean + margin,
            samples,
        }
    }

    /// Sample mean of the percolation threshold.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the percolation threshold.
    ///
    /// NaN when only one trial was run.
    #[must_use]
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the confidence interval.
    #[must_use]
    pub fn confidence_lo(&self) -> f64 {
        self.confidence_lo
    }

    /// High endpoint of the confidence interval.
    #[must_use]
    pub fn confidence_hi(&self) -> f64 {
        self.confidence_hi
    }

    /// Per-trial open-fraction samples in trial order.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of completed trials.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.samples.len()
    }
}
