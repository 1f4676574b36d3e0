//! Permea core library.
//!
//! Models site percolation on an N-by-N grid and estimates the percolation
//! threshold by Monte Carlo simulation. Three components stack leaves-first:
//!
//! - [`DisjointSet`]: a weighted quick-union forest answering connectivity
//!   queries in amortised logarithmic time.
//! - [`PercolationGrid`]: an N-by-N open/blocked site grid layered over a
//!   disjoint set of size `N² + 2`, where two virtual sentinel elements
//!   reduce "does the system percolate" to a single root comparison.
//! - [`ThresholdEstimator`]: runs independent randomised trials against
//!   fresh grids and reports the sample mean, sample standard deviation, and
//!   95% confidence interval of the open fraction at first percolation.
//!
//! Randomness enters through the [`RandomSource`] seam so simulations can be
//! driven by the bundled [`SmallRngSource`] or by scripted draws in tests.

mod builder;
mod disjoint_set;
mod error;
mod estimator;
mod grid;
mod random;
mod result;

pub use crate::{
    builder::{CONFIDENCE_95, EstimatorBuilder},
    disjoint_set::DisjointSet,
    error::{PercolationError, PercolationErrorCode, Result},
    estimator::ThresholdEstimator,
    grid::PercolationGrid,
    random::{RandomSource, SmallRngSource},
    result::ThresholdEstimate,
};
