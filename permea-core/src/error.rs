//! Error types for the permea core library.
//!
//! Every failure in this crate is a caller contract violation: either a
//! zero size/count at construction or an index outside its valid domain.
//! Both are raised immediately at the offending call and are not
//! recoverable internally. Defined no-ops (opening an already-open site,
//! merging already-connected elements) are not errors.

use std::fmt;

use thiserror::Error;

/// An error produced by grid, disjoint-set, or estimator operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PercolationError {
    /// A size or count parameter must be at least one.
    #[error("{param} must be at least 1 (got {got})")]
    InvalidSize {
        /// Name of the offending constructor parameter.
        param: &'static str,
        /// The invalid value supplied by the caller.
        got: usize,
    },
    /// A disjoint-set element index was outside `[0, len)`.
    #[error("element {index} is out of range for a set of {len} elements")]
    ElementOutOfRange {
        /// The requested element index.
        index: usize,
        /// Number of elements in the set.
        len: usize,
    },
    /// A grid coordinate was outside the 1-indexed `[1, size]` range.
    #[error("site ({row}, {col}) is outside the 1..={size} grid")]
    SiteOutOfRange {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
        /// Grid dimension N.
        size: usize,
    },
}

impl PercolationError {
    /// Retrieve the stable [`PercolationErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> PercolationErrorCode {
        match self {
            Self::InvalidSize { .. } => PercolationErrorCode::InvalidSize,
            Self::ElementOutOfRange { .. } | Self::SiteOutOfRange { .. } => {
                PercolationErrorCode::OutOfRange
            }
        }
    }
}

/// Stable machine-readable codes describing [`PercolationError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum PercolationErrorCode {
    /// A size or count parameter was zero.
    InvalidSize,
    /// An element index or grid coordinate was outside its valid domain.
    OutOfRange,
}

impl PercolationErrorCode {
    /// Return the symbolic identifier used on logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidSize => "INVALID_SIZE",
            Self::OutOfRange => "OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for PercolationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PercolationError>;
