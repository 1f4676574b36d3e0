//! Stable error-code mapping for the public error surface.

use permea_core::{PercolationError, PercolationErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    PercolationError::InvalidSize { param: "grid size", got: 0 },
    PercolationErrorCode::InvalidSize,
    "INVALID_SIZE",
)]
#[case(
    PercolationError::ElementOutOfRange { index: 9, len: 4 },
    PercolationErrorCode::OutOfRange,
    "OUT_OF_RANGE",
)]
#[case(
    PercolationError::SiteOutOfRange { row: 0, col: 1, size: 3 },
    PercolationErrorCode::OutOfRange,
    "OUT_OF_RANGE",
)]
fn returns_expected_error_code(
    #[case] error: PercolationError,
    #[case] expected: PercolationErrorCode,
    #[case] expected_str: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected_str);
    assert_eq!(error.code().to_string(), expected_str);
}

#[rstest]
#[case(
    PercolationError::InvalidSize { param: "trial count", got: 0 },
    "trial count must be at least 1 (got 0)",
)]
#[case(
    PercolationError::ElementOutOfRange { index: 11, len: 11 },
    "element 11 is out of range for a set of 11 elements",
)]
#[case(
    PercolationError::SiteOutOfRange { row: 4, col: 1, size: 3 },
    "site (4, 1) is outside the 1..=3 grid",
)]
fn renders_expected_message(#[case] error: PercolationError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}
