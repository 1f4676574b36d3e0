//! Behavioural tests for the percolation grid.

use permea_core::{PercolationError, PercolationGrid};
use rstest::rstest;

type TestResult = Result<(), PercolationError>;

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn fresh_grid_is_blocked_and_does_not_percolate(#[case] n: usize) -> TestResult {
    let grid = PercolationGrid::new(n)?;
    assert_eq!(grid.open_site_count(), 0);
    assert!(!grid.percolates());
    for row in 1..=n {
        for col in 1..=n {
            assert!(!grid.is_open(row, col)?);
            assert!(!grid.is_full(row, col)?);
        }
    }
    Ok(())
}

#[test]
fn new_rejects_zero_size() {
    let err = PercolationGrid::new(0).expect_err("zero grid must be rejected");
    assert_eq!(
        err,
        PercolationError::InvalidSize {
            param: "grid size",
            got: 0,
        }
    );
}

#[test]
fn single_site_grid_percolates_after_one_open() -> TestResult {
    let mut grid = PercolationGrid::new(1)?;
    grid.open(1, 1)?;
    assert!(grid.percolates());
    assert_eq!(grid.open_site_count(), 1);
    assert!(grid.is_full(1, 1)?);
    Ok(())
}

#[test]
fn opening_a_site_twice_counts_once() -> TestResult {
    let mut grid = PercolationGrid::new(3)?;
    grid.open(2, 2)?;
    grid.open(2, 2)?;
    assert_eq!(grid.open_site_count(), 1);
    Ok(())
}

#[test]
fn fullness_propagates_through_open_neighbours() -> TestResult {
    let mut grid = PercolationGrid::new(3)?;
    grid.open(2, 1)?;
    grid.open(1, 1)?;
    grid.open(1, 3)?;
    grid.open(2, 2)?;

    assert!(grid.is_full(1, 1)?);
    assert!(!grid.is_full(1, 2)?);
    assert!(grid.is_full(1, 3)?);
    assert!(grid.is_open(2, 2)?);
    // (2,2) reaches the top through (2,1) and (1,1).
    assert!(grid.is_full(2, 2)?);
    assert!(!grid.percolates());

    grid.open(3, 1)?;
    assert!(grid.percolates());
    Ok(())
}

#[test]
fn percolation_is_monotonic_under_further_opens() -> TestResult {
    let mut grid = PercolationGrid::new(3)?;
    for row in 1..=3 {
        grid.open(row, 2)?;
    }
    assert!(grid.percolates());
    for row in 1..=3 {
        for col in 1..=3 {
            grid.open(row, col)?;
            assert!(grid.percolates());
        }
    }
    Ok(())
}

#[test]
fn bottom_connectivity_alone_does_not_fill_a_site() -> TestResult {
    // An open bottom-row site disconnected from the top is not full even
    // though it touches the virtual bottom sentinel.
    let mut grid = PercolationGrid::new(3)?;
    grid.open(3, 3)?;
    assert!(grid.is_open(3, 3)?);
    assert!(!grid.is_full(3, 3)?);
    Ok(())
}

#[rstest]
#[case::zero_row(0, 1)]
#[case::zero_col(1, 0)]
#[case::row_past_end(4, 1)]
#[case::col_past_end(1, 4)]
fn site_operations_reject_out_of_range_coordinates(
    #[case] row: usize,
    #[case] col: usize,
) -> TestResult {
    let mut grid = PercolationGrid::new(3)?;
    let expected = PercolationError::SiteOutOfRange { row, col, size: 3 };

    assert_eq!(grid.open(row, col).expect_err("open must reject"), expected);
    assert_eq!(
        grid.is_open(row, col).expect_err("is_open must reject"),
        expected
    );
    assert_eq!(
        grid.is_full(row, col).expect_err("is_full must reject"),
        expected
    );
    assert_eq!(grid.open_site_count(), 0);
    Ok(())
}
