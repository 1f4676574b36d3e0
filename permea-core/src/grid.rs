//! N-by-N site percolation grid with virtual boundary sentinels.
//!
//! Sites are addressed with 1-indexed `(row, col)` coordinates and map onto
//! a [`DisjointSet`] of size `N² + 2`. The last two elements are the virtual
//! top and virtual bottom sentinels: every open top-row site merges with the
//! former and every open bottom-row site with the latter, so "does the
//! system percolate" collapses to a single root comparison instead of a
//! row-to-row search. The sentinels are never open sites themselves.

use crate::{DisjointSet, PercolationError, Result};

/// An N-by-N grid of open/blocked sites tracking top-to-bottom connectivity.
///
/// # Examples
/// ```
/// use permea_core::PercolationGrid;
///
/// let mut grid = PercolationGrid::new(1)?;
/// assert!(!grid.percolates());
/// grid.open(1, 1)?;
/// assert!(grid.percolates());
/// assert_eq!(grid.open_site_count(), 1);
/// # Ok::<(), permea_core::PercolationError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PercolationGrid {
    size: usize,
    open: Vec<bool>,
    open_sites: usize,
    sets: DisjointSet,
    virtual_top: usize,
    virtual_bottom: usize,
    percolated: bool,
}

impl PercolationGrid {
    /// Creates an `n`-by-`n` grid with every site blocked.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidSize`] when `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidSize {
                param: "grid size",
                got: n,
            });
        }
        let sites = n * n;
        Ok(Self {
            size: n,
            open: vec![false; sites],
            open_sites: 0,
            sets: DisjointSet::new(sites + 2)?,
            virtual_top: sites,
            virtual_bottom: sites + 1,
            percolated: false,
        })
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the running count of open sites (not a recount).
    #[must_use]
    pub fn open_site_count(&self) -> usize {
        self.open_sites
    }

    /// Returns whether an open path connects the top boundary to the bottom
    /// boundary.
    ///
    /// Monotonic: once true it remains true for the grid's lifetime, since
    /// opening never closes a site and merging never splits components.
    #[must_use]
    pub fn percolates(&self) -> bool {
        self.percolated
    }

    /// Opens the site at `(row, col)` if it is not open already.
    ///
    /// Opening merges the site with the virtual top sentinel on the first
    /// row, the virtual bottom sentinel on the last row (both when `N == 1`),
    /// and with every already-open orthogonal neighbour. Opening an open
    /// site is a no-op; the open-site count increments at most once per
    /// coordinate.
    ///
    /// # Errors
    /// Returns [`PercolationError::SiteOutOfRange`] when either coordinate
    /// is outside `[1, N]`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let index = self.site_index(row, col)?;
        if self.open[index] {
            return Ok(());
        }
        self.open[index] = true;
        self.open_sites += 1;

        if row == 1 {
            self.sets.union(index, self.virtual_top)?;
        }
        if row == self.size {
            self.sets.union(index, self.virtual_bottom)?;
        }
        // Union is commutative and a no-op on connected pairs, so neighbour
        // order does not matter.
        for neighbour in self.open_neighbours(row, col) {
            self.sets.union(index, neighbour)?;
        }

        if !self.percolated {
            self.percolated = self.sets.connected(self.virtual_top, self.virtual_bottom)?;
        }
        Ok(())
    }

    /// Returns whether the site at `(row, col)` is open.
    ///
    /// # Errors
    /// Returns [`PercolationError::SiteOutOfRange`] when either coordinate
    /// is outside `[1, N]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let index = self.site_index(row, col)?;
        Ok(self.open[index])
    }

    /// Returns whether the site at `(row, col)` is full: open and connected
    /// to the top boundary through a chain of open neighbours.
    ///
    /// # Errors
    /// Returns [`PercolationError::SiteOutOfRange`] when either coordinate
    /// is outside `[1, N]`.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let index = self.site_index(row, col)?;
        Ok(self.open[index] && self.sets.connected(index, self.virtual_top)?)
    }

    fn site_index(&self, row: usize, col: usize) -> Result<usize> {
        if row < 1 || row > self.size || col < 1 || col > self.size {
            return Err(PercolationError::SiteOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok((row - 1) * self.size + (col - 1))
    }

    fn open_neighbours(&self, row: usize, col: usize) -> Vec<usize> {
        let candidates = [
            (row > 1).then(|| (row - 1, col)),
            (row < self.size).then(|| (row + 1, col)),
            (col > 1).then(|| (row, col - 1)),
            (col < self.size).then(|| (row, col + 1)),
        ];
        let mut neighbours = Vec::with_capacity(4);
        for (r, c) in candidates.into_iter().flatten() {
            let index = (r - 1) * self.size + (c - 1);
            if self.open[index] {
                neighbours.push(index);
            }
        }
        neighbours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_index_maps_rows_then_columns() {
        let grid = PercolationGrid::new(3).expect("grid must construct");
        assert_eq!(grid.site_index(1, 1).expect("in range"), 0);
        assert_eq!(grid.site_index(1, 3).expect("in range"), 2);
        assert_eq!(grid.site_index(2, 1).expect("in range"), 3);
        assert_eq!(grid.site_index(3, 3).expect("in range"), 8);
    }

    #[test]
    fn virtual_sentinels_follow_the_site_block() {
        let grid = PercolationGrid::new(3).expect("grid must construct");
        assert_eq!(grid.virtual_top, 9);
        assert_eq!(grid.virtual_bottom, 10);
    }

    #[test]
    fn open_neighbours_skips_blocked_sites() {
        let mut grid = PercolationGrid::new(3).expect("grid must construct");
        grid.open(1, 2).expect("in range");
        grid.open(2, 1).expect("in range");
        let neighbours = grid.open_neighbours(2, 2);
        assert_eq!(neighbours.len(), 2);
        assert!(neighbours.contains(&1)); // (1, 2)
        assert!(neighbours.contains(&3)); // (2, 1)
    }
}
