//! Weighted quick-union (union-by-size) disjoint-set forest.
//!
//! The percolation grid merges open sites as they appear and asks whether
//! two elements share a component. Union-by-size keeps every root-to-leaf
//! path at O(log n), so plain root chasing stays inexpensive without path
//! compression.

use crate::{PercolationError, Result};

/// A forest over `n` labelled elements supporting merge and connectivity
/// queries.
///
/// # Examples
/// ```
/// use permea_core::DisjointSet;
///
/// let mut set = DisjointSet::new(5)?;
/// set.union(0, 1)?;
/// set.union(1, 2)?;
/// assert!(set.connected(0, 2)?);
/// assert_eq!(set.count(), 3);
/// # Ok::<(), permea_core::PercolationError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Creates a forest of `n` singleton components.
    ///
    /// # Errors
    /// Returns [`PercolationError::InvalidSize`] when `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidSize {
                param: "element count",
                got: n,
            });
        }
        Ok(Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        })
    }

    /// Returns the number of elements in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns whether the forest contains no elements.
    ///
    /// Always false for constructed sets; provided for API convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of disjoint components.
    ///
    /// Decreases by exactly one per non-trivial merge and never changes
    /// otherwise.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of `p` by following parent links.
    ///
    /// # Errors
    /// Returns [`PercolationError::ElementOutOfRange`] when `p` is outside
    /// `[0, len)`.
    pub fn find(&self, p: usize) -> Result<usize> {
        self.check(p)?;
        Ok(self.root(p))
    }

    /// Returns whether `p` and `q` share a component.
    ///
    /// # Errors
    /// Returns [`PercolationError::ElementOutOfRange`] when either element
    /// is outside `[0, len)`.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merges the components containing `p` and `q`.
    ///
    /// A no-op when the elements already share a root. Otherwise the root
    /// with the smaller subtree is attached under the larger, with ties
    /// attaching `q`'s root under `p`'s root.
    ///
    /// # Errors
    /// Returns [`PercolationError::ElementOutOfRange`] when either element
    /// is outside `[0, len)`.
    pub fn union(&mut self, p: usize, q: usize) -> Result<()> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(());
        }

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
        Ok(())
    }

    fn root(&self, mut p: usize) -> usize {
        while self.parent[p] != p {
            p = self.parent[p];
        }
        p
    }

    fn check(&self, p: usize) -> Result<()> {
        if p >= self.parent.len() {
            return Err(PercolationError::ElementOutOfRange {
                index: p,
                len: self.parent.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn new_rejects_zero_elements() {
        let err = DisjointSet::new(0).expect_err("zero-sized set must be rejected");
        assert_eq!(
            err,
            PercolationError::InvalidSize {
                param: "element count",
                got: 0,
            }
        );
    }

    #[test]
    fn fresh_set_has_singleton_components() {
        let set = DisjointSet::new(4).expect("set must construct");
        assert_eq!(set.len(), 4);
        assert_eq!(set.count(), 4);
        for element in 0..4 {
            assert_eq!(set.find(element).expect("element in range"), element);
        }
    }

    #[test]
    fn transitive_union_connects_elements() {
        let mut set = DisjointSet::new(5).expect("set must construct");
        set.union(0, 1).expect("elements in range");
        set.union(1, 2).expect("elements in range");
        assert!(set.connected(0, 2).expect("elements in range"));
        assert_eq!(set.count(), 3);
    }

    #[test]
    fn union_of_connected_elements_is_a_no_op() {
        let mut set = DisjointSet::new(3).expect("set must construct");
        set.union(0, 1).expect("elements in range");
        set.union(0, 1).expect("repeat union must succeed");
        set.union(1, 0).expect("reversed union must succeed");
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn equal_size_tie_attaches_second_root_under_first() {
        let mut set = DisjointSet::new(2).expect("set must construct");
        set.union(0, 1).expect("elements in range");
        assert_eq!(set.find(1).expect("element in range"), 0);
    }

    #[test]
    fn smaller_subtree_attaches_under_larger() {
        let mut set = DisjointSet::new(4).expect("set must construct");
        set.union(0, 1).expect("elements in range");
        set.union(0, 2).expect("elements in range");
        // {0,1,2} rooted at 0 has size 3; singleton 3 must attach under 0.
        set.union(3, 0).expect("elements in range");
        assert_eq!(set.find(3).expect("element in range"), 0);
    }

    #[rstest]
    #[case::find(3)]
    #[case::find_far(usize::MAX)]
    fn find_rejects_out_of_range_elements(#[case] index: usize) {
        let set = DisjointSet::new(3).expect("set must construct");
        let err = set.find(index).expect_err("index must be rejected");
        assert_eq!(err, PercolationError::ElementOutOfRange { index, len: 3 });
    }

    #[test]
    fn union_rejects_out_of_range_elements() {
        let mut set = DisjointSet::new(3).expect("set must construct");
        let err = set.union(0, 7).expect_err("index must be rejected");
        assert_eq!(err, PercolationError::ElementOutOfRange { index: 7, len: 3 });
        // A failed union must not disturb component state.
        assert_eq!(set.count(), 3);
    }
}
