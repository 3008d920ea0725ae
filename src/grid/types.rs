//! Core types for grid representation.

use std::fmt;

use super::classify::MAX_ENTRIES_PER_NODE;
use crate::error::{Result, StencilError};
use crate::MIN_DIMENSION;

/// A node of the grid, addressed by grid row `k` and column `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridNode {
    /// Grid row (0 is the bottom boundary)
    pub k: usize,
    /// Column within the row
    pub i: usize,
}

impl GridNode {
    /// Create a node at row `k`, column `i`.
    pub fn new(k: usize, i: usize) -> Self {
        Self { k, i }
    }
}

impl fmt::Display for GridNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.k, self.i)
    }
}

/// An N x N grid of unknowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    n: usize,
}

impl Grid {
    /// Create a grid of dimension `n`.
    ///
    /// Fails with [`StencilError::InvalidDimension`] for `n < 2`: with a single
    /// row the bottom and top boundary rules both apply to the same nodes.
    /// Also fails when the N² unknowns, or the triplets stamped for them,
    /// cannot be counted in a `usize`.
    pub fn new(n: usize) -> Result<Self> {
        if n < MIN_DIMENSION {
            return Err(StencilError::invalid_dimension(n));
        }
        n.checked_mul(n)
            .and_then(|unknowns| unknowns.checked_mul(MAX_ENTRIES_PER_NODE))
            .ok_or_else(|| StencilError::invalid_dimension(n))?;
        Ok(Self { n })
    }

    /// Grid dimension N.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Number of unknowns (N²), which is also the operator size.
    pub fn unknowns(&self) -> usize {
        self.n * self.n
    }

    /// Linear unknown index of a node.
    pub fn idx(&self, node: GridNode) -> usize {
        debug_assert!(self.contains(node), "node {node} outside grid");
        self.n * node.k + node.i
    }

    /// Node for a linear unknown index.
    /// Returns None if the index is outside the grid.
    pub fn node_at(&self, index: usize) -> Option<GridNode> {
        (index < self.unknowns()).then(|| GridNode::new(index / self.n, index % self.n))
    }

    /// Check if a node lies on the grid.
    pub fn contains(&self, node: GridNode) -> bool {
        node.k < self.n && node.i < self.n
    }

    /// Iterate over all nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = GridNode> {
        let n = self.n;
        (0..n).flat_map(move |k| (0..n).map(move |i| GridNode::new(k, i)))
    }

    /// Check if a node is on the bottom boundary row.
    pub fn is_bottom(&self, node: GridNode) -> bool {
        node.k == 0
    }

    /// Check if a node is on the top boundary row.
    pub fn is_top(&self, node: GridNode) -> bool {
        node.k == self.n - 1
    }

    /// Check if a node is in the first or last column.
    pub fn is_edge_column(&self, node: GridNode) -> bool {
        node.i == 0 || node.i == self.n - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_dimensions() {
        assert!(matches!(
            Grid::new(0),
            Err(StencilError::InvalidDimension { n: 0 })
        ));
        assert!(matches!(
            Grid::new(1),
            Err(StencilError::InvalidDimension { n: 1 })
        ));
        assert!(Grid::new(2).is_ok());
    }

    #[test]
    fn test_rejects_unaddressable_dimensions() {
        // N² overflows usize
        let n = 1usize << (usize::BITS / 2);
        assert!(matches!(
            Grid::new(n),
            Err(StencilError::InvalidDimension { n: m }) if m == n
        ));
        assert!(matches!(
            Grid::new(usize::MAX),
            Err(StencilError::InvalidDimension { .. })
        ));

        // N² fits but the stamped triplets do not
        let n = 1usize << (usize::BITS / 2 - 1);
        assert!(matches!(
            Grid::new(n),
            Err(StencilError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_index_mapping() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.unknowns(), 16);
        assert_eq!(grid.idx(GridNode::new(0, 0)), 0);
        assert_eq!(grid.idx(GridNode::new(1, 0)), 4);
        assert_eq!(grid.idx(GridNode::new(3, 2)), 14);

        for index in 0..grid.unknowns() {
            let node = grid.node_at(index).unwrap();
            assert_eq!(grid.idx(node), index);
        }
        assert_eq!(grid.node_at(16), None);
    }

    #[test]
    fn test_nodes_row_major() {
        let grid = Grid::new(3).unwrap();
        let nodes: Vec<_> = grid.nodes().collect();
        assert_eq!(nodes.len(), 9);
        assert_eq!(nodes[0], GridNode::new(0, 0));
        assert_eq!(nodes[1], GridNode::new(0, 1));
        assert_eq!(nodes[3], GridNode::new(1, 0));
        assert_eq!(nodes[8], GridNode::new(2, 2));
    }

    #[test]
    fn test_boundary_predicates() {
        let grid = Grid::new(4).unwrap();
        assert!(grid.is_bottom(GridNode::new(0, 2)));
        assert!(grid.is_top(GridNode::new(3, 1)));
        assert!(!grid.is_top(GridNode::new(2, 1)));
        assert!(grid.is_edge_column(GridNode::new(2, 0)));
        assert!(grid.is_edge_column(GridNode::new(2, 3)));
        assert!(!grid.is_edge_column(GridNode::new(2, 1)));
    }
}
