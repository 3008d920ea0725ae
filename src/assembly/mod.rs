//! Stencil matrix assembly.
//!
//! This module maps every grid node to one row of the operator.
//!
//! For each node (k, i), visited row-major:
//!
//! 1. Classify the node into a [`NodeClass`]
//! 2. Stamp the class's diagonal coefficient at `(idx, idx)`
//! 3. Stamp -1 at every coupled column `idx + offset`
//!
//! Every coupled column is bounds-checked against `[0, N²)`. The top row and
//! the odd interior rows have no edge-column rule, so on grids with odd N the
//! top-right node couples east past the last unknown. That case is reported
//! as [`StencilError::IndexOutOfRange`] instead of being clamped or wrapped.

mod stats;

pub use stats::AssemblyStats;

use log::{debug, trace};

use crate::error::{Result, StencilError};
use crate::grid::{Grid, GridNode, NodeClass, MAX_ENTRIES_PER_NODE, OFF_DIAGONAL};
use crate::sparse::{CsrMatrix, TripletBuilder};

/// Assemble the N² x N² operator for an N x N grid.
pub fn assemble(n: usize) -> Result<CsrMatrix> {
    Assembler::new(n)?.assemble()
}

/// Assemble the raw triplet list for an N x N grid, without compaction.
pub fn assemble_triplets(n: usize) -> Result<TripletBuilder> {
    Assembler::new(n)?.triplets()
}

/// Stamp the row belonging to `node` into `builder`.
///
/// Returns the class the node was assigned to.
pub fn stamp_node(grid: &Grid, node: GridNode, builder: &mut TripletBuilder) -> Result<NodeClass> {
    let class = NodeClass::classify(grid, node);
    let coupling = class.coupling();
    let diag = grid.idx(node);
    let dim = grid.unknowns();

    builder.push(diag, diag, coupling.diagonal)?;

    for offset in coupling.offsets {
        let col = diag as i64 + offset.delta(grid.dim());
        if col < 0 || col >= dim as i64 {
            return Err(StencilError::index_out_of_range(diag, col, dim));
        }
        builder.push(diag, col as usize, OFF_DIAGONAL)?;
    }

    trace!("node {node} -> row {diag} ({class})");
    Ok(class)
}

/// Single-pass assembler for one grid.
#[derive(Debug)]
pub struct Assembler {
    grid: Grid,
    stats: AssemblyStats,
}

impl Assembler {
    /// Create an assembler for an N x N grid.
    pub fn new(n: usize) -> Result<Self> {
        Ok(Self::for_grid(Grid::new(n)?))
    }

    /// Create an assembler for an existing grid.
    pub fn for_grid(grid: Grid) -> Self {
        Self {
            grid,
            stats: AssemblyStats::default(),
        }
    }

    /// The grid being assembled.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Statistics of the last assembly pass.
    pub fn stats(&self) -> &AssemblyStats {
        &self.stats
    }

    /// Run the per-node pass and return the raw triplets.
    pub fn triplets(&mut self) -> Result<TripletBuilder> {
        let dim = self.grid.unknowns();
        let mut builder = TripletBuilder::with_capacity(dim, dim * MAX_ENTRIES_PER_NODE);
        self.stats = AssemblyStats::default();

        for node in self.grid.nodes() {
            let class = stamp_node(&self.grid, node, &mut builder)?;
            self.stats.record(class);
        }
        self.stats.triplets = builder.len();

        debug!(
            "stamped {} triplets for {} unknowns (N = {})",
            builder.len(),
            dim,
            self.grid.dim()
        );
        Ok(builder)
    }

    /// Run the per-node pass and compact into CSR.
    pub fn assemble(&mut self) -> Result<CsrMatrix> {
        let matrix = self.triplets()?.build();
        self.stats.nnz = matrix.nnz();
        debug!(
            "assembled {}x{} operator with {} non-zeros",
            matrix.nrows(),
            matrix.ncols(),
            matrix.nnz()
        );
        Ok(matrix)
    }
}
