//! # Brick Stencil
//!
//! Sparse operator assembly for a parity-coupled grid stencil.
//!
//! This library provides:
//! - Classification of every node of an N x N grid into one of nine coupling classes
//! - A triplet builder that sums duplicate entries
//! - Compaction into an immutable CSR matrix ready for an external sparse solver
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`grid`] - Grid indexing, node classes and their coupling tables
//! - [`sparse`] - Triplet accumulation and CSR storage
//! - [`assembly`] - The single-pass stencil assembler
//! - [`output`] - Text writers for the assembled matrix (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! brick-stencil 8 --format mtx --output operator.mtx
//! ```
//!
//! ### Library
//!
//! ```no_run
//! let a = brick_stencil::assemble(8)?;
//! assert_eq!(a.nrows(), 64);
//! # Ok::<(), brick_stencil::StencilError>(())
//! ```
//!
//! ## Stencil
//!
//! Unknowns sit at the N² grid nodes, numbered `N * k + i`. Each node emits
//! one equation: a diagonal coefficient equal to the number of neighbours it
//! couples to, and -1 for each of them. Which neighbours depends on whether
//! the node is on the bottom or top boundary row and on the parity of its row
//! and column, giving a brick-like adjacency rather than a 5-point Laplacian.
//!
//! Only even N assemble cleanly. On odd grids the top-right node couples east
//! past the last unknown and assembly fails with
//! [`StencilError::IndexOutOfRange`].

pub mod assembly;
pub mod error;
pub mod grid;
pub mod sparse;

#[cfg(feature = "cli")]
pub mod output;

// Re-export main types for convenience
pub use assembly::{assemble, assemble_triplets, Assembler};
pub use error::{Result, StencilError};
pub use grid::{Grid, GridNode, NodeClass};
pub use sparse::{CsrMatrix, TripletBuilder};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmStencil;

/// Smallest grid dimension the stencil is defined for.
pub const MIN_DIMENSION: usize = 2;
