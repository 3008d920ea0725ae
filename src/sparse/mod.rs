//! Sparse matrix storage.
//!
//! Assembly happens in two phases:
//!
//! 1. [`TripletBuilder`] collects `(row, col, value)` entries. Entries that
//!    share a `(row, col)` position are summed, never overwritten.
//! 2. [`TripletBuilder::build`] consumes the builder and compacts it into an
//!    immutable [`CsrMatrix`] with sorted, duplicate-free rows.
//!
//! The CSR layout is:
//! ```text
//! row_ptr     [0, 2, 4, 7, 10]        row r spans row_ptr[r]..row_ptr[r+1]
//! col_indices [0, 2, 1, 3, 0, 2, 3, ...]
//! values      [1,-1, 1,-1,-1, 2,-1, ...]
//! ```

mod csr;
mod triplet;

pub use csr::CsrMatrix;
pub use triplet::{Triplet, TripletBuilder};
