//! Square grid geometry and node classification.
//!
//! This module provides the index mapping between grid coordinates and
//! matrix unknowns, and the [`NodeClass`] enumeration that decides which
//! neighbours each node couples to.
//!
//! Unknowns are numbered row-major: `idx(k, i) = N * k + i`, where `k` is the
//! grid row (0 = bottom boundary) and `i` the column.
//!
//! # Node Classes
//!
//! | Class | Where | Diagonal | Couplings |
//! |-------|-------|----------|-----------|
//! | BottomCorner | k = 0, i = 0 or N-1 | 1 | N |
//! | BottomInterior | k = 0, 0 < i < N-1 | 2 | E, N |
//! | TopEven | k = N-1, i even | 2 | E, S |
//! | TopOdd | k = N-1, i odd | 2 | W, S |
//! | InteriorOddRowEven | k odd, i even | 3 | E, S, N |
//! | InteriorOddRowOdd | k odd, i odd | 3 | W, S, N |
//! | InteriorEvenRowCorner | k even, i = 0 or N-1 | 2 | idx-1, S |
//! | InteriorEvenRowOddCol | k even, i odd | 3 | E, S, N |
//! | InteriorEvenRowEvenCol | k even, i even | 3 | W, S, N |
//!
//! Every off-diagonal coefficient is -1.

mod classify;
mod types;

pub use classify::{Coupling, Direction, NodeClass, Offset, MAX_ENTRIES_PER_NODE, OFF_DIAGONAL};
pub use types::*;
