//! Node classification and per-class coupling tables.

use std::fmt;

use super::types::{Grid, GridNode};
use Direction::{East, North, South, West};
use Offset::{Neighbor, PreviousUnknown};

/// Coefficient of every off-diagonal coupling.
pub const OFF_DIAGONAL: f64 = -1.0;

/// Largest number of entries a single node emits (diagonal included).
pub const MAX_ENTRIES_PER_NODE: usize = 4;

/// Logical neighbour direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same row, next column (i + 1)
    East,
    /// Same row, previous column (i - 1)
    West,
    /// Next grid row (k + 1)
    North,
    /// Previous grid row (k - 1)
    South,
}

impl Direction {
    /// Signed change in unknown index for this direction on an N x N grid.
    pub fn delta(self, n: usize) -> i64 {
        let n = n as i64;
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North => n,
            Direction::South => -n,
        }
    }
}

/// Target of one off-diagonal coupling, relative to the node's own unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    /// A grid neighbour
    Neighbor(Direction),
    /// The unknown numbered directly before this one (`idx - 1`).
    /// For a first-column node this is the last column of the grid row below.
    PreviousUnknown,
}

impl Offset {
    /// Signed change in unknown index on an N x N grid.
    pub fn delta(self, n: usize) -> i64 {
        match self {
            Offset::Neighbor(dir) => dir.delta(n),
            Offset::PreviousUnknown => -1,
        }
    }
}

/// Fixed coupling pattern of one node class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coupling {
    /// Diagonal (self) coefficient
    pub diagonal: f64,
    /// Off-diagonal targets, each with coefficient [`OFF_DIAGONAL`]
    pub offsets: &'static [Offset],
}

impl Coupling {
    const fn new(diagonal: f64, offsets: &'static [Offset]) -> Self {
        Self { diagonal, offsets }
    }

    /// Number of entries this coupling emits (diagonal included).
    pub fn entries(&self) -> usize {
        1 + self.offsets.len()
    }
}

const BOTTOM_CORNER: Coupling = Coupling::new(1.0, &[Neighbor(North)]);
const BOTTOM_INTERIOR: Coupling = Coupling::new(2.0, &[Neighbor(East), Neighbor(North)]);
const TOP_EVEN: Coupling = Coupling::new(2.0, &[Neighbor(East), Neighbor(South)]);
const TOP_ODD: Coupling = Coupling::new(2.0, &[Neighbor(West), Neighbor(South)]);
const INTERIOR_EAST: Coupling =
    Coupling::new(3.0, &[Neighbor(East), Neighbor(South), Neighbor(North)]);
const INTERIOR_WEST: Coupling =
    Coupling::new(3.0, &[Neighbor(West), Neighbor(South), Neighbor(North)]);
const EVEN_ROW_CORNER: Coupling = Coupling::new(2.0, &[PreviousUnknown, Neighbor(South)]);

/// Classification of a grid node, deciding its coupling pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeClass {
    /// Bottom row, first or last column
    BottomCorner,
    /// Bottom row, any other column
    BottomInterior,
    /// Top row, even column
    TopEven,
    /// Top row, odd column
    TopOdd,
    /// Odd interior row, even column
    InteriorOddRowEven,
    /// Odd interior row, odd column
    InteriorOddRowOdd,
    /// Even interior row, first or last column
    InteriorEvenRowCorner,
    /// Even interior row, odd non-edge column
    InteriorEvenRowOddCol,
    /// Even interior row, even non-edge column
    InteriorEvenRowEvenCol,
}

impl NodeClass {
    /// All classes, in classification priority order.
    pub const ALL: [NodeClass; 9] = [
        NodeClass::BottomCorner,
        NodeClass::BottomInterior,
        NodeClass::TopEven,
        NodeClass::TopOdd,
        NodeClass::InteriorOddRowEven,
        NodeClass::InteriorOddRowOdd,
        NodeClass::InteriorEvenRowCorner,
        NodeClass::InteriorEvenRowOddCol,
        NodeClass::InteriorEvenRowEvenCol,
    ];

    /// Classify a node.
    ///
    /// The bottom row takes priority over the top row, and only the bottom
    /// row and the even interior rows special-case the edge columns. The top
    /// row and the odd interior rows pick east/west purely by column parity.
    pub fn classify(grid: &Grid, node: GridNode) -> NodeClass {
        let even_col = node.i % 2 == 0;

        if grid.is_bottom(node) {
            if grid.is_edge_column(node) {
                NodeClass::BottomCorner
            } else {
                NodeClass::BottomInterior
            }
        } else if grid.is_top(node) {
            if even_col {
                NodeClass::TopEven
            } else {
                NodeClass::TopOdd
            }
        } else if node.k % 2 == 1 {
            if even_col {
                NodeClass::InteriorOddRowEven
            } else {
                NodeClass::InteriorOddRowOdd
            }
        } else if grid.is_edge_column(node) {
            NodeClass::InteriorEvenRowCorner
        } else if even_col {
            NodeClass::InteriorEvenRowEvenCol
        } else {
            NodeClass::InteriorEvenRowOddCol
        }
    }

    /// The fixed coupling table for this class.
    pub fn coupling(self) -> Coupling {
        match self {
            NodeClass::BottomCorner => BOTTOM_CORNER,
            NodeClass::BottomInterior => BOTTOM_INTERIOR,
            NodeClass::TopEven => TOP_EVEN,
            NodeClass::TopOdd => TOP_ODD,
            NodeClass::InteriorOddRowEven => INTERIOR_EAST,
            NodeClass::InteriorOddRowOdd => INTERIOR_WEST,
            NodeClass::InteriorEvenRowCorner => EVEN_ROW_CORNER,
            NodeClass::InteriorEvenRowOddCol => INTERIOR_EAST,
            NodeClass::InteriorEvenRowEvenCol => INTERIOR_WEST,
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeClass::BottomCorner => "bottom-corner",
            NodeClass::BottomInterior => "bottom-interior",
            NodeClass::TopEven => "top-even",
            NodeClass::TopOdd => "top-odd",
            NodeClass::InteriorOddRowEven => "odd-row-even-col",
            NodeClass::InteriorOddRowOdd => "odd-row-odd-col",
            NodeClass::InteriorEvenRowCorner => "even-row-corner",
            NodeClass::InteriorEvenRowOddCol => "even-row-odd-col",
            NodeClass::InteriorEvenRowEvenCol => "even-row-even-col",
        };
        f.pad(name)
    }
}
