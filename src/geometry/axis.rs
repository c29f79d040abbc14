// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coordinate axes of the unit cube.

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One of the three coordinate axes.
///
/// Vertex indices are `4x + 2y + z`, so each axis owns one bit of a vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCountMacro, EnumIter)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Position of this axis in a coordinate triple.
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The vertex-index bit toggled by moving along this axis.
    pub const fn bit(self) -> u8 {
        match self {
            Axis::X => 4,
            Axis::Y => 2,
            Axis::Z => 1,
        }
    }

    /// The two other axes, in ascending order.
    pub const fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}
