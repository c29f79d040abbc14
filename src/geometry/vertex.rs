// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cube corners.
//!
//! Corner `i` sits at lattice point `((i >> 2) & 1, (i >> 1) & 1, i & 1)`, so the
//! index is `4x + 2y + z`. The mapping is a bijection between `0..8` and `{0,1}³`.

use crate::geometry::axis::Axis;
use crate::geometry::constants::NVERTICES;
use std::fmt;

/// A corner of the unit cube, in the range 0..NVERTICES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(u8);

impl Vertex {
    /// Create a vertex, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NVERTICES`.
    pub const fn new(value: u8) -> Self {
        assert!((value as usize) < NVERTICES, "Vertex out of range");
        Self(value)
    }

    /// Try to create a vertex, returning None if out of range.
    pub const fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NVERTICES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The corner at a lattice point, or None if a coordinate is not 0 or 1.
    pub const fn from_point(point: [u8; 3]) -> Option<Self> {
        if point[0] > 1 || point[1] > 1 || point[2] > 1 {
            return None;
        }
        Some(Self(point[0] * 4 + point[1] * 2 + point[2]))
    }

    /// Lattice point of this corner.
    pub const fn point(self) -> [u8; 3] {
        [(self.0 >> 2) & 1, (self.0 >> 1) & 1, self.0 & 1]
    }

    /// Coordinate of this corner along one axis.
    pub const fn coordinate(self, axis: Axis) -> u8 {
        (self.0 & axis.bit() != 0) as u8
    }

    /// Coordinates relative to the cube center, scaled to ±1.
    pub fn centered(self) -> [f64; 3] {
        self.point().map(|c| 2.0 * (c as f64 - 0.5))
    }

    /// The corner diagonally opposite through the cube center.
    pub const fn opposite(self) -> Self {
        Self(self.0 ^ 0b111)
    }

    /// The neighbouring corner along an axis.
    pub const fn neighbour(self, axis: Axis) -> Self {
        Self(self.0 ^ axis.bit())
    }

    /// Get the underlying value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the vertex as a usize (for array indexing).
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all corners in index order.
    pub fn all() -> impl Iterator<Item = Vertex> {
        (0..NVERTICES as u8).map(Vertex)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
