// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cube edges.
//!
//! Edges are numbered by the axis they run along (x: 0–3, y: 4–7, z: 8–11).
//! Within one axis they follow the lower endpoint in corner order. Endpoint `a`
//! is always the lower corner and carries the edge's fixed coordinates.

use crate::geometry::axis::Axis;
use crate::geometry::constants::NEDGES;
use crate::geometry::Vertex;

/// Index of a cube edge, in the range 0..NEDGES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(u8);

impl EdgeId {
    /// # Panics
    ///
    /// Panics if `value >= NEDGES`.
    pub const fn new(value: u8) -> Self {
        assert!((value as usize) < NEDGES, "Edge out of range");
        Self(value)
    }

    pub const fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NEDGES {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Static description of one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDef {
    pub id: EdgeId,
    /// Lower endpoint.
    pub a: Vertex,
    /// Upper endpoint, `a` moved one step along `changing_dim`.
    pub b: Vertex,
    /// The axis along which the edge runs.
    pub changing_dim: Axis,
}

impl EdgeDef {
    /// Lattice point of the lower endpoint. The coordinate along
    /// `changing_dim` is 0; the other two are the edge's fixed coordinates.
    pub const fn origin(&self) -> [u8; 3] {
        self.a.point()
    }

    /// Whether this edge joins the two corners, in either order.
    pub fn joins(&self, v1: Vertex, v2: Vertex) -> bool {
        (self.a == v1 && self.b == v2) || (self.a == v2 && self.b == v1)
    }

    /// Position where the linear interpolant of the endpoint values crosses zero.
    ///
    /// Values of equal sign never reach this: an edge is only cut when its
    /// endpoints straddle the iso-level. Equal values yield the midpoint.
    pub fn crossing(&self, value_a: f64, value_b: f64) -> [f64; 3] {
        let mut p = self.origin().map(f64::from);
        p[self.changing_dim.index()] = if value_a == value_b {
            0.5
        } else {
            value_a / (value_a - value_b)
        };
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x_edge() -> EdgeDef {
        EdgeDef {
            id: EdgeId::new(1),
            a: Vertex::new(1),
            b: Vertex::new(5),
            changing_dim: Axis::X,
        }
    }

    #[test]
    fn test_edge_id_range() {
        assert_eq!(EdgeId::new(11).as_usize(), 11);
        assert!(EdgeId::try_new(12).is_none());
    }

    #[test]
    #[should_panic(expected = "Edge out of range")]
    fn test_edge_out_of_range() {
        EdgeId::new(12);
    }

    #[test]
    fn test_joins_is_symmetric() {
        let e = x_edge();
        assert!(e.joins(Vertex::new(1), Vertex::new(5)));
        assert!(e.joins(Vertex::new(5), Vertex::new(1)));
        assert!(!e.joins(Vertex::new(1), Vertex::new(3)));
    }

    #[test]
    fn test_crossing_interpolates_along_changing_dim() {
        let e = x_edge();
        assert_eq!(e.crossing(1.0, -3.0), [0.25, 0.0, 1.0]);
        assert_eq!(e.crossing(-1.0, 1.0), [0.5, 0.0, 1.0]);
        assert_eq!(e.crossing(0.0, 0.0), [0.5, 0.0, 1.0]);
    }
}
