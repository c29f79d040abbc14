// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cube faces.
//!
//! Face `2·d + v` is the face where coordinate `d` equals `v`. Its corners are
//! stored in cyclic order `[p00, p01, p11, p10]` over the two free coordinates.
//! The ambiguous-face test reads the corners in that order, so swapping two
//! neighbours would flip its sign.

use crate::geometry::axis::Axis;
use crate::geometry::constants::NFACES;
use crate::geometry::{CornerSet, Vertex};

/// Index of a cube face, in the range 0..NFACES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(u8);

impl FaceId {
    /// # Panics
    ///
    /// Panics if `value >= NFACES`.
    pub const fn new(value: u8) -> Self {
        assert!((value as usize) < NFACES, "Face out of range");
        Self(value)
    }

    pub const fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NFACES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The face where `axis` is fixed at `value` (0 or 1).
    pub const fn of(axis: Axis, value: u8) -> Self {
        Self(2 * axis.index() as u8 + (value & 1))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Static description of one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceDef {
    pub id: FaceId,
    pub fixed_dim: Axis,
    pub fixed_value: u8,
    /// Corners in cyclic order.
    pub corners: [Vertex; 4],
}

impl FaceDef {
    pub fn corner_set(&self) -> CornerSet {
        CornerSet::from_vertices(&self.corners)
    }

    /// Whether the face carries every given corner.
    pub fn contains_all(&self, vertices: &[Vertex]) -> bool {
        vertices.iter().all(|v| self.corners.contains(v))
    }

    /// The four boundary edges as consecutive corner pairs.
    pub fn sides(&self) -> [(Vertex, Vertex); 4] {
        let c = self.corners;
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    /// The bilinear saddle test over this face.
    ///
    /// With corner values `a, b, c, d` in cyclic order, the sign of
    /// `a·c − b·d` decides which diagonal pair shares a sign with the saddle
    /// point. Returns whether the pair in `above` is the joined one. Sides
    /// come from `above` rather than the value signs, so a value equal to
    /// the iso-level sits below it here as it does everywhere else.
    pub fn saddle_test(&self, values: &[f64; 8], above: CornerSet) -> bool {
        let [a, b, c, d] = self.corners.map(|v| values[v.as_usize()]);
        let saddle = a * c - b * d;
        if above.contains(self.corners[0]) {
            saddle > 0.0
        } else {
            saddle < 0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bottom() -> FaceDef {
        FaceDef {
            id: FaceId::new(0),
            fixed_dim: Axis::X,
            fixed_value: 0,
            corners: [0, 1, 3, 2].map(Vertex::new),
        }
    }

    #[test]
    fn test_face_of() {
        assert_eq!(FaceId::of(Axis::X, 0), FaceId::new(0));
        assert_eq!(FaceId::of(Axis::Y, 1), FaceId::new(3));
        assert_eq!(FaceId::of(Axis::Z, 1), FaceId::new(5));
    }

    #[test]
    #[should_panic(expected = "Face out of range")]
    fn test_face_out_of_range() {
        FaceId::new(6);
    }

    #[test]
    fn test_contains_all() {
        let f = bottom();
        assert!(f.contains_all(&[Vertex::new(0), Vertex::new(3)]));
        assert!(!f.contains_all(&[Vertex::new(0), Vertex::new(4)]));
        assert_eq!(f.corner_set().bits(), 0b1111);
    }

    fn check(f: &FaceDef, values: &[f64; 8]) -> bool {
        f.saddle_test(values, CornerSet::above(values, 0.0))
    }

    #[test]
    fn test_saddle_test_joins_positive_diagonal() {
        let f = bottom();
        // 0 and 3 inside, saddle positive: joined.
        let mut values = [0.0; 8];
        values[0] = 1.0;
        values[1] = -0.1;
        values[3] = 1.0;
        values[2] = -0.1;
        assert!(check(&f, &values));
        // Saddle negative: the negative diagonal is joined instead.
        values[1] = -2.0;
        values[2] = -2.0;
        assert!(!check(&f, &values));
    }

    #[test]
    fn test_saddle_test_reads_the_above_pair() {
        let f = bottom();
        let mut values = [0.0; 8];
        values[0] = -1.0;
        values[1] = 0.1;
        values[3] = -1.0;
        values[2] = 0.1;
        // The negative diagonal dominates, so the positive corners 1 and 2
        // are separated.
        assert!(!check(&f, &values));
        let negated = values.map(|x| -x);
        assert!(check(&f, &negated));
    }

    #[test]
    fn test_saddle_test_with_a_corner_on_the_iso_level() {
        let f = bottom();
        // Corner 0 sits on the level and counts as below.
        let values = [0.0, 2.0, 2.0, -1.0, 0.0, 0.0, 0.0, 0.0];
        let above = CornerSet::above(&values, 0.0);
        assert!(!above.contains(Vertex::new(0)));
        // a·c − b·d = −4 with corner 0 below: the above pair 1, 2 is joined.
        assert!(f.saddle_test(&values, above));
        // Starting the cycle one corner later gives the same answer.
        let turned = FaceDef {
            corners: [1, 3, 2, 0].map(Vertex::new),
            ..f
        };
        assert!(turned.saddle_test(&values, above));
    }

    #[test]
    fn test_saddle_test_tie_joins_the_below_pair() {
        let f = bottom();
        let values = [1.0, -1.0, -1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        let above = CornerSet::above(&values, 0.0);
        assert!(!f.saddle_test(&values, above));
        let turned = FaceDef {
            corners: [1, 3, 2, 0].map(Vertex::new),
            ..f
        };
        assert!(!turned.saddle_test(&values, above));
    }
}
