// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Query-time use of the lookup table: triangulate one cube.
//!
//! The raw corner values are carried into the case's canonical frame, where
//! the case's tests are evaluated. The resulting subcase is then carried back:
//! its point slots are renamed through the subcase rotation and the inverse of
//! the case rotation, so the output indexes the raw cube's edges.
//!
//! ## Module Structure
//!
//! - `interior`: the interior probes (slice saddle, corner connectivity)

pub mod interior;

use crate::catalog::{SubcaseRef, Test};
use crate::geometry::{CornerSet, CENTER_SLOT, NEDGES, NPOINT_SLOTS, NVERTICES};
use crate::symmetry::invert;
use crate::table::LookupTable;

/// Midpoint of the unit cube, the position of the center slot.
pub const CENTER: [f64; 3] = [0.5, 0.5, 0.5];

/// Triangulation of one cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Corners strictly above the iso-level.
    pub corners: CornerSet,
    pub case: usize,
    pub subcase: SubcaseRef,
    /// Test outcome vector in the case's canonical frame.
    pub outcome: u32,
    /// Whether the final winding was reversed.
    pub flipped: bool,
    /// Edge crossings by edge id, then the cube center.
    pub points: [[f64; 3]; NPOINT_SLOTS],
    /// Triangles as indices into `points`; empty for unrealizable outcomes.
    pub triangles: Vec<[u8; 3]>,
}

impl Evaluation {
    /// Triangles with their vertex positions in cube coordinates.
    pub fn triangle_positions(&self) -> Vec<[[f64; 3]; 3]> {
        self.triangles
            .iter()
            .map(|t| t.map(|slot| self.points[slot as usize]))
            .collect()
    }
}

impl LookupTable {
    /// Triangulate the iso-surface `f = iso` in one cube.
    ///
    /// `samples` are the field values at the corners, indexed `4x + 2y + z`.
    /// Only edges whose endpoints straddle the iso-level carry meaningful
    /// points; the others are reported but never referenced.
    pub fn evaluate(&self, samples: &[f64; NVERTICES], iso: f64) -> Evaluation {
        let values = samples.map(|s| s - iso);
        let corners = CornerSet::above(&values, 0.0);
        let ptr = self.case_for(corners);
        let case = self.case(ptr.case);
        let rotation = self.group().get(ptr.rotation);
        let geometry = self.geometry();

        let mut points = [CENTER; NPOINT_SLOTS];
        for (edge, point) in geometry.edges().iter().zip(points.iter_mut()) {
            *point = edge.crossing(values[edge.a.as_usize()], values[edge.b.as_usize()]);
        }

        // Tests read sides from the carried corner set. Each face answer is
        // about the raw above pair, which is the canonical inside pair unless
        // the case is flipped.
        let rotated = rotation.apply_to_vertex_values(&values);
        let above = rotation.apply_to_corners(corners);

        let outcome = case
            .tests
            .iter()
            .enumerate()
            .filter(|(_, test)| match test {
                Test::Face(face) => {
                    geometry.face(*face).saddle_test(&rotated, above) != ptr.flip
                }
                Test::Interior => case
                    .probe
                    .as_ref()
                    .is_some_and(|p| interior::probe(geometry, p, &rotated, above)),
            })
            .fold(0u32, |acc, (i, _)| acc | (1 << i));

        let sub = case.subcases[outcome as usize];
        let flipped = ptr.flip ^ sub.flip;

        let triangles = match self.subcase(sub.subcase) {
            Some(subcase) => {
                let back = invert(rotation.edge_perm());
                let forward = self.group().get(sub.rotation).edge_perm();
                let mut slot_map = [CENTER_SLOT; NPOINT_SLOTS];
                for (j, slot) in slot_map.iter_mut().take(NEDGES).enumerate() {
                    *slot = back[forward[j] as usize];
                }
                subcase
                    .slots()
                    .map(|t| {
                        let [a, b, c] = t.map(|s| slot_map[s as usize]);
                        if flipped {
                            [c, b, a]
                        } else {
                            [a, b, c]
                        }
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        Evaluation {
            corners,
            case: ptr.case,
            subcase: sub.subcase,
            outcome,
            flipped,
            points,
            triangles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CornerSet;
    use nalgebra::{Point3, Vector3};

    fn samples(bits: u8) -> [f64; NVERTICES] {
        std::array::from_fn(|i| if bits & (1 << i) != 0 { 1.0 } else { -1.0 })
    }

    fn normal(t: &[[f64; 3]; 3]) -> Vector3<f64> {
        let [p, q, r] = t.map(Point3::from);
        (q - p).cross(&(r - p))
    }

    #[test]
    fn test_uniform_cubes_are_empty() {
        let table = LookupTable::build().unwrap();
        for bits in [0x00, 0xFF] {
            let e = table.evaluate(&samples(bits), 0.0);
            assert_eq!(e.case, 0);
            assert!(e.triangles.is_empty());
        }
    }

    #[test]
    fn test_single_corner() {
        let table = LookupTable::build().unwrap();
        let e = table.evaluate(&samples(0x01), 0.0);
        assert_eq!(e.case, 1);
        assert_eq!(e.corners, CornerSet::from_bits(0x01));
        assert_eq!(e.triangles, vec![[8, 4, 0]]);
        let positions = e.triangle_positions();
        assert_eq!(positions.len(), 1);
        let t = positions[0];
        for p in t {
            assert!(p.iter().all(|&c| c == 0.0 || c == 0.5));
        }
        // Points towards corner 0, the inside.
        assert!(normal(&t).iter().all(|&c| c < 0.0));
    }

    #[test]
    fn test_iso_level_shifts_crossings() {
        let table = LookupTable::build().unwrap();
        let mut s = [0.0; NVERTICES];
        s[0] = 1.0;
        let e = table.evaluate(&s, 0.25);
        assert_eq!(e.case, 1);
        assert_eq!(e.points[8], [0.0, 0.0, 0.75]);
    }

    #[test]
    fn test_edge_case_shares_an_edge() {
        let table = LookupTable::build().unwrap();
        let e = table.evaluate(&samples(0x03), 0.0);
        assert_eq!(e.case, 2);
        assert_eq!(e.triangles.len(), 2);
        let [a, b] = [e.triangles[0], e.triangles[1]];
        let shared = a.iter().filter(|s| b.contains(s)).count();
        assert_eq!(shared, 2);
    }

    #[test]
    fn test_complement_reverses_winding() {
        let table = LookupTable::build().unwrap();
        let inside = table.evaluate(&samples(0x01), 0.0);
        let outside = table.evaluate(&samples(0xFE), 0.0);
        assert!(outside.flipped);
        assert!(!inside.flipped);
        assert_eq!(outside.triangles, vec![[0, 4, 8]]);
        let t = outside.triangle_positions()[0];
        assert!(normal(&t).iter().all(|&c| c > 0.0));
    }

    #[test]
    fn test_every_configuration_triangulates() {
        let table = LookupTable::build().unwrap();
        for bits in 0..=255u8 {
            let e = table.evaluate(&samples(bits), 0.0);
            assert_eq!(e.triangles.is_empty(), bits == 0 || bits == 0xFF, "bits {:#x}", bits);
            // Only cut edges are referenced.
            for &slot in e.triangles.iter().flatten() {
                if slot as usize == CENTER_SLOT as usize {
                    continue;
                }
                let edge = table.geometry().edges()[slot as usize];
                let a = e.corners.contains(edge.a);
                let b = e.corners.contains(edge.b);
                assert_ne!(a, b, "bits {:#x} uses uncut edge {}", bits, slot);
            }
        }
    }
}
