// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A proper rotation of the cube as three coupled index permutations.

use crate::errors::{TableError, TableResult};
use crate::geometry::{
    CornerSet, CubeGeometry, Vertex, INTERIOR_SLOT, NEDGES, NFACE_SLOTS, NVERTICES,
};
use crate::symmetry::permutation::{compose, invert, is_permutation, permute, permute_bits};
use nalgebra::{Matrix3, Point3, Rotation3, Unit, Vector3};

/// Snapping tolerance when mapping rotated corners back onto the lattice.
const LATTICE_TOLERANCE: f64 = 0.005;

/// Rotation about `axis` (any length) by `degrees`, acting on centered coordinates.
pub fn axis_angle(axis: Vector3<f64>, degrees: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(axis), degrees.to_radians())
}

/// One element of the cube's rotation group.
///
/// `vertex_perm[i]` is where corner `i` goes; `edge_perm` and `face_perm`
/// follow from it. `face_perm` has a seventh slot for the interior
/// pseudo-face, which every rotation fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    vertex_perm: [u8; NVERTICES],
    edge_perm: [u8; NEDGES],
    face_perm: [u8; NFACE_SLOTS],
}

impl Rotation {
    pub fn identity() -> Self {
        Self {
            vertex_perm: std::array::from_fn(|i| i as u8),
            edge_perm: std::array::from_fn(|i| i as u8),
            face_perm: std::array::from_fn(|i| i as u8),
        }
    }

    /// Derive the three permutations from a spatial rotation.
    ///
    /// Each corner's centered coordinates are rotated and snapped back to the
    /// lattice. Edges and faces are then found from their permuted corners.
    /// `id` is only used for error reporting.
    pub fn from_matrix(
        geometry: &CubeGeometry,
        matrix: &Rotation3<f64>,
        id: usize,
    ) -> TableResult<Self> {
        let degenerate = |reason| TableError::DegenerateRotation {
            rotation: id,
            reason,
        };

        let mut vertex_perm = [0u8; NVERTICES];
        for (v, slot) in Vertex::all().zip(vertex_perm.iter_mut()) {
            let moved = matrix * Point3::from(v.centered());
            let mut point = [0u8; 3];
            for (q, coordinate) in moved.coords.iter().zip(point.iter_mut()) {
                let snapped = 0.5 * q + 0.5;
                let rounded = snapped.round();
                if (snapped - rounded).abs() > LATTICE_TOLERANCE || !(0.0..=1.0).contains(&rounded) {
                    return Err(degenerate("a corner leaves the lattice"));
                }
                *coordinate = rounded as u8;
            }
            *slot = geometry.corner_index(point)?.value();
        }
        if !is_permutation(&vertex_perm) {
            return Err(degenerate("corners collide"));
        }

        let mut edge_perm = [0u8; NEDGES];
        for (e, slot) in geometry.edges().iter().zip(edge_perm.iter_mut()) {
            let a = Vertex::new(vertex_perm[e.a.as_usize()]);
            let b = Vertex::new(vertex_perm[e.b.as_usize()]);
            *slot = geometry
                .edge_between(a, b)
                .map_err(|_| degenerate("an edge does not map to an edge"))?
                .value();
        }

        let mut face_perm = [INTERIOR_SLOT; NFACE_SLOTS];
        for (f, slot) in geometry.faces().iter().zip(face_perm.iter_mut()) {
            let corners = f.corners.map(|c| Vertex::new(vertex_perm[c.as_usize()]));
            *slot = geometry
                .unique_face_containing(&corners)
                .map_err(|_| degenerate("a face does not map to a face"))?
                .value();
        }

        if !is_permutation(&edge_perm) || !is_permutation(&face_perm) {
            return Err(degenerate("edge or face map is not a bijection"));
        }

        Ok(Self {
            vertex_perm,
            edge_perm,
            face_perm,
        })
    }

    pub fn vertex_perm(&self) -> &[u8; NVERTICES] {
        &self.vertex_perm
    }

    pub fn edge_perm(&self) -> &[u8; NEDGES] {
        &self.edge_perm
    }

    pub fn face_perm(&self) -> &[u8; NFACE_SLOTS] {
        &self.face_perm
    }

    pub fn inverse(&self) -> Self {
        Self {
            vertex_perm: invert(&self.vertex_perm),
            edge_perm: invert(&self.edge_perm),
            face_perm: invert(&self.face_perm),
        }
    }

    /// `self` followed by `next`.
    pub fn then(&self, next: &Rotation) -> Self {
        Self {
            vertex_perm: compose(&self.vertex_perm, &next.vertex_perm),
            edge_perm: compose(&self.edge_perm, &next.edge_perm),
            face_perm: compose(&self.face_perm, &next.face_perm),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Move a corner configuration with the rotation.
    pub fn apply_to_corners(&self, corners: CornerSet) -> CornerSet {
        CornerSet::from_bits(permute_bits(corners.bits() as u32, &self.vertex_perm) as u8)
    }

    /// Move per-corner values with the rotation.
    pub fn apply_to_vertex_values<T: Copy>(&self, values: &[T; NVERTICES]) -> [T; NVERTICES] {
        permute(values, &self.vertex_perm)
    }

    /// Image of a face slot (0..6, or the interior slot).
    pub fn map_face_slot(&self, slot: u8) -> u8 {
        self.face_perm[slot as usize]
    }

    /// Where corner `v` goes.
    pub fn map_vertex(&self, v: Vertex) -> Vertex {
        Vertex::new(self.vertex_perm[v.as_usize()])
    }

    /// The exact linear map on centered coordinates, read back from where
    /// corner 0 and its three neighbours go.
    pub fn matrix(&self) -> Matrix3<f64> {
        let image = |v: u8| Vector3::from(self.map_vertex(Vertex::new(v)).centered());
        let origin = image(0);
        // Corners 4, 2 and 1 are the unit steps along x, y and z.
        Matrix3::from_columns(&[4, 2, 1].map(|v| (image(v) - origin) / 2.0))
    }
}
