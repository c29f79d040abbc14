// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The incidence structure of the unit cube.

use crate::errors::{TableError, TableResult};
use crate::geometry::axis::Axis;
use crate::geometry::constants::{NEDGES, NFACES};
use crate::geometry::{EdgeDef, EdgeId, FaceDef, FaceId, Vertex};
use strum::{EnumCount, IntoEnumIterator};

/// Corners of the face where `axis` is fixed at `value`, in product order of
/// the two free coordinates: `[p00, p01, p10, p11]`.
fn face_corners_in_product_order(axis: Axis, value: u8) -> [Vertex; 4] {
    let [u, w] = axis.others();
    let mut out = [Vertex::new(0); 4];
    for (i, slot) in out.iter_mut().enumerate() {
        let mut point = [0u8; 3];
        point[axis.index()] = value;
        point[u.index()] = (i >> 1) as u8 & 1;
        point[w.index()] = i as u8 & 1;
        *slot = Vertex::new(point[0] * 4 + point[1] * 2 + point[2]);
    }
    out
}

/// Vertices, edges and faces of the unit cube with their incidences.
///
/// Built once by [`CubeGeometry::new`] and shared read-only by every later stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeGeometry {
    edges: [EdgeDef; NEDGES],
    faces: [FaceDef; NFACES],
}

// Four edges and two faces per axis.
const _: () = assert!(Axis::COUNT * 4 == NEDGES && Axis::COUNT * 2 == NFACES);

impl CubeGeometry {
    pub fn new() -> Self {
        let edges: Vec<EdgeDef> = Axis::iter()
            .flat_map(|axis| face_corners_in_product_order(axis, 0).map(|a| (axis, a)))
            .enumerate()
            .map(|(i, (axis, a))| EdgeDef {
                id: EdgeId::new(i as u8),
                a,
                b: a.neighbour(axis),
                changing_dim: axis,
            })
            .collect();

        let faces: Vec<FaceDef> = Axis::iter()
            .flat_map(|axis| [0, 1].map(|value| (axis, value)))
            .map(|(axis, value)| {
                let [p00, p01, p10, p11] = face_corners_in_product_order(axis, value);
                FaceDef {
                    id: FaceId::of(axis, value),
                    fixed_dim: axis,
                    fixed_value: value,
                    corners: [p00, p01, p11, p10],
                }
            })
            .collect();

        Self {
            edges: std::array::from_fn(|i| edges[i]),
            faces: std::array::from_fn(|i| faces[i]),
        }
    }

    /// The corner at a lattice point.
    pub fn corner_index(&self, point: [u8; 3]) -> TableResult<Vertex> {
        Vertex::from_point(point).ok_or(TableError::VertexOutOfRange {
            value: point.into_iter().max().unwrap_or(0),
        })
    }

    /// The lattice point of a corner.
    pub fn corner_point(&self, v: Vertex) -> [u8; 3] {
        v.point()
    }

    pub fn edges(&self) -> &[EdgeDef; NEDGES] {
        &self.edges
    }

    pub fn faces(&self) -> &[FaceDef; NFACES] {
        &self.faces
    }

    pub fn edge(&self, id: EdgeId) -> &EdgeDef {
        &self.edges[id.as_usize()]
    }

    pub fn face(&self, id: FaceId) -> &FaceDef {
        &self.faces[id.as_usize()]
    }

    /// The edge joining two corners.
    ///
    /// Fails with [`TableError::NotAnEdge`] unless the corners differ in exactly
    /// one coordinate.
    pub fn edge_between(&self, v1: Vertex, v2: Vertex) -> TableResult<EdgeId> {
        self.edges
            .iter()
            .find(|e| e.joins(v1, v2))
            .map(|e| e.id)
            .ok_or(TableError::NotAnEdge {
                a: v1.value(),
                b: v2.value(),
            })
    }

    /// [`Self::edge_between`] over raw corner indices, as authored in the case catalog.
    pub fn edge_between_indices(&self, a: u8, b: u8) -> TableResult<EdgeId> {
        let v1 = Vertex::try_new(a).ok_or(TableError::VertexOutOfRange { value: a })?;
        let v2 = Vertex::try_new(b).ok_or(TableError::VertexOutOfRange { value: b })?;
        self.edge_between(v1, v2)
    }

    /// The one face whose corners include every given vertex.
    ///
    /// Fails with [`TableError::AmbiguousFace`] if no face or more than one face
    /// qualifies (for instance when given a single edge).
    pub fn unique_face_containing(&self, vertices: &[Vertex]) -> TableResult<FaceId> {
        let mut matches = self.faces.iter().filter(|f| f.contains_all(vertices));
        match (matches.next(), matches.next()) {
            (Some(face), None) => Ok(face.id),
            _ => Err(TableError::AmbiguousFace {
                corners: vertices.iter().map(|v| v.value()).collect(),
                matches: self
                    .faces
                    .iter()
                    .filter(|f| f.contains_all(vertices))
                    .count(),
            }),
        }
    }

    /// [`Self::unique_face_containing`] over raw corner indices.
    pub fn unique_face_containing_indices(&self, corners: &[u8]) -> TableResult<FaceId> {
        let vertices = corners
            .iter()
            .map(|&c| Vertex::try_new(c).ok_or(TableError::VertexOutOfRange { value: c }))
            .collect::<TableResult<Vec<_>>>()?;
        self.unique_face_containing(&vertices)
    }

    /// The four boundary edges of a face in cyclic order.
    pub fn face_edges(&self, face: FaceId) -> TableResult<[EdgeId; 4]> {
        let sides = self.face(face).sides();
        let mut out = [EdgeId::new(0); 4];
        for (slot, (a, b)) in out.iter_mut().zip(sides) {
            *slot = self.edge_between(a, b)?;
        }
        Ok(out)
    }
}

impl Default for CubeGeometry {
    fn default() -> Self {
        Self::new()
    }
}
