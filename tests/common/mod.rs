// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use marching_cubes_33::geometry::{
    Axis, CornerSet, CubeGeometry, FaceId, Vertex, NEDGES, NFACES, NVERTICES,
};
use marching_cubes_33::{Evaluation, LookupTable};
use nalgebra::{Point3, Vector3};
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// The table, built once per test binary.
pub fn table() -> &'static LookupTable {
    static TABLE: OnceLock<LookupTable> = OnceLock::new();
    TABLE.get_or_init(|| LookupTable::build().expect("table builds"))
}

/// Corner samples with the given inside set and magnitudes.
pub fn samples_from_bits(bits: u8, magnitudes: &[f64; NVERTICES]) -> [f64; NVERTICES] {
    std::array::from_fn(|i| {
        if bits & (1 << i) != 0 {
            magnitudes[i]
        } else {
            -magnitudes[i]
        }
    })
}

/// Sum of the triangles' area vectors.
///
/// For a surface this depends only on its boundary, so rotating a cube's
/// samples must rotate the vector area with it.
pub fn vector_area(eval: &Evaluation) -> Vector3<f64> {
    eval.triangle_positions()
        .into_iter()
        .map(|t| {
            let [p, q, r] = t.map(Point3::from);
            (q - p).cross(&(r - p)) / 2.0
        })
        .sum()
}

/// Undirected surface-boundary segments lying on `face`, as edge-id pairs.
pub fn boundary_on_face(
    geometry: &CubeGeometry,
    eval: &Evaluation,
    face: FaceId,
) -> BTreeSet<(u8, u8)> {
    let mut directed = HashSet::new();
    for t in &eval.triangles {
        for (a, b) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
            directed.insert((a, b));
        }
    }
    let sides: Vec<u8> = geometry
        .face_edges(face)
        .expect("face has four edges")
        .iter()
        .map(|e| e.value())
        .collect();
    directed
        .iter()
        .filter(|&&(a, b)| !directed.contains(&(b, a)))
        .filter(|(a, b)| sides.contains(a) && sides.contains(b))
        .map(|&(a, b)| (a.min(b), a.max(b)))
        .collect()
}

/// The boundary segments the face's own sign pattern and saddle test call for.
///
/// Each segment cuts off one corner and joins the two sides meeting there.
/// Values on the level count as below, as they do in case selection.
pub fn expected_on_face(
    geometry: &CubeGeometry,
    values: &[f64; NVERTICES],
    face: FaceId,
) -> BTreeSet<(u8, u8)> {
    let def = geometry.face(face);
    let above = CornerSet::above(values, 0.0);
    let positive = def.corners.map(|v| above.contains(v));
    let sides = def.sides().map(|(a, b)| {
        geometry
            .edge_between(a, b)
            .expect("face sides are cube edges")
            .value()
    });
    let cut_off = |i: usize| {
        let (a, b) = (sides[(i + 3) % 4], sides[i]);
        (a.min(b), a.max(b))
    };
    let flips = (0..4).filter(|&i| positive[i] != positive[(i + 1) % 4]).count();
    match flips {
        0 => BTreeSet::new(),
        2 => {
            let cut: Vec<u8> = (0..4)
                .filter(|&i| positive[i] != positive[(i + 1) % 4])
                .map(|i| sides[i])
                .collect();
            BTreeSet::from([(cut[0].min(cut[1]), cut[0].max(cut[1]))])
        }
        _ => {
            // Whichever diagonal is joined, the other pair is cut off.
            let above_joined = def.saddle_test(values, above);
            (0..4)
                .filter(|&i| positive[i] != above_joined)
                .map(cut_off)
                .collect()
        }
    }
}

/// Faces whose boundary segments disagree with the face's own saddle test.
pub fn cracked_faces(
    geometry: &CubeGeometry,
    values: &[f64; NVERTICES],
    eval: &Evaluation,
) -> Vec<u8> {
    (0..NFACES as u8)
        .map(FaceId::new)
        .filter(|&f| boundary_on_face(geometry, eval, f) != expected_on_face(geometry, values, f))
        .map(|f| f.value())
        .collect()
}

/// Edges crossed by the iso-surface.
pub fn cut_edges(geometry: &CubeGeometry, values: &[f64; NVERTICES]) -> Vec<u8> {
    (0..NEDGES)
        .filter(|&e| {
            let edge = &geometry.edges()[e];
            (values[edge.a.as_usize()] > 0.0) != (values[edge.b.as_usize()] > 0.0)
        })
        .map(|e| e as u8)
        .collect()
}

/// Boundary segments on the face where `axis` is 1, renamed to the edges of
/// the next cube along `axis`, whose face there has `axis` at 0.
pub fn carried_to_neighbour(
    geometry: &CubeGeometry,
    eval: &Evaluation,
    axis: Axis,
) -> BTreeSet<(u8, u8)> {
    let across = |e: u8| {
        let def = &geometry.edges()[e as usize];
        let [a, b] = [def.a, def.b].map(|v| Vertex::new(v.value() & !axis.bit()));
        geometry
            .edge_between(a, b)
            .expect("face edges stay face edges")
            .value()
    };
    boundary_on_face(geometry, eval, FaceId::of(axis, 1))
        .into_iter()
        .map(|(a, b)| {
            let (a, b) = (across(a), across(b));
            (a.min(b), a.max(b))
        })
        .collect()
}

/// Whether two cubes that touch across `axis` draw the same boundary on
/// their shared face.
pub fn shared_face_agrees(
    geometry: &CubeGeometry,
    low: &Evaluation,
    high: &Evaluation,
    axis: Axis,
) -> bool {
    let shared = boundary_on_face(geometry, high, FaceId::of(axis, 0));
    carried_to_neighbour(geometry, low, axis) == shared
}

/// The eight corner values of the cube at `origin` in a sampled field.
pub fn cube_at(field: impl Fn([usize; 3]) -> f64, origin: [usize; 3]) -> [f64; NVERTICES] {
    std::array::from_fn(|i| {
        let v = Vertex::new(i as u8).point();
        field(std::array::from_fn(|k| origin[k] + v[k] as usize))
    })
}
