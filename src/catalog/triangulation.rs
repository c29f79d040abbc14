// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symbolic triangle patches.
//!
//! Catalog triangulations name their points by the two corners of an edge, so
//! they read the same way the topology is drawn. A [`Patch`] is resolved to
//! edge indices only once, against the [`CubeGeometry`].
//!
//! Triangles are wound so their normals face the inside corners.

use crate::catalog::Subcase;
use crate::errors::TableResult;
use crate::geometry::{CubeGeometry, Point};
use std::ops::{Add, AddAssign};

/// A symbolic point: the edge between two corners, or the cube center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Edge(u8, u8),
    Center,
}

impl Anchor {
    /// The edge joining the central inversion images of this edge's corners.
    pub const fn opposite(self) -> Self {
        match self {
            Anchor::Edge(a, b) => Anchor::Edge(7 - a, 7 - b),
            Anchor::Center => Anchor::Center,
        }
    }

    pub fn resolve(self, geometry: &CubeGeometry) -> TableResult<Point> {
        match self {
            Anchor::Edge(a, b) => Ok(Point::Edge(geometry.edge_between_indices(a, b)?)),
            Anchor::Center => Ok(Point::Center),
        }
    }
}

/// Consecutive pairs of a closed ring, starting with (last, first).
fn ring_pairs<T: Copy>(ring: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    let last = ring.last().copied();
    last.into_iter()
        .chain(ring.iter().copied())
        .zip(ring.iter().copied())
}

/// An ordered list of symbolic triangles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Patch {
    triangles: Vec<[Anchor; 3]>,
}

impl Patch {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Triangles given as index triples into `points`.
    ///
    /// # Panics
    ///
    /// Panics if a triangle indexes past `points`.
    pub fn new(points: &[Anchor], triangles: &[[usize; 3]]) -> Self {
        Self {
            triangles: triangles
                .iter()
                .map(|t| t.map(|i| points[i]))
                .collect(),
        }
    }

    pub fn triangle(a: Anchor, b: Anchor, c: Anchor) -> Self {
        Self {
            triangles: vec![[a, b, c]],
        }
    }

    /// The small triangle cutting off one corner.
    pub fn corner(v: u8) -> Self {
        let points = [
            Anchor::Edge(v, v ^ 1),
            Anchor::Edge(v, v ^ 2),
            Anchor::Edge(v, v ^ 4),
        ];
        let order = if v.count_ones() % 2 == 0 {
            [0, 1, 2]
        } else {
            [2, 1, 0]
        };
        Self::new(&points, &[order])
    }

    /// The same triangles with the opposite winding.
    pub fn reversed(&self) -> Self {
        Self {
            triangles: self.triangles.iter().map(|&[a, b, c]| [c, b, a]).collect(),
        }
    }

    /// Quadrilateral `a b c d` split along `a c`.
    pub fn quad(a: Anchor, b: Anchor, c: Anchor, d: Anchor) -> Self {
        Self {
            triangles: vec![[a, b, c], [a, c, d]],
        }
    }

    /// Fan from the cube center over a closed ring of edge points.
    pub fn fan(ring: &[Anchor]) -> Self {
        Self {
            triangles: ring_pairs(ring)
                .map(|(a, b)| [a, b, Anchor::Center])
                .collect(),
        }
    }

    /// Tube joining a ring to its central inversion image.
    pub fn tube(ring: &[Anchor]) -> Self {
        let n = ring.len();
        let mut points: Vec<Anchor> = ring.to_vec();
        points.extend(ring.iter().map(|a| a.opposite()));
        let mut triangles = Vec::with_capacity(2 * n);
        for i in 0..n {
            let next = (i + 1) % n;
            triangles.push([i, next, n + next]);
            triangles.push([i, n + next, n + i]);
        }
        Self::new(&points, &triangles)
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangles(&self) -> &[[Anchor; 3]] {
        &self.triangles
    }

    /// Resolve every anchor to a point slot.
    pub fn resolve(&self, geometry: &CubeGeometry) -> TableResult<Subcase> {
        let mut triangles = Vec::with_capacity(self.triangles.len());
        for t in &self.triangles {
            triangles.push([
                t[0].resolve(geometry)?,
                t[1].resolve(geometry)?,
                t[2].resolve(geometry)?,
            ]);
        }
        Ok(Subcase { triangles })
    }
}

impl AddAssign<&Patch> for Patch {
    fn add_assign(&mut self, other: &Patch) {
        self.triangles.extend_from_slice(&other.triangles);
    }
}

impl Add<&Patch> for &Patch {
    type Output = Patch;

    fn add(self, other: &Patch) -> Patch {
        let mut out = self.clone();
        out += other;
        out
    }
}

impl Add<Patch> for Patch {
    type Output = Patch;

    fn add(mut self, other: Patch) -> Patch {
        self += &other;
        self
    }
}
