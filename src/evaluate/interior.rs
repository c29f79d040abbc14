// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interior tests on the trilinear interpolant.
//!
//! Both probes look at the cube as a stack of slices perpendicular to one
//! axis. Along the slice parameter `t` each slice corner varies linearly, so
//! the slice's bilinear saddle `A·C − B·D` is quadratic in `t`.
//!
//! Corner sides are taken from the corner set, not from value signs, so a
//! value on the iso-level counts as below in every test.

use crate::catalog::InteriorProbe;
use crate::geometry::{Axis, CornerSet, CubeGeometry, FaceId, Vertex, NVERTICES};

const ROOT_EPSILON: f64 = 1e-15;

/// Decide a case's interior test on corner values carried into the case's
/// frame, with `above` the corners strictly above the iso-level there.
pub fn probe(
    geometry: &CubeGeometry,
    probe: &InteriorProbe,
    values: &[f64; NVERTICES],
    above: CornerSet,
) -> bool {
    match *probe {
        InteriorProbe::Connected { from, to } => {
            connected(geometry, values, from, to, above.contains(from))
        }
        InteriorProbe::Saddle { axis } => slice_saddle(geometry, values, axis, above),
    }
}

/// Corner values of the slice at `t = 0` and their rates of change along `axis`.
struct Slices {
    cycle: [Vertex; 4],
    low: [f64; 4],
    delta: [f64; 4],
}

impl Slices {
    fn new(geometry: &CubeGeometry, values: &[f64; NVERTICES], axis: Axis) -> Self {
        let cycle = geometry.face(FaceId::of(axis, 0)).corners;
        let low = cycle.map(|v| values[v.as_usize()]);
        let high = cycle.map(|v| values[v.neighbour(axis).as_usize()]);
        let delta = std::array::from_fn(|i| high[i] - low[i]);
        Self { cycle, low, delta }
    }

    fn at(&self, t: f64) -> [f64; 4] {
        std::array::from_fn(|i| self.low[i] + self.delta[i] * t)
    }

    /// Coefficients of the saddle `A·C − B·D` as a quadratic in `t`.
    fn saddle_quadratic(&self) -> [f64; 3] {
        let [a0, b0, c0, d0] = self.low;
        let [da, db, dc, dd] = self.delta;
        [
            da * dc - db * dd,
            a0 * dc + c0 * da - b0 * dd - d0 * db,
            a0 * c0 - b0 * d0,
        ]
    }
}

/// The slice saddle at its extremum over the slice parameter, clamped to the cube.
///
/// A zero saddle sits on the level, so it joins the below corners: the test
/// then holds exactly when the slice's first corner is below.
fn slice_saddle(
    geometry: &CubeGeometry,
    values: &[f64; NVERTICES],
    axis: Axis,
    above: CornerSet,
) -> bool {
    let slices = Slices::new(geometry, values, axis);
    let [alpha, beta, _] = slices.saddle_quadratic();
    let t = if alpha != 0.0 {
        (-beta / (2.0 * alpha)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let [a, b, c, d] = slices.at(t);
    let saddle = a * c - b * d;
    saddle > 0.0 || (saddle == 0.0 && !above.contains(slices.cycle[0]))
}

fn linear_root(v0: f64, v1: f64) -> Option<f64> {
    if (v0 > 0.0) != (v1 > 0.0) && v0 != v1 {
        let t = v0 / (v0 - v1);
        (t > 0.0 && t < 1.0).then_some(t)
    } else {
        None
    }
}

fn quadratic_roots([a, b, c]: [f64; 3]) -> Vec<f64> {
    let inside = |t: &f64| *t > 0.0 && *t < 1.0;
    if a.abs() < ROOT_EPSILON {
        if b.abs() < ROOT_EPSILON {
            return Vec::new();
        }
        return Some(-c / b).into_iter().filter(inside).collect();
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    let s = discriminant.sqrt();
    [(-b - s) / (2.0 * a), (-b + s) / (2.0 * a)]
        .into_iter()
        .filter(inside)
        .collect()
}

struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        self.parent[ra] = rb;
    }
}

/// Whether corners `from` and `to` lie in one connected region of the
/// interpolant: the region `f > 0` when `above`, else `f ≤ 0`.
///
/// The cube is swept along x. Between consecutive breakpoints (sign changes of
/// a slice corner, roots of the slice saddle) the connectivity of each slice is
/// constant, so one sample per interval decides it.
fn connected(
    geometry: &CubeGeometry,
    values: &[f64; NVERTICES],
    from: Vertex,
    to: Vertex,
    above: bool,
) -> bool {
    let slices = Slices::new(geometry, values, Axis::X);
    let high = slices.at(1.0);

    let mut breaks = vec![0.0, 1.0];
    breaks.extend((0..4).filter_map(|i| linear_root(slices.low[i], high[i])));
    breaks.extend(quadratic_roots(slices.saddle_quadratic()));
    breaks.sort_by(f64::total_cmp);
    breaks.dedup();

    let intervals = breaks.len() - 1;
    let node = |interval: usize, corner: usize| 4 * interval + corner;
    let mut sets = DisjointSets::new(4 * intervals);
    let mut previous: Option<[bool; 4]> = None;

    for (k, pair) in breaks.windows(2).enumerate() {
        let vals = slices.at(0.5 * (pair[0] + pair[1]));
        let inside = vals.map(|v| (v > 0.0) == above);
        for i in 0..4 {
            let j = (i + 1) % 4;
            if inside[i] && inside[j] {
                sets.union(node(k, i), node(k, j));
            }
        }
        for (x, y, o1, o2) in [(0, 2, 1, 3), (1, 3, 0, 2)] {
            let diagonal = inside[x] && inside[y] && !inside[o1] && !inside[o2];
            let saddle = vals[x] * vals[y] - vals[o1] * vals[o2];
            // A zero saddle belongs to the region below the level.
            let joined = if above { saddle > 0.0 } else { saddle >= 0.0 };
            if diagonal && joined {
                sets.union(node(k, x), node(k, y));
            }
        }
        if let Some(prev) = previous {
            for i in 0..4 {
                if inside[i] && prev[i] {
                    sets.union(node(k - 1, i), node(k, i));
                }
            }
        }
        previous = Some(inside);
    }

    let locate = |v: Vertex| -> Option<usize> {
        let base = Vertex::new(v.value() & !Axis::X.bit());
        let position = slices.cycle.iter().position(|&c| c == base)?;
        let interval = if v.coordinate(Axis::X) == 0 { 0 } else { intervals - 1 };
        Some(node(interval, position))
    };
    match (locate(from), locate(to)) {
        (Some(a), Some(b)) => sets.find(a) == sets.find(b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal(inner: f64) -> [f64; NVERTICES] {
        [1.0, inner, inner, inner, inner, inner, inner, 1.0]
    }

    fn decide(g: &CubeGeometry, p: &InteriorProbe, values: &[f64; NVERTICES]) -> bool {
        probe(g, p, values, CornerSet::above(values, 0.0))
    }

    fn joins(from: u8, to: u8) -> InteriorProbe {
        InteriorProbe::Connected {
            from: Vertex::new(from),
            to: Vertex::new(to),
        }
    }

    #[test]
    fn test_diagonal_corners_join_through_a_tube() {
        let g = CubeGeometry::new();
        let p = joins(0, 7);
        assert!(decide(&g, &p, &diagonal(-0.1)));
        assert!(!decide(&g, &p, &diagonal(-0.5)));
    }

    #[test]
    fn test_outside_region_connects_around_separated_corners() {
        let g = CubeGeometry::new();
        assert!(decide(&g, &joins(1, 6), &diagonal(-0.5)));
    }

    #[test]
    fn test_corners_on_the_level_are_below() {
        let g = CubeGeometry::new();
        // Along the diagonal the field is (1 − s)³ + s³ > 0.
        assert!(decide(&g, &joins(0, 7), &diagonal(0.0)));
        // Joined above means separated below.
        assert!(!decide(&g, &joins(1, 6), &diagonal(0.0)));
    }

    #[test]
    fn test_corners_of_one_sign_region() {
        let g = CubeGeometry::new();
        let values = [1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0];
        assert!(connected(&g, &values, Vertex::new(0), Vertex::new(5), true));
        assert!(!connected(&g, &values, Vertex::new(0), Vertex::new(2), true));
        assert!(connected(&g, &values, Vertex::new(2), Vertex::new(7), false));
    }

    #[test]
    fn test_slice_saddle_sign() {
        let g = CubeGeometry::new();
        let saddle = |values: &[f64; NVERTICES]| {
            slice_saddle(&g, values, Axis::X, CornerSet::above(values, 0.0))
        };
        // Corners 0 and 3 dominate every x slice.
        let strong = [1.0, -0.2, -0.2, 1.0, 1.0, -0.2, -0.2, 1.0];
        assert!(saddle(&strong));
        let weak = [0.2, -1.0, -1.0, 0.2, 0.2, -1.0, -1.0, 0.2];
        assert!(!saddle(&weak));
    }

    #[test]
    fn test_slice_saddle_tie_joins_the_below_pair() {
        let g = CubeGeometry::new();
        let balanced = [1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0];
        let above = CornerSet::above(&balanced, 0.0);
        assert!(!slice_saddle(&g, &balanced, Axis::X, above));
        let negated = balanced.map(|v| -v);
        let above = CornerSet::above(&negated, 0.0);
        assert!(slice_saddle(&g, &negated, Axis::X, above));
    }

    #[test]
    fn test_roots() {
        assert_eq!(linear_root(1.0, -3.0), Some(0.25));
        assert_eq!(linear_root(1.0, 2.0), None);
        // (t - 0.25)(t - 0.5)
        let roots = quadratic_roots([1.0, -0.75, 0.125]);
        assert_eq!(roots, vec![0.25, 0.5]);
        assert!(quadratic_roots([0.0, 0.0, 1.0]).is_empty());
        assert_eq!(quadratic_roots([0.0, 2.0, -1.0]), vec![0.5]);
    }

    #[test]
    fn test_disjoint_sets() {
        let mut s = DisjointSets::new(4);
        s.union(0, 1);
        s.union(2, 3);
        assert_eq!(s.find(0), s.find(1));
        assert_ne!(s.find(1), s.find(2));
        s.union(1, 3);
        assert_eq!(s.find(0), s.find(2));
    }
}
