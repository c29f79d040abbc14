// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Whole-grid extraction with the lookup table.
//!
//! A [`ScalarGrid`] holds samples on a regular lattice, stored x-major: the
//! sample at `(x, y, z)` is `values[(x * ny + y) * nz + z]`, matching the
//! corner index `4x + 2y + z` of a single cube. Neighbouring cubes see the same
//! shared-face samples and decide their face tests identically, so the
//! extracted surface has no cracks.

use crate::errors::GridError;
use crate::geometry::{Vertex, NVERTICES};
use crate::table::LookupTable;
use tracing::debug;

/// A triangle in grid coordinates.
pub type Triangle = [[f64; 3]; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    dims: [usize; 3],
    values: Vec<f64>,
}

impl ScalarGrid {
    pub fn new(dims: [usize; 3], values: Vec<f64>) -> Result<Self, GridError> {
        let expected = dims.iter().product();
        if values.len() != expected {
            return Err(GridError::ShapeMismatch {
                dims,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { dims, values })
    }

    /// Sample `f` at every lattice point.
    pub fn from_fn(dims: [usize; 3], mut f: impl FnMut([usize; 3]) -> f64) -> Self {
        let mut values = Vec::with_capacity(dims.iter().product());
        for x in 0..dims[0] {
            for y in 0..dims[1] {
                for z in 0..dims[2] {
                    values.push(f([x, y, z]));
                }
            }
        }
        Self { dims, values }
    }

    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    pub fn get(&self, [x, y, z]: [usize; 3]) -> f64 {
        self.values[(x * self.dims[1] + y) * self.dims[2] + z]
    }

    /// Corner samples of the cube whose lowest corner is `origin`.
    pub fn cube(&self, origin: [usize; 3]) -> [f64; NVERTICES] {
        std::array::from_fn(|i| {
            let [dx, dy, dz] = Vertex::new(i as u8).point().map(usize::from);
            self.get([origin[0] + dx, origin[1] + dy, origin[2] + dz])
        })
    }
}

/// Extract the iso-surface `f = iso` from every cube of the grid.
pub fn marching_cubes(table: &LookupTable, grid: &ScalarGrid, iso: f64) -> Vec<Triangle> {
    let [nx, ny, nz] = grid.dims();
    let mut triangles = Vec::new();
    if nx < 2 || ny < 2 || nz < 2 {
        return triangles;
    }

    let mut active = 0usize;
    for x in 0..nx - 1 {
        for y in 0..ny - 1 {
            for z in 0..nz - 1 {
                let evaluation = table.evaluate(&grid.cube([x, y, z]), iso);
                if evaluation.triangles.is_empty() {
                    continue;
                }
                active += 1;
                let offset = [x, y, z].map(|c| c as f64);
                triangles.extend(
                    evaluation
                        .triangle_positions()
                        .into_iter()
                        .map(|t| t.map(|p| std::array::from_fn(|i| p[i] + offset[i]))),
                );
            }
        }
    }

    debug!(
        dims = ?grid.dims(),
        active,
        triangles = triangles.len(),
        "grid extracted"
    );
    triangles
}
