// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator for the Marching Cubes 33 lookup table.
//!
//! Marching Cubes 33 extends classic marching cubes with face and interior
//! tests that resolve the ambiguous sign configurations, so that neighbouring
//! cubes agree on their shared faces and the extracted surface matches the
//! topology of the trilinear interpolant.
//!
//! # Architecture
//!
//! The implementation has two tiers, like any table-driven extractor:
//!
//! ## Tier 1: Generation (once)
//!
//! - `geometry`: vertices, edges and faces of the unit cube and their incidences
//! - `symmetry`: the 24 proper rotations as coupled vertex/edge/face permutations
//! - `catalog`: the 15 hand-authored base cases with their tests and subcases
//! - `table`: canonicalization of all 256 corner configurations and
//!   symmetry completion of every test outcome
//!
//! Every stage checks its own invariants and returns a [`TableError`] on the
//! first defect.
//!
//! ## Tier 2: Queries (per cube)
//!
//! - `evaluate`: triangulate one cube from its 8 corner samples
//! - `grid`: walk a regular grid of samples cube by cube
//!
//! The finished [`LookupTable`] is immutable; queries cannot fail.
//!
//! ## Emission
//!
//! `emit` renders the finished table as C++ source against a hand-written
//! schema, for use by native builds.
//!
//! # References
//!
//! - Chernyaev, E. V. (1995). "Marching Cubes 33: Construction of Topologically
//!   Correct Isosurfaces." CERN Report CN/95-17.
//! - Lewiner, T. et al. (2003). "Efficient implementation of Marching Cubes'
//!   cases with topological guarantees." Journal of Graphics Tools 8(2).

pub mod catalog;
pub mod emit;
pub mod errors;
pub mod evaluate;
pub mod geometry;
pub mod grid;
pub mod symmetry;
pub mod table;

// Re-export commonly used types
pub use catalog::{Catalog, SubcaseRef};
pub use errors::{EmitError, GridError, TableError, TableResult};
pub use evaluate::Evaluation;
pub use geometry::{CornerSet, CubeGeometry};
pub use grid::{marching_cubes, ScalarGrid};
pub use symmetry::SymmetryGroup;
pub use table::LookupTable;
