// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The rotation symmetry of the cube.
//!
//! ## Module Structure
//!
//! - `permutation`: permute/invert/compose over index arrays and bitsets
//! - `rotation`: one rotation as coupled vertex, edge and face permutations
//! - `group`: the 24 rotations derived from explicit axis/angle pairs

pub mod group;
pub mod permutation;
pub mod rotation;

pub use group::{rotation_generators, RotationId, SymmetryGroup};
pub use permutation::{compose, invert, permute, permute_bits};
pub use rotation::{axis_angle, Rotation};
