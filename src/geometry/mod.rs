// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the unit cube.
//!
//! This module contains type-safe representations of the cube's primitives:
//! - Vertex: corners 0..8, index `4x + 2y + z`
//! - CornerSet: bitset of corners (a sign configuration)
//! - Edge: the 12 edges with their endpoints and varying axis
//! - Face: the 6 faces with corners in cyclic order
//! - Point: an edge intersection or the cube center
//! - CubeGeometry: the incidence structure tying them together

pub mod axis;
pub mod constants;
pub mod corner_set;
pub mod cube;
pub mod edge;
pub mod face;
pub mod point;
pub mod vertex;

// Re-export for convenience
pub use axis::Axis;
pub use constants::*;
pub use corner_set::CornerSet;
pub use cube::CubeGeometry;
pub use edge::{EdgeDef, EdgeId};
pub use face::{FaceDef, FaceId};
pub use point::Point;
pub use vertex::Vertex;
