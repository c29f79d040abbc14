// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The 24-element rotation group of the cube.

use crate::errors::{TableError, TableResult};
use crate::geometry::{CubeGeometry, NROTATIONS};
use crate::symmetry::rotation::{axis_angle, Rotation};
use nalgebra::Vector3;
use tracing::debug;

/// Index of a rotation within [`SymmetryGroup`].
pub type RotationId = usize;

/// The axis/angle pairs generating the group, in rotation-id order.
///
/// - 0: identity
/// - 1–9: face axes x, y, z at 90°, 180°, 270°
/// - 10–15: 180° about the six edge-midpoint axes
/// - 16–23: 120° and 240° about the four body diagonals
pub fn rotation_generators() -> Vec<(Vector3<f64>, f64)> {
    let mut out = vec![(Vector3::x(), 0.0)];
    for axis in [Vector3::x(), Vector3::y(), Vector3::z()] {
        for degrees in [90.0, 180.0, 270.0] {
            out.push((axis, degrees));
        }
    }
    for axis in [
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(0.0, 1.0, 1.0),
        Vector3::new(1.0, 0.0, 1.0),
        Vector3::new(-1.0, 1.0, 0.0),
        Vector3::new(0.0, -1.0, 1.0),
        Vector3::new(-1.0, 0.0, 1.0),
    ] {
        out.push((axis, 180.0));
    }
    for axis in [
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, 1.0, -1.0),
        Vector3::new(1.0, -1.0, 1.0),
        Vector3::new(-1.0, 1.0, 1.0),
    ] {
        for degrees in [120.0, 240.0] {
            out.push((axis, degrees));
        }
    }
    out
}

/// The cube's proper rotations, indexed by [`RotationId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetryGroup {
    rotations: Vec<Rotation>,
}

impl SymmetryGroup {
    /// Build all 24 rotations and check they form a group.
    pub fn generate(geometry: &CubeGeometry) -> TableResult<Self> {
        let generators = rotation_generators();
        debug_assert_eq!(generators.len(), NROTATIONS);

        let mut rotations: Vec<Rotation> = Vec::with_capacity(NROTATIONS);
        for (id, (axis, degrees)) in generators.into_iter().enumerate() {
            let rotation = Rotation::from_matrix(geometry, &axis_angle(axis, degrees), id)?;
            if rotations.contains(&rotation) {
                return Err(TableError::DegenerateRotation {
                    rotation: id,
                    reason: "duplicates an earlier rotation",
                });
            }
            rotations.push(rotation);
        }

        let group = Self { rotations };
        group.verify_closure()?;
        debug!(rotations = group.len(), "rotation group generated");
        Ok(group)
    }

    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `id` is not a rotation id.
    pub fn get(&self, id: RotationId) -> &Rotation {
        &self.rotations[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RotationId, &Rotation)> {
        self.rotations.iter().enumerate()
    }

    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    pub fn index_of(&self, rotation: &Rotation) -> Option<RotationId> {
        self.rotations.iter().position(|r| r == rotation)
    }

    /// Id of `first` followed by `second`.
    pub fn compose_ids(&self, first: RotationId, second: RotationId) -> TableResult<RotationId> {
        let composed = self.get(first).then(self.get(second));
        self.index_of(&composed)
            .ok_or(TableError::NotInGroup { first, second })
    }

    pub fn inverse_id(&self, id: RotationId) -> TableResult<RotationId> {
        self.index_of(&self.get(id).inverse())
            .ok_or(TableError::NotInGroup {
                first: id,
                second: id,
            })
    }

    /// Check closure under composition, the identity and inverses.
    pub fn verify_closure(&self) -> TableResult<()> {
        if self.index_of(&Rotation::identity()).is_none() {
            return Err(TableError::NotInGroup {
                first: 0,
                second: 0,
            });
        }
        for first in 0..self.len() {
            self.inverse_id(first)?;
            for second in 0..self.len() {
                self.compose_ids(first, second)?;
            }
        }
        Ok(())
    }
}
