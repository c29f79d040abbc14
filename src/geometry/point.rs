// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triangle corner positions.

use crate::geometry::constants::{CENTER_SLOT, NPOINT_SLOTS};
use crate::geometry::EdgeId;

/// A point a triangulation may use: an edge intersection or the cube center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Point {
    Edge(EdgeId),
    Center,
}

impl Point {
    /// Point slot index: the edge index for edge points, 12 for the center.
    pub const fn slot(self) -> u8 {
        match self {
            Point::Edge(e) => e.value(),
            Point::Center => CENTER_SLOT,
        }
    }

    pub const fn from_slot(slot: u8) -> Option<Self> {
        if slot == CENTER_SLOT {
            Some(Point::Center)
        } else {
            match EdgeId::try_new(slot) {
                Some(e) => Some(Point::Edge(e)),
                None => None,
            }
        }
    }

    /// All point slots in index order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..NPOINT_SLOTS as u8).filter_map(Point::from_slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_round_trip() {
        for p in Point::all() {
            assert_eq!(Point::from_slot(p.slot()), Some(p));
        }
        assert_eq!(Point::all().count(), NPOINT_SLOTS);
        assert_eq!(Point::from_slot(13), None);
    }

    #[test]
    fn test_center_slot() {
        assert_eq!(Point::Center.slot(), 12);
        assert_eq!(Point::Edge(EdgeId::new(4)).slot(), 4);
    }
}
