// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for cube geometry and the lookup table.
//!
//! All table capacities derive from the unit cube and from the authored
//! case catalog. They are fixed: the emitted table has the same layout for
//! every build.

/// Number of cube corners.
pub const NVERTICES: usize = 8;

/// Number of cube edges.
pub const NEDGES: usize = 12;

/// Number of cube faces.
pub const NFACES: usize = 6;

/// Face slots seen by a rotation: the 6 faces plus the interior pseudo-face.
pub const NFACE_SLOTS: usize = NFACES + 1;

/// Slot of the interior pseudo-face. Every rotation fixes it.
pub const INTERIOR_SLOT: u8 = NFACES as u8;

/// Point slots available to a triangulation: one per edge plus the cube center.
pub const NPOINT_SLOTS: usize = NEDGES + 1;

/// Point slot of the cube center.
pub const CENTER_SLOT: u8 = NEDGES as u8;

/// Number of proper rotations of the cube.
///
/// 1 identity + 3 face axes × 3 angles + 6 edge axes × 1 angle + 4 body
/// diagonals × 2 angles.
pub const NROTATIONS: usize = 1 + 3 * 3 + 6 + 4 * 2;

/// Number of canonical base cases.
pub const NCASES: usize = 15;

/// Capacity of the subcase pool.
pub const MAX_SUBCASES: usize = 33;

/// Maximum number of disambiguation tests in one case (6 faces + interior).
pub const MAX_TESTS: usize = NFACE_SLOTS;

/// Capacity of a case's subcase slot array (2^MAX_TESTS).
pub const MAX_SUBCASE_SLOTS: usize = 1 << MAX_TESTS;

/// Maximum number of triangles in one subcase.
pub const MAX_TRIANGLES: usize = 12;

/// Number of corner sign configurations.
pub const NBITSETS: usize = 1 << NVERTICES;

/// Mask for complementing an 8-bit corner set.
pub const CORNER_MASK: u8 = u8::MAX;

const _: () = assert!(NROTATIONS == 24, "the cube has 24 proper rotations");
const _: () = assert!(NBITSETS == 256);
const _: () = assert!(
    NVERTICES <= u8::BITS as usize,
    "corner sets are stored in a u8"
);
const _: () = assert!(
    MAX_TESTS < u32::BITS as usize,
    "test outcomes are stored in a u32"
);
const _: () = assert!(NPOINT_SLOTS <= u8::MAX as usize);
