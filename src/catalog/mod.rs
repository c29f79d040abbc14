// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The 15 hand-authored base cases.
//!
//! Each case names a canonical corner configuration, the ordered list of
//! disambiguation tests it needs, and triangulations for some of its test
//! outcomes. The lookup table completes the remaining outcomes by symmetry.
//!
//! ## Module Structure
//!
//! - `triangulation`: symbolic triangle patches built from corner pairs
//! - `cases`: the catalog data itself

pub mod cases;
pub mod triangulation;

use crate::errors::TableResult;
use crate::geometry::{Axis, CornerSet, CubeGeometry, FaceId, Point, Vertex, INTERIOR_SLOT};
use std::fmt;

pub use triangulation::{Anchor, Patch};

/// Index into the subcase pool.
pub type SubcaseId = usize;

/// A disambiguation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Test {
    /// Bilinear saddle test over one face.
    Face(FaceId),
    /// Test of the trilinear interpolant inside the cube.
    Interior,
}

impl Test {
    /// Face slot of the test: the face index, or 6 for the interior test.
    pub const fn slot(self) -> u8 {
        match self {
            Test::Face(f) => f.value(),
            Test::Interior => INTERIOR_SLOT,
        }
    }

    pub const fn from_slot(slot: u8) -> Option<Self> {
        if slot == INTERIOR_SLOT {
            return Some(Test::Interior);
        }
        match FaceId::try_new(slot) {
            Some(f) => Some(Test::Face(f)),
            None => None,
        }
    }
}

/// How a case decides its interior test, read in the case's canonical frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteriorProbe {
    /// Whether two corners are joined through the cube's interior by a path
    /// that stays on the same side of the iso-level as `from`.
    Connected { from: Vertex, to: Vertex },
    /// Sign of the bilinear saddle of the slices perpendicular to `axis`,
    /// taken where it is extremal over the slice parameter.
    Saddle { axis: Axis },
}

/// What a subcase slot resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubcaseRef {
    /// A triangulation in the subcase pool.
    Surface(SubcaseId),
    /// A test-outcome pattern no trilinear field produces. Carries a code
    /// (1, 2, ...) distinguishing the authored placeholders.
    Unrealizable(u8),
}

impl SubcaseRef {
    /// Signed id for emission: pool index, or the negated placeholder code.
    pub fn emitted_id(self) -> i32 {
        match self {
            SubcaseRef::Surface(id) => id as i32,
            SubcaseRef::Unrealizable(code) => -(code as i32),
        }
    }
}

impl fmt::Display for SubcaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubcaseRef::Surface(id) => write!(f, "#{}", id),
            SubcaseRef::Unrealizable(code) => write!(f, "unrealizable({})", code),
        }
    }
}

/// A concrete triangulation over the 13 point slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Subcase {
    pub triangles: Vec<[Point; 3]>,
}

impl Subcase {
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangles as point-slot triples.
    pub fn slots(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.triangles.iter().map(|t| t.map(Point::slot))
    }
}

/// One authored base case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDef {
    /// Canonical corner configuration.
    pub corners: CornerSet,
    /// Ordered disambiguation tests; bit `i` of an outcome is the result of `tests[i]`.
    pub tests: Vec<Test>,
    /// Present exactly when `tests` contains [`Test::Interior`].
    pub probe: Option<InteriorProbe>,
    /// Authored `(outcome, subcase)` pairs, in resolution order.
    pub authored: Vec<(u32, SubcaseRef)>,
}

impl CaseDef {
    /// Number of distinct test outcomes.
    pub fn outcome_count(&self) -> usize {
        1 << self.tests.len()
    }

    /// Position of a test slot in the test list.
    pub fn test_position(&self, slot: u8) -> Option<usize> {
        self.tests.iter().position(|t| t.slot() == slot)
    }
}

/// The authored cases and the subcase pool they reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub cases: Vec<CaseDef>,
    pub subcases: Vec<Subcase>,
}

impl Catalog {
    /// Resolve the symbolic catalog against the cube geometry.
    pub fn build(geometry: &CubeGeometry) -> TableResult<Self> {
        cases::author(geometry)
    }
}
