// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The assembled Marching Cubes 33 lookup table.
//!
//! Building the table runs three stages in order:
//!
//! 1. generate the rotation group from the cube geometry
//! 2. [`canonicalize`](canonicalize::canonicalize) every corner configuration onto a base case
//! 3. [`resolve`](resolve::resolve_subcases) every test outcome of every case onto a subcase
//!
//! The result is immutable and is what both the evaluator and the source
//! emitter read.

pub mod canonicalize;
pub mod resolve;

use crate::catalog::{Catalog, InteriorProbe, Subcase, SubcaseRef, Test};
use crate::errors::TableResult;
use crate::geometry::{CornerSet, CubeGeometry, NBITSETS};
use crate::symmetry::{RotationId, SymmetryGroup};
use tracing::{debug, info};

/// Where a raw corner configuration lands among the base cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CasePtr {
    pub case: usize,
    /// Rotation carrying the raw corners onto the case's canonical corners.
    pub rotation: RotationId,
    /// The raw inside set is the complement of the rotated canonical set.
    pub flip: bool,
}

/// Where a test outcome of a case lands in the subcase pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubcasePtr {
    pub subcase: SubcaseRef,
    /// Rotation relating the authored outcome to this slot.
    pub rotation: RotationId,
    pub flip: bool,
}

/// A rotation that maps a case onto itself, possibly with a sign flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neutral {
    pub rotation: RotationId,
    pub flip: bool,
}

impl Neutral {
    pub const IDENTITY: Neutral = Neutral {
        rotation: 0,
        flip: false,
    };
}

/// One base case with its symmetry-completed subcase slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub id: usize,
    pub corners: CornerSet,
    pub tests: Vec<Test>,
    pub probe: Option<InteriorProbe>,
    /// Neutral rotations, identity first.
    pub neutral: Vec<Neutral>,
    /// One pointer per test outcome; index bit `i` is the result of `tests[i]`.
    pub subcases: Vec<SubcasePtr>,
}

/// The complete table.
#[derive(Debug, Clone)]
pub struct LookupTable {
    geometry: CubeGeometry,
    group: SymmetryGroup,
    case_table: [CasePtr; NBITSETS],
    cases: Vec<Case>,
    subcases: Vec<Subcase>,
}

impl LookupTable {
    /// Build the table from the cube geometry and the authored catalog.
    pub fn build() -> TableResult<Self> {
        info!("building lookup table");
        let geometry = CubeGeometry::new();
        let group = SymmetryGroup::generate(&geometry)?;
        let catalog = Catalog::build(&geometry)?;
        Self::from_parts(geometry, group, catalog)
    }

    /// Build the table from an explicit catalog.
    pub fn from_parts(
        geometry: CubeGeometry,
        group: SymmetryGroup,
        catalog: Catalog,
    ) -> TableResult<Self> {
        let canonical = canonicalize::canonicalize(&group, &catalog.cases)?;

        let mut cases = Vec::with_capacity(catalog.cases.len());
        for (id, (def, neutral)) in catalog
            .cases
            .into_iter()
            .zip(canonical.neutrals)
            .enumerate()
        {
            let subcases = resolve::resolve_subcases(&group, id, &def, &neutral)?;
            debug!(
                case = id,
                neutral = neutral.len(),
                slots = subcases.len(),
                "case resolved"
            );
            cases.push(Case {
                id,
                corners: def.corners,
                tests: def.tests,
                probe: def.probe,
                neutral,
                subcases,
            });
        }

        let slots: usize = cases.iter().map(|c| c.subcases.len()).sum();
        info!(
            rotations = group.len(),
            cases = cases.len(),
            subcases = catalog.subcases.len(),
            slots,
            "lookup table built"
        );

        Ok(Self {
            geometry,
            group,
            case_table: canonical.case_table,
            cases,
            subcases: catalog.subcases,
        })
    }

    /// Case pointer for a raw corner configuration.
    pub fn case_for(&self, corners: CornerSet) -> CasePtr {
        self.case_table[corners.bits() as usize]
    }

    pub fn case_table(&self) -> &[CasePtr; NBITSETS] {
        &self.case_table
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn case(&self, id: usize) -> &Case {
        &self.cases[id]
    }

    pub fn subcases(&self) -> &[Subcase] {
        &self.subcases
    }

    /// The triangulation a subcase pointer names, if it is realizable.
    pub fn subcase(&self, subcase: SubcaseRef) -> Option<&Subcase> {
        match subcase {
            SubcaseRef::Surface(id) => self.subcases.get(id),
            SubcaseRef::Unrealizable(_) => None,
        }
    }

    pub fn geometry(&self) -> &CubeGeometry {
        &self.geometry
    }

    pub fn group(&self) -> &SymmetryGroup {
        &self.group
    }
}
