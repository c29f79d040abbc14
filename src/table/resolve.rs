// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Complete a case's subcase slots by symmetry.
//!
//! Authored outcomes are pushed through every neutral rotation of their case.
//! A neutral rotation permutes the case's tests among themselves, and so
//! permutes the bits of an outcome; a sign flip also negates every test. The
//! first authored subcase to reach a slot keeps it.

use crate::catalog::CaseDef;
use crate::errors::{TableError, TableResult};
use crate::symmetry::{permute_bits, SymmetryGroup};
use crate::table::{Neutral, SubcasePtr};
use tracing::trace;

/// Where each test goes under a neutral rotation, as positions in the test list.
fn test_permutation(
    group: &SymmetryGroup,
    case_id: usize,
    case: &CaseDef,
    neutral: &Neutral,
) -> TableResult<Vec<u8>> {
    let rotation = group.get(neutral.rotation);
    case.tests
        .iter()
        .map(|test| {
            let image = rotation.map_face_slot(test.slot());
            case.test_position(image)
                .map(|p| p as u8)
                .ok_or(TableError::TestNotPreserved {
                    case: case_id,
                    rotation: neutral.rotation,
                    slot: test.slot(),
                })
        })
        .collect()
}

/// One pointer per test outcome of `case`.
pub fn resolve_subcases(
    group: &SymmetryGroup,
    case_id: usize,
    case: &CaseDef,
    neutral: &[Neutral],
) -> TableResult<Vec<SubcasePtr>> {
    let mask = (case.outcome_count() - 1) as u32;
    let perms = neutral
        .iter()
        .map(|n| test_permutation(group, case_id, case, n))
        .collect::<TableResult<Vec<_>>>()?;

    let mut slots: Vec<Option<SubcasePtr>> = vec![None; case.outcome_count()];
    for &(outcome, subcase) in &case.authored {
        for (n, perm) in neutral.iter().zip(&perms) {
            let mut image = permute_bits(outcome, perm);
            if n.flip {
                image = !image & mask;
            }
            let slot = &mut slots[image as usize];
            if slot.is_none() {
                trace!(case = case_id, outcome, image, rotation = n.rotation, flip = n.flip, %subcase, "slot filled");
                *slot = Some(SubcasePtr {
                    subcase,
                    rotation: n.rotation,
                    flip: n.flip,
                });
            }
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(outcome, slot)| {
            slot.ok_or(TableError::UncoveredSubcase {
                case: case_id,
                outcome: outcome as u32,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, SubcaseRef, Test};
    use crate::geometry::{CubeGeometry, FaceId};
    use crate::table::canonicalize::canonicalize;

    struct Fixture {
        group: SymmetryGroup,
        catalog: Catalog,
        neutrals: Vec<Vec<Neutral>>,
    }

    fn fixture() -> Fixture {
        let geometry = CubeGeometry::new();
        let group = SymmetryGroup::generate(&geometry).unwrap();
        let catalog = Catalog::build(&geometry).unwrap();
        let neutrals = canonicalize(&group, &catalog.cases).unwrap().neutrals;
        Fixture {
            group,
            catalog,
            neutrals,
        }
    }

    fn resolve(f: &Fixture, case: usize) -> Vec<SubcasePtr> {
        resolve_subcases(&f.group, case, &f.catalog.cases[case], &f.neutrals[case]).unwrap()
    }

    fn ptr(id: usize, rotation: usize, flip: bool) -> SubcasePtr {
        SubcasePtr {
            subcase: SubcaseRef::Surface(id),
            rotation,
            flip,
        }
    }

    #[test]
    fn test_slot_counts() {
        let f = fixture();
        let counts: Vec<usize> = (0..15).map(|c| resolve(&f, c).len()).collect();
        assert_eq!(counts, vec![1, 1, 1, 2, 2, 1, 4, 16, 1, 1, 8, 1, 4, 128, 1]);
    }

    #[test]
    fn test_case_6_fills_the_symmetric_outcome() {
        let f = fixture();
        let slots: Vec<SubcaseRef> = resolve(&f, 6).iter().map(|p| p.subcase).collect();
        assert_eq!(
            slots,
            vec![
                SubcaseRef::Surface(9),
                SubcaseRef::Surface(10),
                SubcaseRef::Surface(8),
                SubcaseRef::Surface(8)
            ]
        );
    }

    #[test]
    fn test_case_10_uses_flipped_images() {
        let f = fixture();
        let slots = resolve(&f, 10);
        assert_eq!(slots[0], ptr(18, 0, false));
        assert_eq!(slots[3], ptr(20, 5, true));
        assert_eq!(slots[7], ptr(18, 3, true));
    }

    #[test]
    fn test_case_12_outcome_3_is_shadowed() {
        let f = fixture();
        let slots = resolve(&f, 12);
        assert_eq!(slots[3], ptr(22, 11, true));
    }

    #[test]
    fn test_case_13_keeps_placeholders() {
        let f = fixture();
        let slots = resolve(&f, 13);
        assert_eq!(slots[0], ptr(26, 0, false));
        assert_eq!(slots[3].subcase, SubcaseRef::Unrealizable(1));
        assert!(slots.iter().any(|p| p.subcase == SubcaseRef::Unrealizable(3)));
    }

    #[test]
    fn test_unpreserved_test_is_rejected() {
        let f = fixture();
        let mut case = f.catalog.cases[3].clone();
        // Rotation 5 is neutral for case 3 but moves the x = 0 face away.
        case.tests = vec![Test::Face(FaceId::new(0))];
        let err = resolve_subcases(&f.group, 3, &case, &f.neutrals[3]);
        assert!(matches!(err, Err(TableError::TestNotPreserved { case: 3, .. })));
    }

    #[test]
    fn test_missing_outcome_is_rejected() {
        let f = fixture();
        let mut case = f.catalog.cases[3].clone();
        case.authored.truncate(1);
        let err = resolve_subcases(&f.group, 3, &case, &f.neutrals[3]);
        assert_eq!(err, Err(TableError::UncoveredSubcase { case: 3, outcome: 1 }));
    }
}
