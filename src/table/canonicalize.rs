// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Map all 256 corner configurations onto the base cases.
//!
//! Cases are visited in catalog order. For each rotation, the case's canonical
//! corner set is carried by the inverse rotation to a raw configuration. The
//! first case to reach a configuration claims it together with its complement;
//! every later visit to a claimed configuration reveals a neutral rotation of
//! the case, possibly combined with a sign flip.

use crate::catalog::CaseDef;
use crate::errors::{TableError, TableResult};
use crate::geometry::{CornerSet, NBITSETS};
use crate::symmetry::SymmetryGroup;
use crate::table::{CasePtr, Neutral};
use tracing::debug;

/// Output of canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonicalization {
    /// One pointer per raw corner configuration.
    pub case_table: [CasePtr; NBITSETS],
    /// Neutral rotations per case, identity first, in discovery order.
    pub neutrals: Vec<Vec<Neutral>>,
}

pub fn canonicalize(group: &SymmetryGroup, cases: &[CaseDef]) -> TableResult<Canonicalization> {
    let mut table: [Option<CasePtr>; NBITSETS] = [None; NBITSETS];
    let mut neutrals = Vec::with_capacity(cases.len());

    for (case_id, case) in cases.iter().enumerate() {
        let mut neutral = vec![Neutral::IDENTITY];
        for (rotation_id, rotation) in group.iter() {
            let inverse = rotation.inverse();
            let image = inverse.apply_to_corners(case.corners);
            match table[image.bits() as usize] {
                Some(existing) => {
                    if existing.case != case_id {
                        return Err(TableError::CaseCollision {
                            bits: image.bits(),
                            existing: existing.case,
                            incoming: case_id,
                        });
                    }
                    let stabilizer = inverse.then(group.get(existing.rotation));
                    let id = group.index_of(&stabilizer).ok_or(TableError::NotInGroup {
                        first: rotation_id,
                        second: existing.rotation,
                    })?;
                    let found = Neutral {
                        rotation: id,
                        flip: existing.flip,
                    };
                    if !neutral.contains(&found) {
                        neutral.push(found);
                    }
                }
                None => {
                    table[image.bits() as usize] = Some(CasePtr {
                        case: case_id,
                        rotation: rotation_id,
                        flip: false,
                    });
                    table[image.complement().bits() as usize] = Some(CasePtr {
                        case: case_id,
                        rotation: rotation_id,
                        flip: true,
                    });
                }
            }
        }
        debug!(
            case = case_id,
            corners = %case.corners,
            neutral = neutral.len(),
            "case canonicalized"
        );
        neutrals.push(neutral);
    }

    Ok(Canonicalization {
        case_table: verify_coverage(&table)?,
        neutrals,
    })
}

/// Every configuration is covered, and complements are sign-flipped images of one case.
fn verify_coverage(table: &[Option<CasePtr>; NBITSETS]) -> TableResult<[CasePtr; NBITSETS]> {
    let mut out = [CasePtr::default(); NBITSETS];
    for (bits, slot) in out.iter_mut().enumerate() {
        let bits = bits as u8;
        let ptr = table[bits as usize].ok_or(TableError::UncoveredBitset { bits })?;
        let complement = CornerSet::from_bits(bits).complement().bits();
        let other = table[complement as usize].ok_or(TableError::UncoveredBitset { bits: complement })?;
        if other.case != ptr.case || other.flip == ptr.flip {
            return Err(TableError::ComplementMismatch { bits });
        }
        *slot = ptr;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::geometry::CubeGeometry;

    fn run() -> Canonicalization {
        let geometry = CubeGeometry::new();
        let group = SymmetryGroup::generate(&geometry).unwrap();
        let catalog = Catalog::build(&geometry).unwrap();
        canonicalize(&group, &catalog.cases).unwrap()
    }

    #[test]
    fn test_neutral_counts() {
        let counts: Vec<usize> = run().neutrals.iter().map(Vec::len).collect();
        assert_eq!(counts, vec![24, 3, 2, 2, 6, 1, 1, 3, 8, 6, 8, 4, 2, 24, 4]);
    }

    #[test]
    fn test_neutrals_start_with_identity() {
        for neutral in run().neutrals {
            assert_eq!(neutral[0], Neutral::IDENTITY);
        }
    }

    #[test]
    fn test_single_corner_neutrals() {
        let n = &run().neutrals[1];
        let ids: Vec<usize> = n.iter().map(|x| x.rotation).collect();
        assert_eq!(ids, vec![0, 16, 17]);
        assert!(n.iter().all(|x| !x.flip));
    }

    #[test]
    fn test_self_complementary_cases_have_flipped_neutrals() {
        let c = run();
        for case in 8..15 {
            assert!(c.neutrals[case].iter().any(|n| n.flip), "case {}", case);
        }
        for case in 0..8 {
            assert!(!c.neutrals[case].iter().any(|n| n.flip), "case {}", case);
        }
    }

    #[test]
    fn test_orbit_sizes() {
        let c = run();
        let mut sizes = [0usize; 15];
        for ptr in c.case_table.iter() {
            sizes[ptr.case] += 1;
        }
        assert_eq!(sizes, [2, 16, 24, 24, 8, 48, 48, 16, 6, 8, 6, 12, 24, 2, 12]);
        assert_eq!(sizes.iter().sum::<usize>(), NBITSETS);
    }

    #[test]
    fn test_collision_is_detected() {
        let geometry = CubeGeometry::new();
        let group = SymmetryGroup::generate(&geometry).unwrap();
        let mut cases = Catalog::build(&geometry).unwrap().cases;
        // Corner 7 alone is a rotation of case 1.
        cases[2].corners = CornerSet::from_bits(0b1000_0000);
        assert!(matches!(
            canonicalize(&group, &cases),
            Err(TableError::CaseCollision { existing: 1, incoming: 2, .. })
        ));
    }

    #[test]
    fn test_missing_case_is_detected() {
        let geometry = CubeGeometry::new();
        let group = SymmetryGroup::generate(&geometry).unwrap();
        let mut cases = Catalog::build(&geometry).unwrap().cases;
        cases.truncate(14);
        assert!(matches!(
            canonicalize(&group, &cases),
            Err(TableError::UncoveredBitset { .. })
        ));
    }
}
