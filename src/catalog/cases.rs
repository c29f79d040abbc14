// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Marching Cubes 33 case catalog.
//!
//! Cases are authored in the classical order 0–14. The order fixes case ids,
//! subcase ids and which symmetry image fills a slot first, so it must not
//! change. Subcases are numbered in the order they are added.
//!
//! Points are written as `e(a, b)`, the edge between corners `a` and `b`.
//! Test outcomes are written as `bits(&[i, j])`: tests `i` and `j` passed.

use crate::catalog::triangulation::{Anchor, Patch};
use crate::catalog::{CaseDef, Catalog, InteriorProbe, Subcase, SubcaseRef, Test};
use crate::errors::TableResult;
use crate::geometry::{Axis, CornerSet, CubeGeometry, FaceId, Vertex, NFACES};

const fn e(a: u8, b: u8) -> Anchor {
    Anchor::Edge(a, b)
}

/// Outcome bit vector with the listed tests passed.
fn bits(tests: &[u32]) -> u32 {
    tests.iter().fold(0, |acc, &t| acc | (1 << t))
}

fn corners(list: &[u8]) -> CornerSet {
    CornerSet::from_vertices(&list.iter().map(|&c| Vertex::new(c)).collect::<Vec<_>>())
}

fn connected(from: u8, to: u8) -> Option<InteriorProbe> {
    Some(InteriorProbe::Connected {
        from: Vertex::new(from),
        to: Vertex::new(to),
    })
}

struct CatalogBuilder<'a> {
    geometry: &'a CubeGeometry,
    cases: Vec<CaseDef>,
    subcases: Vec<Subcase>,
}

impl<'a> CatalogBuilder<'a> {
    fn new(geometry: &'a CubeGeometry) -> Self {
        Self {
            geometry,
            cases: Vec::new(),
            subcases: Vec::new(),
        }
    }

    fn subcase(&mut self, patch: &Patch) -> TableResult<SubcaseRef> {
        self.subcases.push(patch.resolve(self.geometry)?);
        Ok(SubcaseRef::Surface(self.subcases.len() - 1))
    }

    fn face(&self, corners: &[u8]) -> TableResult<Test> {
        Ok(Test::Face(self.geometry.unique_face_containing_indices(corners)?))
    }

    fn case(
        &mut self,
        corner_list: &[u8],
        tests: Vec<Test>,
        probe: Option<InteriorProbe>,
        authored: Vec<(u32, SubcaseRef)>,
    ) {
        self.cases.push(CaseDef {
            corners: corners(corner_list),
            tests,
            probe,
            authored,
        });
    }

    /// A case with no tests and a single triangulation.
    fn simple(&mut self, corner_list: &[u8], patch: &Patch) -> TableResult<()> {
        let subcase = self.subcase(patch)?;
        self.case(corner_list, vec![], None, vec![(0, subcase)]);
        Ok(())
    }

    fn finish(self) -> Catalog {
        Catalog {
            cases: self.cases,
            subcases: self.subcases,
        }
    }
}

/// Build the catalog over the given geometry.
pub fn author(geometry: &CubeGeometry) -> TableResult<Catalog> {
    let mut b = CatalogBuilder::new(geometry);
    let corner = Patch::corner;

    // 0: everything outside.
    b.simple(&[], &Patch::empty())?;

    // 1: one corner.
    b.simple(&[0], &corner(0))?;

    // 2: one edge.
    b.simple(&[0, 1], &Patch::quad(e(0, 2), e(0, 4), e(1, 5), e(1, 3)))?;

    // 3: two corners across a face.
    let c3_separate = corner(0) + corner(5);
    let c3_joined = Patch::quad(e(0, 2), e(0, 4), e(4, 5), e(5, 7))
        + Patch::quad(e(5, 7), e(1, 5), e(0, 1), e(0, 2));
    let tests = vec![b.face(&[0, 1, 4, 5])?];
    let authored = vec![
        (0, b.subcase(&c3_separate)?),
        (1, b.subcase(&c3_joined)?),
    ];
    b.case(&[0, 5], tests, None, authored);

    // 4: two corners across the body diagonal.
    let authored = vec![
        (0, b.subcase(&(corner(0) + corner(7)))?),
        (1, b.subcase(&Patch::tube(&[e(0, 1), e(0, 2), e(0, 4)]))?),
    ];
    b.case(&[0, 7], vec![Test::Interior], connected(0, 7), authored);

    // 5: three corners on a face.
    let c5 = Patch::triangle(e(1, 5), e(3, 7), e(2, 6))
        + Patch::quad(e(0, 1), e(1, 5), e(2, 6), e(0, 2));
    b.simple(&[1, 2, 3], &c5)?;

    // 6: an edge plus the far corner.
    let mid = [
        e(1, 5),
        e(1, 3),
        e(0, 2),
        e(0, 4),
        e(7, 6),
        e(7, 3),
        e(7, 5),
    ];
    let c6_joined = Patch::new(&mid, &[[1, 2, 5], [2, 4, 5], [2, 3, 4], [3, 6, 4], [3, 0, 6]]);
    let c6_joined_ref = b.subcase(&c6_joined)?;
    let tests = vec![Test::Interior, b.face(&[1, 3, 5, 7])?];
    let authored = vec![
        (0, b.subcase(&Patch::new(&mid, &[[0, 1, 2], [0, 2, 3], [4, 5, 6]]))?),
        (
            1,
            b.subcase(&(&c6_joined + &Patch::quad(mid[1], mid[5], mid[6], mid[0])))?,
        ),
        (2, c6_joined_ref),
        (3, c6_joined_ref),
    ];
    b.case(&[7, 1, 0], tests, connected(7, 0), authored);

    // 7: three corners, pairwise across faces.
    let ring = Patch::new(
        &[e(2, 0), e(0, 4), e(4, 5), e(5, 7), e(7, 3), e(3, 2)],
        &[[0, 1, 2], [2, 3, 4], [4, 5, 0], [0, 2, 4]],
    );
    let prongs = [
        [e(1, 0), e(0, 2), e(0, 4)],
        [e(1, 5), e(5, 4), e(5, 7)],
        [e(1, 3), e(3, 7), e(3, 2)],
    ];
    let mut c7_tunnel = Patch::empty();
    for (t, n) in [(2, 0), (0, 1), (1, 2)].map(|(i, j)| (prongs[i], prongs[j])) {
        c7_tunnel += &Patch::triangle(t[0], t[1], t[2]);
        c7_tunnel += &Patch::quad(n[1], n[0], t[0], t[2]);
    }
    let c7_separate = &c3_separate + &corner(3);
    let c7_one_joined = &c3_joined + &corner(3);
    let c7_fan = Patch::fan(&[
        e(0, 2),
        e(0, 4),
        e(5, 4),
        e(7, 5),
        e(3, 7),
        e(2, 3),
        e(1, 3),
        e(1, 5),
        e(0, 1),
    ]);
    // Corner 1 is outside here.
    let c7_ring = &ring + &corner(1).reversed();
    let separate = b.subcase(&c7_separate)?;
    let one_joined = b.subcase(&c7_one_joined)?;
    let fan = b.subcase(&c7_fan)?;
    let tests = vec![
        b.face(&[0, 1, 4, 5])?,
        b.face(&[3, 1, 7, 5])?,
        b.face(&[0, 1, 2, 3])?,
        Test::Interior,
    ];
    let authored = vec![
        (bits(&[]), separate),
        (bits(&[3]), separate),
        (bits(&[0]), one_joined),
        (bits(&[0, 3]), one_joined),
        (bits(&[0, 1]), fan),
        (bits(&[0, 1, 3]), fan),
        (bits(&[0, 1, 2]), b.subcase(&c7_ring)?),
        (bits(&[0, 1, 2, 3]), b.subcase(&c7_tunnel)?),
    ];
    b.case(&[0, 3, 5], tests, connected(1, 6), authored);

    // 8: a whole face.
    b.simple(&[0, 1, 2, 3], &Patch::quad(e(0, 4), e(1, 5), e(3, 7), e(2, 6)))?;

    // 9: a corner with all three neighbours.
    let c9 = Patch::quad(e(1, 3), e(2, 3), e(2, 6), e(1, 5))
        + Patch::quad(e(2, 6), e(4, 6), e(4, 5), e(1, 5));
    b.simple(&[0, 1, 2, 4], &c9)?;

    // 10: two opposite edges.
    let lower = [e(0, 1), e(0, 2), e(4, 6), e(4, 5)];
    let upper = [e(3, 2), e(3, 1), e(7, 5), e(7, 6)];
    let mut c10_ring = lower[1..].to_vec();
    c10_ring.push(lower[0]);
    c10_ring.extend_from_slice(&upper[1..]);
    c10_ring.push(upper[0]);
    let tests = vec![Test::Interior, b.face(&[0, 1, 2, 3])?, b.face(&[4, 5, 6, 7])?];
    let authored = vec![
        (
            0,
            b.subcase(&(Patch::quad(lower[0], lower[1], lower[2], lower[3])
                + Patch::quad(upper[0], upper[1], upper[2], upper[3])))?,
        ),
        (1, b.subcase(&Patch::tube(&lower))?),
        (2, b.subcase(&Patch::fan(&c10_ring))?),
    ];
    b.case(&[0, 3, 4, 7], tests, Some(InteriorProbe::Saddle { axis: Axis::X }), authored);

    // 11: a path of four corners turning through all three axes.
    b.simple(
        &[0, 2, 3, 7],
        &Patch::new(
            &[e(0, 1), e(0, 4), e(2, 6), e(6, 7), e(7, 5), e(3, 1)],
            &[[2, 1, 0], [4, 3, 2], [0, 5, 4], [4, 2, 0]],
        ),
    )?;

    // 12: case 5 plus a corner touching two of its faces.
    let hexagon = [
        e(0, 4),
        e(4, 6),
        e(4, 5),
        e(5, 1),
        e(3, 7),
        e(2, 6),
        e(0, 2),
        e(0, 1),
    ];
    let tests = vec![b.face(&[1, 4])?, b.face(&[2, 4])?];
    let authored = vec![
        (0, b.subcase(&(&c5 + &corner(4)))?),
        (
            3,
            b.subcase(&Patch::new(
                &hexagon,
                &[
                    [0, 1, 6],
                    [0, 6, 7],
                    [0, 7, 2],
                    [2, 7, 3],
                    [2, 3, 4],
                    [2, 4, 1],
                    [1, 4, 5],
                    [1, 5, 6],
                ],
            ))?,
        ),
        (1, b.subcase(&Patch::fan(&hexagon))?),
        (
            2,
            b.subcase(&Patch::fan(&[
                e(0, 1),
                e(1, 5),
                e(3, 7),
                e(2, 6),
                e(4, 6),
                e(4, 5),
                e(0, 4),
                e(0, 2),
            ]))?,
        ),
    ];
    b.case(&[1, 2, 3, 4], tests, None, authored);

    // 13: four corners, no two adjacent. Case 7 plus corner 6 covers most of it.
    let separated = [
        (bits(&[]), b.subcase(&(&c7_separate + &corner(6)))?),
        (bits(&[2]), b.subcase(&(&c7_one_joined + &corner(6)))?),
        (bits(&[2, 5]), b.subcase(&(&c7_fan + &corner(6)))?),
        (
            bits(&[1, 4, 3]),
            b.subcase(&Patch::fan(&[
                e(0, 2),
                e(2, 6),
                e(3, 2),
                e(3, 1),
                e(7, 3),
                e(7, 6),
                e(5, 7),
                e(5, 1),
                e(4, 5),
                e(4, 6),
                e(0, 4),
                e(0, 1),
            ]))?,
        ),
        (bits(&[0, 1]), SubcaseRef::Unrealizable(1)),
        (bits(&[0, 1, 2]), SubcaseRef::Unrealizable(2)),
        (bits(&[3, 4, 5]), SubcaseRef::Unrealizable(3)),
    ];
    // The interior test does not matter for these.
    let mut authored = Vec::new();
    for (outcome, subcase) in separated {
        authored.push((outcome, subcase));
        authored.push((outcome | bits(&[6]), subcase));
    }
    authored.push((bits(&[0, 2, 5]), b.subcase(&(&c7_ring + &corner(6)))?));
    authored.push((bits(&[0, 2, 5, 6]), b.subcase(&(&c7_tunnel + &corner(6)))?));
    let mut tests: Vec<Test> = (0..NFACES as u8).map(|f| Test::Face(FaceId::new(f))).collect();
    tests.push(Test::Interior);
    b.case(&[0, 3, 5, 6], tests, connected(1, 7), authored);

    // 14: the mirror image of 11.
    b.simple(
        &[1, 2, 3, 6],
        &Patch::new(
            &[e(0, 1), e(1, 5), e(3, 7), e(6, 7), e(6, 4), e(2, 0)],
            &[[0, 1, 2], [2, 3, 4], [4, 5, 0], [0, 2, 4]],
        ),
    )?;

    Ok(b.finish())
}
