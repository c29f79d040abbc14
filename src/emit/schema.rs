// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The emitted data layout, written out by hand.
//!
//! Structs are listed in dependency order. Array shapes are outermost first:
//! `shape: &[6, 4]` is six arrays of four.

use crate::geometry::{
    MAX_SUBCASES, MAX_SUBCASE_SLOTS, MAX_TESTS, MAX_TRIANGLES, NBITSETS, NCASES, NEDGES,
    NFACES, NFACE_SLOTS, NPOINT_SLOTS, NROTATIONS, NVERTICES,
};

/// Scalar type of a field (or of the elements of an array field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int,
    UChar,
    Bool,
    Struct(&'static str),
}

impl FieldType {
    pub fn c_name(self) -> String {
        match self {
            FieldType::Int => "int".to_string(),
            FieldType::UChar => "unsigned char".to_string(),
            FieldType::Bool => "bool".to_string(),
            FieldType::Struct(name) => format!("struct {}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
    /// Array capacities, outermost first; empty for scalars.
    pub shape: &'static [usize],
    /// Bit-field width.
    pub bits: Option<u8>,
}

impl Field {
    const fn scalar(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            shape: &[],
            bits: None,
        }
    }

    const fn packed(name: &'static str, bits: u8) -> Self {
        Self {
            name,
            ty: FieldType::Int,
            shape: &[],
            bits: Some(bits),
        }
    }

    const fn array(name: &'static str, ty: FieldType, shape: &'static [usize]) -> Self {
        Self {
            name,
            ty,
            shape,
            bits: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructDef {
    pub name: &'static str,
    pub fields: &'static [Field],
}

/// Named integer constants emitted ahead of the structs.
pub const CONSTANTS: &[(&str, usize)] = &[
    ("NB_VERTICES", NVERTICES),
    ("NB_EDGES", NEDGES),
    ("NB_FACES", NFACES),
    ("NB_POINTS", NPOINT_SLOTS),
    ("NB_ROTATIONS", NROTATIONS),
    ("NB_CASES", NCASES),
    ("NB_SUBCASES", MAX_SUBCASES),
    ("MAX_TESTS", MAX_TESTS),
    ("MAX_TRIANGLES", MAX_TRIANGLES),
];

pub const SCHEMA: &[StructDef] = &[
    StructDef {
        name: "EdgeDef",
        fields: &[
            Field::packed("a", 3),
            Field::packed("b", 3),
            Field::packed("x", 1),
            Field::packed("y", 1),
            Field::packed("z", 1),
            Field::packed("changing_dim", 2),
        ],
    },
    StructDef {
        name: "Rotation",
        fields: &[
            Field::array("vertex_permutation", FieldType::UChar, &[NVERTICES]),
            Field::array("edge_permutation", FieldType::UChar, &[NEDGES]),
            Field::array("face_permutation", FieldType::UChar, &[NFACE_SLOTS]),
        ],
    },
    StructDef {
        name: "CubeGeometry",
        fields: &[
            Field::array("adjacency", FieldType::Int, &[NFACES, 4]),
            Field::array("edge_definition", FieldType::Struct("EdgeDef"), &[NEDGES]),
        ],
    },
    StructDef {
        name: "Subcase",
        fields: &[
            Field::scalar("nb_triangles", FieldType::Int),
            Field::array("triangles", FieldType::UChar, &[MAX_TRIANGLES, 3]),
        ],
    },
    StructDef {
        name: "SubcasePtr",
        fields: &[
            Field::scalar("subcase", FieldType::Int),
            Field::scalar("sign_flip", FieldType::Bool),
            Field::scalar("permutation", FieldType::Int),
        ],
    },
    StructDef {
        name: "Case",
        fields: &[
            Field::scalar("nb_tests", FieldType::Int),
            Field::array("tests", FieldType::Int, &[MAX_TESTS]),
            Field::scalar("nb_subcases", FieldType::Int),
            Field::array("subcases", FieldType::Struct("SubcasePtr"), &[MAX_SUBCASE_SLOTS]),
        ],
    },
    StructDef {
        name: "CasePtr",
        fields: &[
            Field::scalar("_case", FieldType::Int),
            Field::scalar("sign_flip", FieldType::Bool),
            Field::scalar("permutation", FieldType::Int),
        ],
    },
    StructDef {
        name: "LookupTable",
        fields: &[
            Field::array("all_cases", FieldType::Struct("Case"), &[NCASES]),
            Field::array("all_subcases", FieldType::Struct("Subcase"), &[MAX_SUBCASES]),
            Field::array("all_permutations", FieldType::Struct("Rotation"), &[NROTATIONS]),
            Field::array("case_table", FieldType::Struct("CasePtr"), &[NBITSETS]),
        ],
    },
];

pub fn struct_def(name: &str) -> Option<&'static StructDef> {
    SCHEMA.iter().find(|s| s.name == name)
}
