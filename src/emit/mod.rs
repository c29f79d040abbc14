// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Emission of the finished table as C++ source.
//!
//! The table is first flattened into a [`Value`] tree whose struct members
//! carry the schema's field names; the renderer then walks the tree against
//! [`schema::SCHEMA`]. Nothing in the table depends on this module.
//!
//! ## Module Structure
//!
//! - `schema`: the hand-written struct layout (types, capacities, bit widths)
//! - `c_source`: rendering of the header and the initializers

pub mod c_source;
pub mod schema;

use crate::catalog::Subcase;
use crate::errors::EmitError;
use crate::geometry::{CubeGeometry, EdgeDef};
use crate::symmetry::Rotation;
use crate::table::{Case, CasePtr, LookupTable, SubcasePtr};

/// File name the emitted source includes.
pub const HEADER_NAME: &str = "mc33_tables.h";

/// A schema-shaped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Array(Vec<Value>),
    /// Members by field name.
    Struct(Vec<(&'static str, Value)>),
}

fn ints<T: Into<i64>>(values: impl IntoIterator<Item = T>) -> Value {
    Value::Array(values.into_iter().map(|v| Value::Int(v.into())).collect())
}

fn count(n: usize) -> Value {
    Value::Int(n as i64)
}

fn edge_value(edge: &EdgeDef) -> Value {
    let [x, y, z] = edge.origin();
    Value::Struct(vec![
        ("a", Value::Int(edge.a.value().into())),
        ("b", Value::Int(edge.b.value().into())),
        ("x", Value::Int(x.into())),
        ("y", Value::Int(y.into())),
        ("z", Value::Int(z.into())),
        ("changing_dim", count(edge.changing_dim.index())),
    ])
}

pub fn geometry_value(geometry: &CubeGeometry) -> Value {
    Value::Struct(vec![
        (
            "adjacency",
            Value::Array(
                geometry
                    .faces()
                    .iter()
                    .map(|f| ints(f.corners.map(|c| c.value())))
                    .collect(),
            ),
        ),
        (
            "edge_definition",
            Value::Array(geometry.edges().iter().map(edge_value).collect()),
        ),
    ])
}

fn rotation_value(rotation: &Rotation) -> Value {
    Value::Struct(vec![
        ("vertex_permutation", ints(*rotation.vertex_perm())),
        ("edge_permutation", ints(*rotation.edge_perm())),
        ("face_permutation", ints(*rotation.face_perm())),
    ])
}

fn subcase_value(subcase: &Subcase) -> Value {
    Value::Struct(vec![
        ("nb_triangles", count(subcase.len())),
        ("triangles", Value::Array(subcase.slots().map(ints).collect())),
    ])
}

fn subcase_ptr_value(ptr: &SubcasePtr) -> Value {
    Value::Struct(vec![
        ("subcase", Value::Int(ptr.subcase.emitted_id().into())),
        ("sign_flip", Value::Bool(ptr.flip)),
        ("permutation", count(ptr.rotation)),
    ])
}

fn case_value(case: &Case) -> Value {
    Value::Struct(vec![
        ("nb_tests", count(case.tests.len())),
        ("tests", ints(case.tests.iter().map(|t| t.slot()))),
        ("nb_subcases", count(case.subcases.len())),
        (
            "subcases",
            Value::Array(case.subcases.iter().map(subcase_ptr_value).collect()),
        ),
    ])
}

fn case_ptr_value(ptr: &CasePtr) -> Value {
    Value::Struct(vec![
        ("_case", count(ptr.case)),
        ("sign_flip", Value::Bool(ptr.flip)),
        ("permutation", count(ptr.rotation)),
    ])
}

pub fn table_value(table: &LookupTable) -> Value {
    Value::Struct(vec![
        ("all_cases", Value::Array(table.cases().iter().map(case_value).collect())),
        (
            "all_subcases",
            Value::Array(table.subcases().iter().map(subcase_value).collect()),
        ),
        (
            "all_permutations",
            Value::Array(table.group().rotations().iter().map(rotation_value).collect()),
        ),
        (
            "case_table",
            Value::Array(table.case_table().iter().map(case_ptr_value).collect()),
        ),
    ])
}

/// The C++ header: constants, struct layout and `extern` declarations.
pub fn header() -> String {
    c_source::render_header()
}

/// The C++ source defining `cube_geometry` and `lookup_table`.
pub fn source(table: &LookupTable) -> Result<String, EmitError> {
    c_source::render_source(
        HEADER_NAME,
        &geometry_value(table.geometry()),
        &table_value(table),
    )
}
