// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Render the schema and a value tree as C++ source.
//!
//! Arrays become `std::array` and are initialized with double braces; structs
//! use designated initializers in schema field order. Arrays shorter than their
//! capacity are left to aggregate zero-initialization.

use crate::emit::schema::{struct_def, Field, FieldType, StructDef, CONSTANTS, SCHEMA};
use crate::emit::Value;
use crate::errors::EmitError;

/// The C++ type of a field, without its bit width.
pub fn c_type(field: &Field) -> String {
    field
        .shape
        .iter()
        .rev()
        .fold(field.ty.c_name(), |inner, n| format!("std::array<{}, {}>", inner, n))
}

pub fn render_struct_def(def: &StructDef) -> String {
    let mut out = format!("struct {} {{\n", def.name);
    for field in def.fields {
        let width = field.bits.map(|bits| format!(" : {}", bits)).unwrap_or_default();
        out.push_str(&format!("    {} {}{};\n", c_type(field), field.name, width));
    }
    out.push_str("};");
    out
}

/// Constants, struct definitions and the `extern` declarations.
pub fn render_header() -> String {
    let mut lines = vec!["#pragma once".to_string(), "#include <array>".to_string()];
    lines.extend(
        CONSTANTS
            .iter()
            .map(|(name, value)| format!("constexpr int {} = {};", name, value)),
    );
    lines.extend(SCHEMA.iter().map(render_struct_def));
    lines.push(
        "extern struct LookupTable lookup_table; extern struct CubeGeometry cube_geometry;"
            .to_string(),
    );
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Definitions of `cube_geometry` and `lookup_table`.
pub fn render_source(header: &str, geometry: &Value, table: &Value) -> Result<String, EmitError> {
    let geometry = render_struct(lookup("CubeGeometry")?, geometry)?;
    let table = render_struct(lookup("LookupTable")?, table)?;
    Ok(format!(
        "#include \"{}\"\n\nstruct CubeGeometry cube_geometry = {};\nstruct LookupTable lookup_table = {};\n",
        header, geometry, table
    ))
}

fn lookup(name: &str) -> Result<&'static StructDef, EmitError> {
    struct_def(name).ok_or_else(|| EmitError::UnknownStruct {
        name: name.to_string(),
    })
}

fn mismatch(def: &StructDef, field: &Field) -> EmitError {
    EmitError::TypeMismatch {
        strukt: def.name.to_string(),
        field: field.name.to_string(),
        expected: c_type(field),
    }
}

pub fn render_struct(def: &StructDef, value: &Value) -> Result<String, EmitError> {
    let Value::Struct(members) = value else {
        return Err(EmitError::TypeMismatch {
            strukt: def.name.to_string(),
            field: String::new(),
            expected: format!("struct {}", def.name),
        });
    };
    let mut parts = Vec::with_capacity(def.fields.len());
    for field in def.fields {
        let member = members
            .iter()
            .find(|(name, _)| *name == field.name)
            .map(|(_, v)| v)
            .ok_or_else(|| EmitError::MissingField {
                strukt: def.name.to_string(),
                field: field.name.to_string(),
            })?;
        parts.push(format!(
            ".{} = {}",
            field.name,
            render_array(def, field, member, field.shape)?
        ));
    }
    Ok(format!("{{ {} }}", parts.join(", ")))
}

fn render_array(
    def: &StructDef,
    field: &Field,
    value: &Value,
    shape: &[usize],
) -> Result<String, EmitError> {
    let Some((&capacity, inner)) = shape.split_first() else {
        return render_scalar(def, field, value);
    };
    let Value::Array(items) = value else {
        return Err(mismatch(def, field));
    };
    if items.len() > capacity {
        return Err(EmitError::CapacityExceeded {
            strukt: def.name.to_string(),
            field: field.name.to_string(),
            capacity,
            actual: items.len(),
        });
    }
    let rendered = items
        .iter()
        .map(|item| render_array(def, field, item, inner))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("{{{{{}}}}}", rendered.join(", ")))
}

fn render_scalar(def: &StructDef, field: &Field, value: &Value) -> Result<String, EmitError> {
    match (field.ty, value) {
        (FieldType::Int, Value::Int(v)) => {
            if let Some(bits) = field.bits {
                if *v < 0 || *v >= 1i64 << bits {
                    return Err(mismatch(def, field));
                }
            }
            Ok(v.to_string())
        }
        (FieldType::UChar, Value::Int(v)) if (0..=i64::from(u8::MAX)).contains(v) => {
            Ok(v.to_string())
        }
        (FieldType::Bool, Value::Bool(b)) => Ok(b.to_string()),
        (FieldType::Struct(name), Value::Struct(_)) => render_struct(lookup(name)?, value),
        _ => Err(mismatch(def, field)),
    }
}
