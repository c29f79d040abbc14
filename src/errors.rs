// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for table generation, grid extraction and source emission.
//!
//! Every [`TableError`] is a generation-time defect in the cube geometry, the
//! rotation group or the hand-authored case catalog. None is recoverable: table
//! construction stops at the first one. Once a [`crate::LookupTable`] exists,
//! queries against it cannot fail.

use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// Result alias for table construction.
pub type TableResult<T> = Result<T, TableError>;

/// Defects detected while building the lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro)]
pub enum TableError {
    /// Zero or several faces contain all of the given corners.
    #[error("corners {corners:?} lie on {matches} faces, expected exactly one")]
    AmbiguousFace { corners: Vec<u8>, matches: usize },

    /// Two corners that do not share a cube edge.
    #[error("corners {a} and {b} are not joined by a cube edge")]
    NotAnEdge { a: u8, b: u8 },

    /// A corner index or lattice coordinate outside the unit cube.
    #[error("vertex {value} is outside the unit cube")]
    VertexOutOfRange { value: u8 },

    /// A 3-D rotation that does not map the lattice onto itself, or whose
    /// induced index maps are not permutations.
    #[error("rotation {rotation} does not permute the cube ({reason})")]
    DegenerateRotation {
        rotation: usize,
        reason: &'static str,
    },

    /// The composition of two group elements is missing from the group.
    #[error("composition of rotations {first} and {second} is not in the group")]
    NotInGroup { first: usize, second: usize },

    /// A neutral rotation moves one of a case's tests onto a face the case does not test.
    #[error("case {case}: rotation {rotation} maps test slot {slot} outside the test list")]
    TestNotPreserved {
        case: usize,
        rotation: usize,
        slot: u8,
    },

    /// A bitset reached by one case was already claimed by another.
    #[error("bitset {bits:#010b} claimed by case {existing} and case {incoming}")]
    CaseCollision {
        bits: u8,
        existing: usize,
        incoming: usize,
    },

    /// No case covers this corner configuration.
    #[error("bitset {bits:#010b} is not covered by any case")]
    UncoveredBitset { bits: u8 },

    /// A bitset and its complement resolve to different cases, or agree on the sign flag.
    #[error("bitset {bits:#010b} and its complement are not sign-flipped images of one case")]
    ComplementMismatch { bits: u8 },

    /// A test-outcome vector of a case was left without a subcase.
    #[error("case {case}: test outcome {outcome:#b} has no subcase")]
    UncoveredSubcase { case: usize, outcome: u32 },
}

/// Errors raised by the scalar grid driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Sample count does not match the declared shape.
    #[error("grid of shape {dims:?} needs {expected} samples, got {actual}")]
    ShapeMismatch {
        dims: [usize; 3],
        expected: usize,
        actual: usize,
    },
}

/// Mismatches between emitted values and the emission schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("no struct named {name} in the schema")]
    UnknownStruct { name: String },

    #[error("{strukt}.{field}: value is missing")]
    MissingField { strukt: String, field: String },

    #[error("{strukt}.{field}: {actual} elements exceed the capacity of {capacity}")]
    CapacityExceeded {
        strukt: String,
        field: String,
        capacity: usize,
        actual: usize,
    },

    #[error("{strukt}.{field}: value does not fit type {expected}")]
    TypeMismatch {
        strukt: String,
        field: String,
        expected: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_error_variant_count() {
        assert_eq!(TableError::COUNT, 10);
    }

    #[test]
    fn test_display_formats_bitsets() {
        let err = TableError::UncoveredBitset { bits: 0b0000_0101 };
        assert_eq!(format!("{}", err), "bitset 0b00000101 is not covered by any case");

        let err = TableError::CaseCollision {
            bits: 1,
            existing: 1,
            incoming: 3,
        };
        assert!(format!("{}", err).contains("case 1 and case 3"));
    }

    #[test]
    fn test_display_ambiguous_face() {
        let err = TableError::AmbiguousFace {
            corners: vec![0, 1],
            matches: 2,
        };
        assert_eq!(
            format!("{}", err),
            "corners [0, 1] lie on 2 faces, expected exactly one"
        );
    }

    #[test]
    fn test_grid_error_display() {
        let err = GridError::ShapeMismatch {
            dims: [2, 2, 2],
            expected: 8,
            actual: 7,
        };
        assert_eq!(
            format!("{}", err),
            "grid of shape [2, 2, 2] needs 8 samples, got 7"
        );
    }

    #[test]
    fn test_emit_error_display() {
        let err = EmitError::CapacityExceeded {
            strukt: "Case".into(),
            field: "tests".into(),
            capacity: 7,
            actual: 8,
        };
        assert_eq!(
            format!("{}", err),
            "Case.tests: 8 elements exceed the capacity of 7"
        );
    }
}
