// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CornerSet type for representing corner sign configurations as bitsets.
//!
//! Bit `i` is set when corner `i` is inside the surface. There are 256
//! configurations; the lookup table is indexed by [`CornerSet::bits`].
//!
//! # Examples
//!
//! ```
//! use marching_cubes_33::geometry::{CornerSet, Vertex};
//!
//! let set = CornerSet::from_vertices(&[Vertex::new(0), Vertex::new(5)]);
//! assert_eq!(set.bits(), 0b0010_0001);
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "|05|");
//! assert_eq!(set.complement().len(), 6);
//! ```

use crate::geometry::constants::{CORNER_MASK, NVERTICES};
use crate::geometry::Vertex;
use std::fmt;

/// A set of cube corners represented as an 8-bit bitset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CornerSet(u8);

impl CornerSet {
    /// Create an empty corner set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All eight corners.
    pub const fn full() -> Self {
        Self(CORNER_MASK)
    }

    /// Create a corner set from a raw bit value.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Create a corner set from a slice of corners.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let mut set = Self::empty();
        for &v in vertices {
            set.insert(v);
        }
        set
    }

    /// Corners whose sample lies strictly above the iso-level.
    pub fn above(samples: &[f64; NVERTICES], iso: f64) -> Self {
        let mut set = Self::empty();
        for v in Vertex::all() {
            if samples[v.as_usize()] > iso {
                set.insert(v);
            }
        }
        set
    }

    pub fn contains(self, v: Vertex) -> bool {
        (self.0 >> v.value()) & 1 != 0
    }

    pub fn insert(&mut self, v: Vertex) {
        self.0 |= 1 << v.value();
    }

    pub fn remove(&mut self, v: Vertex) {
        self.0 &= !(1 << v.value());
    }

    /// The inside/outside complement.
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Iterate over the corners in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Vertex> {
        Vertex::all().filter(move |&v| self.contains(v))
    }
}

impl fmt::Display for CornerSet {
    /// Format a corner set as "|057|".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for v in self.iter() {
            write!(f, "{}", v)?;
        }
        write!(f, "|")
    }
}

impl From<&[Vertex]> for CornerSet {
    fn from(vertices: &[Vertex]) -> Self {
        Self::from_vertices(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_full() {
        assert!(CornerSet::empty().is_empty());
        assert_eq!(CornerSet::full().len(), NVERTICES);
        assert_eq!(CornerSet::empty().complement(), CornerSet::full());
    }

    #[test]
    fn test_insert_remove() {
        let mut set = CornerSet::empty();
        set.insert(Vertex::new(3));
        assert!(set.contains(Vertex::new(3)));
        assert!(!set.contains(Vertex::new(2)));
        set.remove(Vertex::new(3));
        assert!(set.is_empty());
        set.remove(Vertex::new(3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_above_is_strict() {
        let samples = [0.5, 0.0, -1.0, 0.0, 2.0, 0.0, 0.0, 0.1];
        let set = CornerSet::above(&samples, 0.0);
        assert_eq!(set.bits(), 0b1001_0001);
    }

    #[test]
    fn test_iter_and_display() {
        let set = CornerSet::from_bits(0b1000_0011);
        let corners: Vec<u8> = set.iter().map(Vertex::value).collect();
        assert_eq!(corners, vec![0, 1, 7]);
        assert_eq!(format!("{}", set), "|017|");
        assert_eq!(format!("{}", CornerSet::empty()), "||");
    }

    #[test]
    fn test_from_slice() {
        let corners = [Vertex::new(1), Vertex::new(2)];
        let set: CornerSet = (&corners[..]).into();
        assert_eq!(set.bits(), 0b110);
    }
}
