// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Index permutations.
//!
//! A permutation `p` sends position `i` to position `p[i]`. Permuting a list
//! moves the value at `i` to `p[i]`; permuting a bitset moves bit `i` to bit
//! `p[i]`. Composition reads left to right: `compose(p1, p2)` applies `p1` first.

/// Move `values[i]` to position `perm[i]`.
pub fn permute<T: Copy, const N: usize>(values: &[T; N], perm: &[u8; N]) -> [T; N] {
    let mut out = *values;
    for (value, &target) in values.iter().zip(perm) {
        out[target as usize] = *value;
    }
    out
}

/// Move bit `i` of `bits` to bit `perm[i]`. Bits at or above `perm.len()` are dropped.
pub fn permute_bits(bits: u32, perm: &[u8]) -> u32 {
    perm.iter()
        .enumerate()
        .filter(|&(i, _)| (bits >> i) & 1 != 0)
        .fold(0, |acc, (_, &target)| acc | (1 << target))
}

/// The permutation undoing `perm`.
pub fn invert<const N: usize>(perm: &[u8; N]) -> [u8; N] {
    let mut out = [0u8; N];
    for (i, &target) in perm.iter().enumerate() {
        out[target as usize] = i as u8;
    }
    out
}

/// `first` followed by `second`.
pub fn compose<const N: usize>(first: &[u8; N], second: &[u8; N]) -> [u8; N] {
    std::array::from_fn(|i| second[first[i] as usize])
}

/// Whether `perm` is a bijection on `0..perm.len()`.
pub fn is_permutation(perm: &[u8]) -> bool {
    let mut seen = vec![false; perm.len()];
    for &target in perm {
        match seen.get_mut(target as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
