//! Benchmark profiles and utilities for the yonder device pointer library.
//!
//! Provides helpers for building pointer populations over a backing buffer:
//!
//! - [`scattered_ptrs`]: pseudo-shuffled element addresses, for sort benches
//! - [`SCATTER_LEN`] / [`TRAVERSE_LEN`]: the population sizes the benches use

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use yonder::DevicePtr;

/// Number of pointers in the scattered population.
pub const SCATTER_LEN: usize = 4096;

/// Number of elements traversed by the iteration benches.
pub const TRAVERSE_LEN: usize = 65_536;

/// Tag every element address of `buffer`, visiting elements in a
/// pseudo-shuffled order so sort benches start from unordered input.
///
/// Uses a Knuth multiplicative hash over the index; the walk is a permutation
/// as long as `buffer.len()` is a power of two.
pub fn scattered_ptrs(buffer: &mut [u64]) -> Vec<DevicePtr<u64>> {
    let len = buffer.len();
    let base = DevicePtr::from_raw(buffer.as_mut_ptr());
    (0..len)
        .map(|i| base.wrapping_add(i.wrapping_mul(2_654_435_761) % len))
        .collect()
}
