// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Core traits for 64-bit pseudo-random number generators
//!
//! This crate is mainly of interest to crates publishing implementations of
//! [`Source64`]. Other users are encouraged to use the `rand64` crate, which
//! re-exports the main traits and wraps any source in a sampling layer.
//!
//! [`Source64`] is the core trait implemented by algorithmic pseudo-random
//! number generators and external random-number sources. [`Seedable64`] and
//! [`SliceSeedable64`] are extension traits for in-place deterministic
//! seeding.
//!
//! The [`seed`] module holds the seed-expansion utility used by generators
//! whose state is larger than one word, and the [`impls`] module a few small
//! functions to assist implementation of `Source64`.
//!
//! The [`mock`] module includes a mock `Source64` implementation, only useful
//! for testing.

#![doc(html_root_url = "https://docs.rs/rand64_core/0.1.0")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

pub mod impls;
pub mod mock;
pub mod seed;
mod splitmix64;

pub use crate::splitmix64::SplitMix64;

/// A source of uniformly-distributed pseudo-random `u64` values in the range
/// `[0, 2^64)`.
///
/// There are two classes of sources: *algorithmic* generators, also called
/// PRNGs (pseudo-random number generators), and *external* sources such as a
/// wrapped entropy stream.
///
/// PRNGs are expected to be reproducible: seeding a fixed algorithm with a
/// fixed value and calling any sequence of this trait's methods must produce
/// the same sequence of values on every platform. All default implementations
/// use little-endian order when splitting words into bytes.
///
/// None of the generators in this workspace is cryptographically secure:
/// their output is statistically strong but predictable by an adversary who
/// observes enough of it.
pub trait Source64 {
    /// Return the next random `u64`.
    ///
    /// This method is infallible and mutates the generator state in place.
    fn next_u64(&mut self) -> u64;

    /// Fill `dest` entirely with random data.
    ///
    /// Implementations should use [`impls::fill_bytes_via_next`], which
    /// consumes a whole number of `u64` values and splits them in
    /// little-endian order; any change affecting reproducibility of output
    /// must be considered a breaking change.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Return a non-negative random 63-bit integer as an `i64`.
    ///
    /// This is the interoperability contract required to substitute a
    /// `Source64` for a host framework's uniform signed-integer facility: the
    /// value is the upper 63 bits of [`next_u64`](Source64::next_u64).
    fn int63(&mut self) -> i64 {
        (self.next_u64() >> 1) as i64
    }
}

/// A source that can be re-seeded in place from a single `u64`.
///
/// Seeding always succeeds and leaves the generator ready for output.
/// Algorithms for which an all-zero state is degenerate (the xorshift family)
/// remap a zero seed to a documented non-zero default rather than reporting
/// an error.
pub trait Seedable64: Source64 {
    /// Use `seed` to initialize the generator to a deterministic state.
    fn seed(&mut self, seed: u64);
}

/// A source that can be re-seeded from a slice of `u64` words.
///
/// This is only implemented by algorithms with a defined slice-seeding rule:
/// the xorshift family (via [`seed::seed_from_slice`]) and MT19937-64 (via
/// its `init_by_array` construction). A slice shorter than the state is
/// completed deterministically; see the implementors for the exact rule.
pub trait SliceSeedable64: Seedable64 {
    /// Use the words of `key` to initialize the generator to a deterministic
    /// state.
    fn seed_from_slice(&mut self, key: &[u64]);
}

impl<'a, R: Source64 + ?Sized> Source64 for &'a mut R {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest)
    }
}

impl<'a, R: Seedable64 + ?Sized> Seedable64 for &'a mut R {
    #[inline]
    fn seed(&mut self, seed: u64) {
        (**self).seed(seed)
    }
}

impl<'a, R: SliceSeedable64 + ?Sized> SliceSeedable64 for &'a mut R {
    #[inline]
    fn seed_from_slice(&mut self, key: &[u64]) {
        (**self).seed_from_slice(key)
    }
}
