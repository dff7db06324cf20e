// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A sampling layer deriving bounded values from any 64-bit source.

use rand64_core::{Seedable64, SliceSeedable64, Source64};

/// A `Rand64` derives uniformly distributed bounded integers, floats in
/// [0, 1) and permutations from the raw output of any [`Source64`].
///
/// Bounded integers use rejection sampling: draws above the largest
/// multiple of the bound are discarded, so `uint64n(n)` is exactly uniform
/// rather than carrying the modulo bias of a naive `raw % n`. Power-of-two
/// bounds are served by a single masked draw.
///
/// The sampler owns its source; wrap a `&mut` borrow of a generator to
/// keep using it directly afterwards.
///
/// # Example
///
/// ```rust
/// use rand64::{Rand64, Xoshiro256StarStar};
///
/// let mut rng = Rand64::new(Xoshiro256StarStar::new(42));
/// let die = rng.uint64n(6) + 1;
/// assert!((1..=6).contains(&die));
/// ```
#[derive(Debug)]
pub struct Rand64<R: Source64> {
    src: R,
}

impl<R: Source64> Rand64<R> {
    /// Create a new `Rand64` drawing from `src`.
    pub fn new(src: R) -> Rand64<R> {
        Rand64 { src }
    }

    /// Unwrap the sampler, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.src
    }

    /// Return a pseudo-random value over the whole `u64` range.
    #[inline]
    pub fn uint64(&mut self) -> u64 {
        self.src.next_u64()
    }

    /// Return a pseudo-random `u32`, taken from the upper half of a raw
    /// draw, where even the weakest generators are well distributed.
    #[inline]
    pub fn uint32(&mut self) -> u32 {
        (self.src.next_u64() >> 32) as u32
    }

    /// Return a non-negative pseudo-random 63-bit integer as an `i64`.
    #[inline]
    pub fn int63(&mut self) -> i64 {
        self.src.int63()
    }

    /// Return a pseudo-random number in `[0, n)` as a `u64`.
    ///
    /// For n = 0 the bound degenerates to a full-range mask and any value
    /// may be returned.
    pub fn uint64n(&mut self, n: u64) -> u64 {
        if n & n.wrapping_sub(1) == 0 {
            // n is a power of two, can mask
            return self.uint64() & n.wrapping_sub(1);
        }
        // Largest multiple of n that fits, minus one. Derived as
        // u64::MAX - u64::MAX % n rewritten to avoid computing 2^64.
        let max = u64::MAX - ((u64::MAX % n) + 1) % n;
        let mut v = self.uint64();
        while v > max {
            v = self.uint64();
        }
        v % n
    }

    /// Return a pseudo-random number in `[0, n)` as a `u32`.
    pub fn uint32n(&mut self, n: u32) -> u32 {
        if n & n.wrapping_sub(1) == 0 {
            return self.uint32() & n.wrapping_sub(1);
        }
        let max = (u32::MAX as u64 - (1 << 32) % n as u64) as u32;
        let mut v = self.uint32();
        while v > max {
            v = self.uint32();
        }
        v % n
    }

    /// Return a pseudo-random number in `[0, n)`, dispatching on the size
    /// of `n` to consume as little raw output as possible.
    pub fn uintn(&mut self, n: u64) -> u64 {
        if n <= u32::MAX as u64 {
            self.uint32n(n as u32) as u64
        } else {
            self.uint64n(n)
        }
    }

    /// Return a pseudo-random `f64` in `[0.0, 1.0)`.
    pub fn float64(&mut self) -> f64 {
        // 1<<53 is the largest power of two for which
        // (2^n - 1) / 2^n rounds to a value below 1.0.
        self.uint64n(1 << 53) as f64 / (1u64 << 53) as f64
    }

    /// Return a pseudo-random `f32` in `[0.0, 1.0)`.
    pub fn float32(&mut self) -> f32 {
        // Same rationale as in float64, with the f32 mantissa width.
        self.uint64n(1 << 24) as f32 / (1u32 << 24) as f32
    }

    /// Return a pseudo-random permutation of the integers `[0, n)`.
    ///
    /// Every permutation is equally likely given an unbiased source.
    pub fn uperm(&mut self, n: usize) -> Vec<usize> {
        let mut m = vec![0; n];
        for i in 0..n {
            let j = self.uintn(i as u64 + 1) as usize;
            m[i] = m[j];
            m[j] = i;
        }
        m
    }

    /// Fill `dest` with pseudo-random words.
    pub fn fill_u64(&mut self, dest: &mut [u64]) {
        for word in dest.iter_mut() {
            *word = self.uint64();
        }
    }

    /// Return a `Vec` of `n` pseudo-random words.
    ///
    /// Handy for producing seed material for other generators, e.g. an
    /// argument to [`SliceSeedable64::seed_from_slice`].
    pub fn bulk_u64(&mut self, n: usize) -> Vec<u64> {
        let mut buf = vec![0; n];
        self.fill_u64(&mut buf);
        buf
    }

    /// Fill `dest` with pseudo-random bytes, splitting words in
    /// little-endian order.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.src.fill_bytes(dest);
    }
}

impl<R: Seedable64> Rand64<R> {
    /// Re-seed the underlying source.
    pub fn seed(&mut self, seed: u64) {
        self.src.seed(seed);
    }
}

impl<R: SliceSeedable64> Rand64<R> {
    /// Re-seed the underlying source from a slice of words.
    pub fn seed_from_slice(&mut self, key: &[u64]) {
        self.src.seed_from_slice(key);
    }
}
