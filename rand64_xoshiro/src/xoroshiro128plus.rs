// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand64_core::{impls, Seedable64, Source64, SplitMix64};

/// A xoroshiro128+ random number generator.
///
/// The xoroshiro128+ algorithm is not suitable for cryptographic purposes,
/// but is very fast and has good statistical properties, besides a low
/// linear complexity in the lowest bits. Blackman and Vigna suggest using
/// its upper bits for floating-point generation.
///
/// The algorithm used here is translated from [the `xoroshiro128plus.c`
/// reference source code](https://prng.di.unimi.it/xoroshiro128plus.c) by
/// David Blackman and Sebastiano Vigna.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Xoroshiro128Plus {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128Plus {
    /// Create a new `Xoroshiro128Plus` seeded with `seed`.
    ///
    /// The two state words are drawn from a [`SplitMix64`] seeded with
    /// `seed`; any scalar, including 0, yields a valid state.
    pub fn new(seed: u64) -> Xoroshiro128Plus {
        let mut rng = Xoroshiro128Plus { s0: 0, s1: 0 };
        rng.seed(seed);
        rng
    }

    /// Jump forward, equivalently to 2^64 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^64 non-overlapping subsequences for
    /// parallel computations.
    pub fn jump(&mut self) {
        impl_jump!(self, [0xdf900294d8f554a5, 0x170865df4b3201fc]);
    }

    /// Jump forward, equivalently to 2^96 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^32 starting points, from each of which
    /// `jump()` will generate 2^32 non-overlapping subsequences for parallel
    /// distributed computations.
    pub fn long_jump(&mut self) {
        impl_jump!(self, [0xd2a98b26625eee7b, 0xdddf9b1090aa7ac1]);
    }
}

impl Source64 for Xoroshiro128Plus {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let r = self.s0.wrapping_add(self.s1);
        impl_xoroshiro_u64!(self);
        r
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl Seedable64 for Xoroshiro128Plus {
    fn seed(&mut self, seed: u64) {
        let mut sm = SplitMix64::new(seed);
        self.s0 = sm.next_u64();
        self.s1 = sm.next_u64();
    }
}
