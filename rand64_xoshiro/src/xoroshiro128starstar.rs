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

/// A xoroshiro128** random number generator.
///
/// The xoroshiro128** algorithm is not suitable for cryptographic purposes,
/// but is very fast and has excellent statistical properties. It is the
/// all-purpose, rock-solid small-state member of the family; its state space
/// is large enough only for mild parallelism.
///
/// The algorithm used here is translated from [the `xoroshiro128starstar.c`
/// reference source code](https://prng.di.unimi.it/xoroshiro128starstar.c)
/// by David Blackman and Sebastiano Vigna.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Xoroshiro128StarStar {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128StarStar {
    /// Create a new `Xoroshiro128StarStar` seeded with `seed`.
    ///
    /// The two state words are drawn from a [`SplitMix64`] seeded with
    /// `seed`; any scalar, including 0, yields a valid state.
    pub fn new(seed: u64) -> Xoroshiro128StarStar {
        let mut rng = Xoroshiro128StarStar { s0: 0, s1: 0 };
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
    pub fn long_jump(&mut self) {
        impl_jump!(self, [0xd2a98b26625eee7b, 0xdddf9b1090aa7ac1]);
    }
}

impl Source64 for Xoroshiro128StarStar {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let r = starstar_u64!(self.s0);
        impl_xoroshiro_u64!(self);
        r
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl Seedable64 for Xoroshiro128StarStar {
    fn seed(&mut self, seed: u64) {
        let mut sm = SplitMix64::new(seed);
        self.s0 = sm.next_u64();
        self.s1 = sm.next_u64();
    }
}
