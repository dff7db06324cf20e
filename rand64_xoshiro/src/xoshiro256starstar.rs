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

/// A xoshiro256** random number generator.
///
/// The xoshiro256** algorithm is not suitable for cryptographic purposes,
/// but is very fast and has excellent statistical properties. It is the
/// all-purpose, rock-solid generator of the family, with a state (256 bits)
/// large enough for any parallel application.
///
/// The algorithm used here is translated from [the `xoshiro256starstar.c`
/// reference source code](https://prng.di.unimi.it/xoshiro256starstar.c) by
/// David Blackman and Sebastiano Vigna.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Create a new `Xoshiro256StarStar` seeded with `seed`.
    ///
    /// The four state words are drawn from a [`SplitMix64`] seeded with
    /// `seed`; any scalar, including 0, yields a valid state.
    pub fn new(seed: u64) -> Xoshiro256StarStar {
        let mut rng = Xoshiro256StarStar { s: [0; 4] };
        rng.seed(seed);
        rng
    }

    /// Jump forward, equivalently to 2^128 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^128 non-overlapping subsequences for
    /// parallel computations.
    pub fn jump(&mut self) {
        impl_jump!(self, [
            0x180ec6d33cfd0aba, 0xd5a61266f0c9392c,
            0xa9582618e03fc9aa, 0x39abdc4529b1661c,
        ]);
    }

    /// Jump forward, equivalently to 2^192 calls to `next_u64()`.
    pub fn long_jump(&mut self) {
        impl_jump!(self, [
            0x76e15d3efefdcbbf, 0xc5004e441c522fb3,
            0x77710069854ee241, 0x39109bb02acbe635,
        ]);
    }
}

impl Source64 for Xoshiro256StarStar {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let r = starstar_u64!(self.s[1]);
        impl_xoshiro_u64!(self);
        r
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl Seedable64 for Xoshiro256StarStar {
    fn seed(&mut self, seed: u64) {
        let mut sm = SplitMix64::new(seed);
        for word in self.s.iter_mut() {
            *word = sm.next_u64();
        }
    }
}
