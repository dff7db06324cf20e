// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::{impls, Seedable64, Source64};

/// A SplitMix64 random number generator.
///
/// This is a fixed-increment version of Java 8's SplittableRandom generator
/// with a period of 2^64 and 64 bits of state. It is a very fast generator
/// passing BigCrush, mostly used throughout this workspace to expand a
/// scalar seed into the larger state arrays of the other generators.
///
/// The algorithm is translated from [the `splitmix64.c` reference source
/// code](https://prng.di.unimi.it/splitmix64.c) by Sebastiano Vigna.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a new `SplitMix64` seeded with `seed`.
    ///
    /// Unlike the xorshift family, a zero seed is valid here: the additive
    /// constant guarantees the state never sticks at zero.
    pub fn new(seed: u64) -> SplitMix64 {
        SplitMix64 { state: seed }
    }
}

impl Source64 for SplitMix64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl Seedable64 for SplitMix64 {
    fn seed(&mut self, seed: u64) {
        self.state = seed;
    }
}
