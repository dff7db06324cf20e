// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand64_core::{impls, seed, Seedable64, SliceSeedable64, Source64};

/// A xorshift1024* random number generator.
///
/// Period 2^1024-1, 1024 bits of state held in a 16-word ring buffer. This
/// is a fast, top-quality generator; if 1024 bits of state are too much, try
/// a [`XorShift128Plus`] or [`XorShift64Star`] generator.
///
/// The three lowest bits are LFSRs and slightly less random than the other
/// bits; extract boolean values with a sign test.
///
/// [`XorShift128Plus`]: crate::XorShift128Plus
/// [`XorShift64Star`]: crate::XorShift64Star
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct XorShift1024Star {
    s: [u64; 16],
    p: usize,
}

impl XorShift1024Star {
    /// Create a new `XorShift1024Star` seeded with `seed`.
    ///
    /// A zero seed is remapped to [`seed::DEFAULT_SEED`].
    pub fn new(seed: u64) -> XorShift1024Star {
        let mut rng = XorShift1024Star { s: [0; 16], p: 0 };
        rng.seed(seed);
        rng
    }
}

impl Source64 for XorShift1024Star {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s0 = self.s[self.p];
        self.p = (self.p + 1) & 15;
        let mut s1 = self.s[self.p];
        s1 ^= s1 << 31; // a
        self.s[self.p] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30); // b, c
        self.s[self.p].wrapping_mul(1181783497276652981)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl Seedable64 for XorShift1024Star {
    /// Re-seed the state buffer and reset the ring cursor.
    fn seed(&mut self, seed: u64) {
        seed::seed_slice(&mut self.s, seed);
        self.p = 0;
    }
}

impl SliceSeedable64 for XorShift1024Star {
    fn seed_from_slice(&mut self, key: &[u64]) {
        seed::seed_from_slice(&mut self.s, key);
        self.p = 0;
    }
}
