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

/// A xorshift128+ random number generator.
///
/// Period 2^128-1, 128 bits of state. This is the fastest generator of the
/// xorshift series passing BigCrush without systematic errors, but due to
/// the relatively short period it is acceptable only for applications with a
/// very mild amount of parallelism; otherwise, use [`XorShift1024Star`].
///
/// Two revisions of this algorithm were published, differing in the state
/// update shift pair (17/26 and 18/5). This implementation uses the later
/// 18/5 revision and returns the sum of both state words computed before the
/// update; it is not bit-compatible with the 17/26 revision.
///
/// [`XorShift1024Star`]: crate::XorShift1024Star
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct XorShift128Plus {
    s: [u64; 2],
}

impl XorShift128Plus {
    /// Create a new `XorShift128Plus` seeded with `seed`.
    ///
    /// A zero seed is remapped to [`seed::DEFAULT_SEED`].
    pub fn new(seed: u64) -> XorShift128Plus {
        let mut rng = XorShift128Plus { s: [0; 2] };
        rng.seed(seed);
        rng
    }
}

impl Source64 for XorShift128Plus {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut s1 = self.s[0];
        let s0 = self.s[1];
        let result = s0.wrapping_add(s1);
        self.s[0] = s0;
        s1 ^= s1 << 23; // a
        self.s[1] = s1 ^ s0 ^ (s1 >> 18) ^ (s0 >> 5); // b, c
        result
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl Seedable64 for XorShift128Plus {
    fn seed(&mut self, seed: u64) {
        seed::seed_slice(&mut self.s, seed);
    }
}

impl SliceSeedable64 for XorShift128Plus {
    fn seed_from_slice(&mut self, key: &[u64]) {
        seed::seed_from_slice(&mut self.s, key);
    }
}
