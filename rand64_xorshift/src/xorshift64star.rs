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

/// A xorshift64* random number generator.
///
/// Period 2^64-1, 64 bits of state. The output is the pre-multiplication
/// state scrambled by a fixed odd constant; the state itself follows the
/// plain xorshift recurrence and is never zero.
///
/// The algorithm used here is translated from the reference source code by
/// Sebastiano Vigna, <https://prng.di.unimi.it/>.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct XorShift64Star {
    x: u64,
}

impl XorShift64Star {
    /// Create a new `XorShift64Star` seeded with `seed`.
    ///
    /// A zero seed is remapped to [`seed::DEFAULT_SEED`].
    pub fn new(seed: u64) -> XorShift64Star {
        let mut rng = XorShift64Star { x: 0 };
        rng.seed(seed);
        rng
    }
}

impl Source64 for XorShift64Star {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut x = self.x;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.x = x;
        x.wrapping_mul(2685821657736338717)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl Seedable64 for XorShift64Star {
    fn seed(&mut self, seed: u64) {
        seed::seed_slice(core::slice::from_mut(&mut self.x), seed);
    }
}

impl SliceSeedable64 for XorShift64Star {
    fn seed_from_slice(&mut self, key: &[u64]) {
        seed::seed_from_slice(core::slice::from_mut(&mut self.x), key);
    }
}
