// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 64-bit Mersenne Twister pseudo-random number generator.
//!
//! This crate implements MT19937-64 by Takuji Nishimura and Makoto
//! Matsumoto, bit-compatible with [the reference C
//! implementation](http://www.math.sci.hiroshima-u.ac.jp/m-mat/MT/VERSIONS/C-LANG/mt19937-64.c).
//! It has a very large period (2^19937-1) at the cost of a large state
//! (2.5 KiB), and is noticeably slower than the xoshiro family. Prefer it
//! when reproducing streams from other MT19937-64 implementations.
//!
//! It is not cryptographically secure.

#![doc(html_root_url = "https://docs.rs/rand64_mt/0.1.0")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

use core::fmt;

pub use rand64_core;
use rand64_core::{impls, Seedable64, SliceSeedable64, Source64};

#[cfg(feature = "serde1")]
mod mt_serde;

const NN: usize = 312;
const MM: usize = 156;
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;
const UM: u64 = 0xFFFF_FFFF_8000_0000;
const LM: u64 = 0x7FFF_FFFF;

/// Seed used when the generator is asked to produce output before being
/// seeded, or when seeded with 0, matching the reference implementation.
const DEFAULT_SEED: u64 = 5489;

/// A Mersenne Twister (MT19937-64) random number generator.
///
/// Construct it with [`Mt64::new`], or with [`Default::default`] for a
/// generator that lazily seeds itself with the reference default seed 5489
/// on first use.
#[derive(Clone)]
pub struct Mt64 {
    mt: [u64; NN],
    // NN + 1 marks an unseeded generator.
    mti: usize,
}

// Custom Debug implementation that does not expose the internal state.
impl fmt::Debug for Mt64 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Mt64 {{}}")
    }
}

impl PartialEq for Mt64 {
    fn eq(&self, other: &Mt64) -> bool {
        self.mt[..] == other.mt[..] && self.mti == other.mti
    }
}

impl Eq for Mt64 {}

impl Default for Mt64 {
    fn default() -> Mt64 {
        Mt64 { mt: [0; NN], mti: NN + 1 }
    }
}

impl Mt64 {
    /// Create a new `Mt64` seeded with `seed`.
    ///
    /// A `seed` of 0 behaves like the reference default seed 5489.
    pub fn new(seed: u64) -> Mt64 {
        let mut rng = Mt64::default();
        rng.seed(seed);
        rng
    }

    /// Regenerate the state array and reset the output cursor.
    fn twist(&mut self) {
        for i in 0..NN {
            let x = (self.mt[i] & UM) | (self.mt[(i + 1) % NN] & LM);
            self.mt[i] = self.mt[(i + MM) % NN]
                ^ (x >> 1)
                ^ if x & 1 != 0 { MATRIX_A } else { 0 };
        }
        self.mti = 0;
    }
}

impl Source64 for Mt64 {
    fn next_u64(&mut self) -> u64 {
        if self.mti >= NN {
            if self.mti == NN + 1 {
                self.seed(DEFAULT_SEED);
            }
            self.twist();
        }

        let mut x = self.mt[self.mti];
        self.mti += 1;

        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
        x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
        x ^= x >> 43;
        x
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl Seedable64 for Mt64 {
    fn seed(&mut self, seed: u64) {
        let seed = if seed == 0 { DEFAULT_SEED } else { seed };
        self.mt[0] = seed;
        for i in 1..NN {
            let prev = self.mt[i - 1];
            self.mt[i] = 6_364_136_223_846_793_005u64
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        self.mti = NN;
    }
}

impl SliceSeedable64 for Mt64 {
    /// Seed the state from `key` with the reference `init_by_array`
    /// procedure. An empty `key` behaves like seeding with 0.
    fn seed_from_slice(&mut self, key: &[u64]) {
        if key.is_empty() {
            self.seed(0);
            return;
        }

        self.seed(19_650_218);
        let mut i = 1;
        let mut j = 0;
        for _ in 0..NN.max(key.len()) {
            let prev = self.mt[i - 1];
            self.mt[i] = (self.mt[i]
                ^ (prev ^ (prev >> 62)).wrapping_mul(3_935_559_000_370_003_845))
            .wrapping_add(key[j])
            .wrapping_add(j as u64);
            i += 1;
            j += 1;
            if i >= NN {
                self.mt[0] = self.mt[NN - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..NN - 1 {
            let prev = self.mt[i - 1];
            self.mt[i] = (self.mt[i]
                ^ (prev ^ (prev >> 62)).wrapping_mul(2_862_933_555_777_941_757))
            .wrapping_sub(i as u64);
            i += 1;
            if i >= NN {
                self.mt[0] = self.mt[NN - 1];
                i = 1;
            }
        }
        // Guarantee a non-zero state.
        self.mt[0] = 1 << 63;
        self.mti = NN;
    }
}
