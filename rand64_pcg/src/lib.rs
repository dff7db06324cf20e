// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The PCG XSL RR 128/64 random number generator.
//!
//! This crate implements a single member of the [PCG family] of permuted
//! congruential generators: a 128-bit linear congruential generator with
//! the xorshift-low/random-rotation output function, known as `pcg64` in
//! the reference C++ distribution. It has a period of 2^128 and excellent
//! statistical quality in 16 bytes of state.
//!
//! It is not cryptographically secure.
//!
//! [PCG family]: https://www.pcg-random.org/

#![doc(html_root_url = "https://docs.rs/rand64_pcg/0.1.0")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

use core::fmt;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

pub use rand64_core;
use rand64_core::{impls, Seedable64, Source64, SplitMix64};

const MULTIPLIER: u128 = (2_549_297_995_355_413_924 << 64) | 4_865_540_595_714_422_341;
const INCREMENT: u128 = (6_364_136_223_846_793_005 << 64) | 1_442_695_040_888_963_407;

/// A PCG XSL RR 128/64 (LCG) random number generator.
///
/// The stream increment is fixed; generators seeded differently still
/// belong to the same sequence, at different unknown offsets.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Pcg64 {
    state: u128,
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Pcg64 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pcg64 {{}}")
    }
}

impl Pcg64 {
    /// Create a new `Pcg64` seeded with `seed`.
    ///
    /// The 128-bit state is assembled from two words of a [`SplitMix64`]
    /// seeded with `seed`, low half first.
    pub fn new(seed: u64) -> Pcg64 {
        let mut rng = Pcg64 { state: 0 };
        rng.seed(seed);
        rng
    }
}

impl Source64 for Pcg64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        // Output the advanced state, folded to 64 bits and rotated by its
        // top 6 bits.
        let rot = (self.state >> 122) as u32;
        let xsl = ((self.state >> 64) as u64) ^ (self.state as u64);
        xsl.rotate_right(rot)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

impl Seedable64 for Pcg64 {
    fn seed(&mut self, seed: u64) {
        let mut sm = SplitMix64::new(seed);
        let lo = sm.next_u64();
        let hi = sm.next_u64();
        self.state = ((hi as u128) << 64) | lo as u128;
    }
}
