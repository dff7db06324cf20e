// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This crate implements scrambled xorshift pseudo-random number generators
//! designed by George Marsaglia and Sebastiano Vigna. Two of them pass the
//! BigCrush battery of the TestU01 suite without systematic errors. They have
//! been superseded by the xoroshiro/xoshiro family, but remain useful where
//! bit-compatibility with existing xorshift streams is required.
//!
//! The following generators are implemented:
//!
//! - [`XorShift64Star`]: 64 bits of state, period 2^64-1. A good generator
//!   if you are short on memory.
//! - [`XorShift128Plus`]: 128 bits of state, period 2^128-1. The fastest of
//!   the series, acceptable only for applications with a very mild amount of
//!   parallelism.
//! - [`XorShift1024Star`]: 1024 bits of state, period 2^1024-1. A fast,
//!   top-quality generator when 128 bits of state are not enough.
//!
//! The lowest bits of the `+` and `*` outputs are LFSRs and slightly less
//! random than the other bits; extract boolean values with a sign test
//! rather than from bit 0.
//!
//! All three generators are seeded through the seed-expansion utility in
//! [`rand64_core::seed`]; an all-zero state is impossible, and a zero scalar
//! seed is remapped to a fixed non-zero default.
//!
//! They are not cryptographically secure.

#![doc(html_root_url = "https://docs.rs/rand64_xorshift/0.1.0")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

mod xorshift1024star;
mod xorshift128plus;
mod xorshift64star;

pub use rand64_core;

pub use crate::xorshift1024star::XorShift1024Star;
pub use crate::xorshift128plus::XorShift128Plus;
pub use crate::xorshift64star::XorShift64Star;
