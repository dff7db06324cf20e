// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This crate implements the xoroshiro128 and xoshiro256 families of
//! pseudorandom number generators designed by David Blackman and Sebastiano
//! Vigna. They feature high performance and a small state and supersede the
//! previous xorshift-based generators. However, they are not
//! cryptographically secure and their output can be predicted by observing
//! a few samples.
//!
//! The following generators are implemented:
//!
//! - [`Xoshiro256StarStar`]: Recommended for all purposes. Excellent speed
//!   and a state space (256 bits) large enough for any parallel application.
//! - [`Xoshiro256Plus`]: Recommended for generating 64-bit floating-point
//!   numbers. Slightly faster than `Xoshiro256StarStar`, but has a low
//!   linear complexity in the lowest bits (which are discarded when
//!   generating floats), making it fail linearity tests.
//! - [`Xoroshiro128StarStar`]: An alternative to `Xoshiro256StarStar` using
//!   half the state. Only suited for low-scale parallel applications.
//! - [`Xoroshiro128Plus`]: An alternative to `Xoshiro256Plus` using half the
//!   state. Only suited for low-scale parallel applications.
//!
//! These generators take their whole seed from SplitMix64 output: a scalar
//! seed is expanded into exactly as many words as the state holds, and no
//! slice-seeding form is offered.

#![doc(html_root_url = "https://docs.rs/rand64_xoshiro/0.1.0")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

#[macro_use]
mod common;
mod xoroshiro128plus;
mod xoroshiro128starstar;
mod xoshiro256plus;
mod xoshiro256starstar;

pub use rand64_core;

pub use crate::xoroshiro128plus::Xoroshiro128Plus;
pub use crate::xoroshiro128starstar::Xoroshiro128StarStar;
pub use crate::xoshiro256plus::Xoshiro256Plus;
pub use crate::xoshiro256starstar::Xoshiro256StarStar;
