// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-random number generators producing 64-bit output.
//!
//! This crate gathers a family of interchangeable deterministic
//! generators behind one numeric contract, [`Source64`], together with a
//! sampling layer, [`Rand64`], that derives bounded unbiased integers,
//! floats in [0, 1) and permutations from any of them.
//!
//! ## Generators
//!
//! - [`SplitMix64`]: the scalar mix generator also used internally to
//!   expand scalar seeds for every other algorithm.
//! - [`XorShift64Star`], [`XorShift128Plus`], [`XorShift1024Star`]:
//!   scrambled xorshift generators, from `rand64_xorshift`.
//! - [`Xoroshiro128Plus`], [`Xoroshiro128StarStar`], [`Xoshiro256Plus`],
//!   [`Xoshiro256StarStar`]: the xoroshiro/xoshiro family, from
//!   `rand64_xoshiro`.
//! - [`Mt64`]: the 64-bit Mersenne Twister, from `rand64_mt`.
//! - [`Pcg64`]: PCG XSL RR 128/64, from `rand64_pcg`.
//! - [`ReadRng`]: an adapter reading words from any [`std::io::Read`],
//!   such as an OS entropy device.
//!
//! None of these are cryptographically secure.
//!
//! ## Usage
//!
//! ```rust
//! use rand64::{Rand64, Xoshiro256StarStar};
//!
//! let mut rng = Rand64::new(Xoshiro256StarStar::new(42));
//! let roll = rng.uint64n(6) + 1;
//! let x = rng.float64();
//! assert!((1..=6).contains(&roll));
//! assert!((0.0..1.0).contains(&x));
//! ```
//!
//! ## Crate features
//!
//! - `os_seed` (default): provides [`generate_seed`], reading seed
//!   material from the OS entropy source.
//! - `serde1`: serialization of generator state for all generators.
//! - `log`: logs latched stream failures in [`ReadRng`].

#![doc(html_root_url = "https://docs.rs/rand64/0.1.0")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

#[macro_use]
mod log_macros;

mod read;
mod rng;
#[cfg(feature = "os_seed")]
mod util;

pub use rand64_core::{seed, Seedable64, SliceSeedable64, Source64, SplitMix64};
pub use rand64_mt::Mt64;
pub use rand64_pcg::Pcg64;
pub use rand64_xorshift::{XorShift1024Star, XorShift128Plus, XorShift64Star};
pub use rand64_xoshiro::{
    Xoroshiro128Plus, Xoroshiro128StarStar, Xoshiro256Plus, Xoshiro256StarStar,
};

pub use crate::read::{ByteOrder, ReadRng};
pub use crate::rng::Rand64;
#[cfg(feature = "os_seed")]
pub use crate::util::generate_seed;
