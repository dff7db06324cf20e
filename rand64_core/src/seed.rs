// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Seed expansion for generators with multi-word state.
//!
//! Generators of the xorshift family must be seeded so that their state is
//! not everywhere zero. Both functions here guarantee that: the scalar form
//! expands the seed through [`SplitMix64`], whose avalanche mixing never
//! yields a full-length run of zero words in practice, and a zero scalar
//! seed is remapped to [`DEFAULT_SEED`] first.
//!
//! The same input always produces a bit-identical fill, so seeds can be
//! stored and replayed for reproducible runs.

use crate::{SplitMix64, Source64};

/// Replacement seed used by the scalar form when the given seed is 0.
pub const DEFAULT_SEED: u64 = 89482311;

/// Fill `state` with successive outputs of a [`SplitMix64`] seeded with
/// `seed`.
///
/// A zero `seed` is remapped to [`DEFAULT_SEED`].
pub fn seed_slice(state: &mut [u64], seed: u64) {
    let seed = if seed == 0 { DEFAULT_SEED } else { seed };
    let mut rng = SplitMix64::new(seed);
    for word in state.iter_mut() {
        *word = rng.next_u64();
    }
}

/// Fill `state` with words copied verbatim from `key`, in order.
///
/// If `key` is shorter than `state`, the remainder is completed with the
/// scalar form seeded from the last copied word (or 0, remapped to
/// [`DEFAULT_SEED`], if `key` is empty). If `key` is longer, the excess
/// words are ignored.
pub fn seed_from_slice(state: &mut [u64], key: &[u64]) {
    let n = key.len().min(state.len());
    state[..n].copy_from_slice(&key[..n]);
    if n < state.len() {
        let last = if n == 0 { 0 } else { key[n - 1] };
        seed_slice(&mut state[n..], last);
    }
}
