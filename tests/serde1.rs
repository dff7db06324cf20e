// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg(feature = "serde1")]

//! Serialization round trips through the facade crate's re-exports.

use rand64::{Mt64, Pcg64, Source64, SplitMix64, XorShift1024Star, Xoshiro256StarStar};

fn roundtrip<R>(mut rng: R)
where
    R: Source64 + serde::Serialize + serde::de::DeserializeOwned,
{
    rng.next_u64();
    let buf = bincode::serialize(&rng).expect("Could not serialize");
    let mut restored: R = bincode::deserialize(&buf).expect("Could not deserialize");
    for _ in 0..16 {
        assert_eq!(rng.next_u64(), restored.next_u64());
    }
}

#[test]
fn state_survives_serialization() {
    roundtrip(SplitMix64::new(1));
    roundtrip(XorShift1024Star::new(2));
    roundtrip(Xoshiro256StarStar::new(3));
    roundtrip(Mt64::new(4));
    roundtrip(Pcg64::new(5));
}
