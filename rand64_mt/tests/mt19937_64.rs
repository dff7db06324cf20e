// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rand64_core::{Seedable64, SliceSeedable64, Source64};
use rand64_mt::Mt64;

#[test]
fn reference_init_by_array() {
    // First outputs of mt19937-64.out from the reference distribution,
    // produced with init_by_array({0x12345, 0x23456, 0x34567, 0x45678}).
    let mut rng = Mt64::default();
    rng.seed_from_slice(&[0x12345, 0x23456, 0x34567, 0x45678]);

    let expected = [
        7266447313870364031,
        4946485549665804864,
        16945909448695747420,
        16394063075524226720,
        4873882236456199058,
        14877448043947020171,
        6740343660852211943,
        13857871200353263164,
        5249110015610582907,
        10205081126064480383,
    ];
    for &e in &expected {
        assert_eq!(rng.next_u64(), e);
    }

    // Outputs 1011..=1020 of the same stream, after discarding 1000 more.
    for _ in 0..1000 {
        rng.next_u64();
    }
    let expected = [
        14907209235746902445,
        15452338815569321965,
        17045090235069538607,
        15507333859934612093,
        157175897107904252,
        2578005313950236321,
        6502648805754593060,
        13133523174961431106,
        2698278206396822833,
        3278969850082110371,
    ];
    for &e in &expected {
        assert_eq!(rng.next_u64(), e);
    }
}

#[test]
fn reference_scalar_seed() {
    let mut rng = Mt64::new(1387366483214);
    let expected = [
        10396991866536466786,
        14340416747966418092,
        11957812660482947740,
        6599276423578824276,
        8419452403468955872,
        4739843759468008117,
        7612761444118286253,
        12226897363602139623,
    ];
    for &e in &expected {
        assert_eq!(rng.next_u64(), e);
    }
}

#[test]
fn default_seed_on_first_use() {
    // An unseeded generator behaves as if seeded with the reference
    // default seed 5489; seeding with 0 does the same.
    let mut unseeded = Mt64::default();
    let mut zero = Mt64::new(0);
    let mut explicit = Mt64::new(5489);

    let expected = [
        14514284786278117030,
        4620546740167642908,
        13109570281517897720,
        17462938647148434322,
    ];
    for &e in &expected {
        assert_eq!(unseeded.next_u64(), e);
        assert_eq!(zero.next_u64(), e);
        assert_eq!(explicit.next_u64(), e);
    }
}

#[test]
fn reseed_restarts_stream() {
    let mut rng = Mt64::new(42);
    let first = [rng.next_u64(), rng.next_u64(), rng.next_u64(), rng.next_u64()];
    rng.seed(42);
    let again = [rng.next_u64(), rng.next_u64(), rng.next_u64(), rng.next_u64()];
    assert_eq!(first, again);
}

#[test]
fn empty_key_uses_default_seed() {
    let mut from_empty = Mt64::default();
    from_empty.seed_from_slice(&[]);
    let mut from_zero = Mt64::new(0);
    for _ in 0..16 {
        assert_eq!(from_empty.next_u64(), from_zero.next_u64());
    }
}

#[cfg(feature = "serde1")]
#[test]
fn serde_roundtrip() {
    // Serialize mid-stream so both the state array and the output cursor
    // are exercised.
    let mut rng = Mt64::new(1);
    for _ in 0..500 {
        rng.next_u64();
    }

    let buf = bincode::serialize(&rng).expect("Could not serialize");
    let mut restored: Mt64 = bincode::deserialize(&buf).expect("Could not deserialize");

    assert_eq!(rng, restored);
    for _ in 0..400 {
        assert_eq!(rng.next_u64(), restored.next_u64());
    }
}
