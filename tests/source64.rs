// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Contract tests exercised across every generator in the family.

use rand64::{
    Mt64, Pcg64, Seedable64, Source64, SplitMix64, XorShift1024Star, XorShift128Plus,
    XorShift64Star, Xoroshiro128Plus, Xoroshiro128StarStar, Xoshiro256Plus, Xoshiro256StarStar,
};

fn sources(seed: u64) -> Vec<Box<dyn Source64>> {
    vec![
        Box::new(SplitMix64::new(seed)),
        Box::new(XorShift64Star::new(seed)),
        Box::new(XorShift128Plus::new(seed)),
        Box::new(XorShift1024Star::new(seed)),
        Box::new(Xoroshiro128Plus::new(seed)),
        Box::new(Xoroshiro128StarStar::new(seed)),
        Box::new(Xoshiro256Plus::new(seed)),
        Box::new(Xoshiro256StarStar::new(seed)),
        Box::new(Mt64::new(seed)),
        Box::new(Pcg64::new(seed)),
    ]
}

#[test]
fn same_seed_same_stream() {
    for (a, b) in sources(12345).iter_mut().zip(sources(12345).iter_mut()) {
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }
}

#[test]
fn distinct_algorithms_distinct_streams() {
    // Ten draws from each generator under a common seed; no two
    // algorithms may agree on the whole prefix.
    let streams: Vec<Vec<u64>> = sources(42)
        .iter_mut()
        .map(|s| (0..10).map(|_| s.next_u64()).collect())
        .collect();
    for i in 0..streams.len() {
        for j in i + 1..streams.len() {
            assert_ne!(streams[i], streams[j], "generators {} and {}", i, j);
        }
    }
}

#[test]
fn int63_is_non_negative() {
    for src in sources(7).iter_mut() {
        for _ in 0..32 {
            assert!(src.int63() >= 0);
        }
    }
}

#[test]
fn fill_bytes_matches_words() {
    for seed in [0u64, 1, u64::MAX] {
        for (a, b) in sources(seed).iter_mut().zip(sources(seed).iter_mut()) {
            let mut buf = [0u8; 24];
            a.fill_bytes(&mut buf);
            for chunk in buf.chunks_exact(8) {
                assert_eq!(chunk, b.next_u64().to_le_bytes());
            }
        }
    }
}

#[test]
fn reseed_is_deterministic() {
    let mut rng = Xoshiro256Plus::new(1);
    let mut reference = Xoshiro256Plus::new(2);
    rng.next_u64();
    rng.seed(2);
    for _ in 0..32 {
        assert_eq!(rng.next_u64(), reference.next_u64());
    }
}
