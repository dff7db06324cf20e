// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Helper functions for implementing `Source64` methods.
//!
//! For cross-platform reproducibility these functions all use little-endian
//! order: least-significant part first. Byte-swapping (like the std `to_le`
//! functions) is only needed to convert to/from byte sequences, and since its
//! purpose is reproducibility, non-reproducible sources need not bother with
//! it.

use crate::Source64;

/// Implement `fill_bytes` via `next_u64`, little-endian order.
///
/// A whole number of `u64` values is consumed even when `dest` is not a
/// multiple of 8 bytes; the unused bytes of the final word are dropped.
pub fn fill_bytes_via_next<R: Source64 + ?Sized>(rng: &mut R, dest: &mut [u8]) {
    let mut left = dest;
    while left.len() >= 8 {
        let (l, r) = { left }.split_at_mut(8);
        left = r;
        l.copy_from_slice(&rng.next_u64().to_le_bytes());
    }
    let n = left.len();
    if n > 0 {
        let chunk = rng.next_u64().to_le_bytes();
        left.copy_from_slice(&chunk[..n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::StepRng;

    #[test]
    fn test_fill_bytes_via_next() {
        let mut rng = StepRng::new(0x11_22_33_44_55_66_77_88, 0);

        // Aligned case: two whole words, little-endian.
        let mut buf = [0u8; 16];
        fill_bytes_via_next(&mut rng, &mut buf);
        let expected = [0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11];
        assert_eq!(buf[..8], expected);
        assert_eq!(buf[8..], expected);

        // Unaligned case: the trailing word is truncated.
        let mut buf = [0u8; 11];
        fill_bytes_via_next(&mut rng, &mut buf);
        assert_eq!(buf[..8], expected);
        assert_eq!(buf[8..], expected[..3]);
    }
}
