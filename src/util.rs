// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Seed material from the OS entropy source.

/// Fill a `Vec` of `n` words with random data from the OS entropy source.
///
/// The returned slice is suitable as an argument to
/// [`SliceSeedable64::seed_from_slice`], for example to give each worker
/// thread an independently seeded generator.
///
/// [`SliceSeedable64::seed_from_slice`]: rand64_core::SliceSeedable64::seed_from_slice
pub fn generate_seed(n: usize) -> Result<Vec<u64>, getrandom::Error> {
    let mut buf = vec![0u8; n * 8];
    getrandom::getrandom(&mut buf)?;

    let mut out = Vec::with_capacity(n);
    for chunk in buf.chunks_exact(8) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        out.push(u64::from_le_bytes(word));
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::generate_seed;

    #[test]
    fn generate_seed_len() {
        let seed = generate_seed(16).unwrap();
        assert_eq!(seed.len(), 16);
        // Sixteen words from the OS are never all zero.
        assert!(seed.iter().any(|&w| w != 0));
    }

    #[test]
    fn generate_seed_empty() {
        assert!(generate_seed(0).unwrap().is_empty());
    }
}
