// Copyright 2024 The rand64 project developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A wrapper around any Read to treat it as a 64-bit source.

use std::fmt::Debug;
use std::io::Read;

use rand64_core::{Seedable64, SliceSeedable64, Source64};

/// Byte order used to assemble a `u64` from raw stream bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first.
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
}

/// A 64-bit source that reads random values straight from a [`Read`],
/// for example an OS entropy device. This works best with an infinite
/// reader; the adapter does not buffer its input, so wrapping the reader
/// in a [`std::io::BufReader`] is recommended.
///
/// Reads can fail where generator output cannot, and `next_u64` stays
/// infallible: on a read error or short read it returns 0 and latches the
/// error, which callers inspect through [`error`] or [`take_error`] after
/// use. The adapter never retries on its own.
///
/// [`error`]: ReadRng::error
/// [`take_error`]: ReadRng::take_error
///
/// # Example
///
/// ```rust
/// use rand64::{ByteOrder, ReadRng, Source64};
///
/// let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
/// let mut rng = ReadRng::new(&data[..], ByteOrder::LittleEndian);
/// assert_eq!(rng.next_u64(), 0x0807060504030201);
/// assert!(rng.error().is_none());
/// ```
#[derive(Debug)]
pub struct ReadRng<R: Debug> {
    reader: R,
    byte_order: ByteOrder,
    err: Option<std::io::Error>,
}

impl<R: Read + Debug> ReadRng<R> {
    /// Create a new `ReadRng` from a `Read`, assembling words with the
    /// given byte order.
    pub fn new(r: R, byte_order: ByteOrder) -> ReadRng<R> {
        ReadRng { reader: r, byte_order, err: None }
    }

    /// Return the latched stream error, if any.
    pub fn error(&self) -> Option<&std::io::Error> {
        self.err.as_ref()
    }

    /// Return and clear the latched stream error, if any.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.err.take()
    }
}

impl<R: Read + Debug> Source64 for ReadRng<R> {
    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        if let Err(e) = self.reader.read_exact(&mut buf) {
            warn!("ReadRng: read failed: {}", e);
            self.err = Some(e);
            return 0;
        }
        match self.byte_order {
            ByteOrder::LittleEndian => u64::from_le_bytes(buf),
            ByteOrder::BigEndian => u64::from_be_bytes(buf),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.reader.read_exact(dest) {
            warn!("ReadRng: read failed: {}", e);
            self.err = Some(e);
            // read_exact leaves the buffer contents unspecified on error.
            for byte in dest.iter_mut() {
                *byte = 0;
            }
        }
    }
}

impl<R: Read + Debug> Seedable64 for ReadRng<R> {
    /// No-op; the stream provides its own entropy.
    fn seed(&mut self, _seed: u64) {}
}

impl<R: Read + Debug> SliceSeedable64 for ReadRng<R> {
    /// No-op; the stream provides its own entropy.
    fn seed_from_slice(&mut self, _key: &[u64]) {}
}

#[cfg(test)]
mod test {
    use super::{ByteOrder, ReadRng};
    use rand64_core::Source64;

    #[test]
    fn reader_rng_u64() {
        let v = [
            0u8, 0, 0, 0, 0, 0, 0, 1, //
            0, 0, 0, 0, 0, 0, 0, 2, //
            0, 0, 0, 0, 0, 0, 0, 3,
        ];
        let mut rng = ReadRng::new(&v[..], ByteOrder::BigEndian);

        assert_eq!(rng.next_u64(), 1);
        assert_eq!(rng.next_u64(), 2);
        assert_eq!(rng.next_u64(), 3);
        assert!(rng.error().is_none());

        let mut rng = ReadRng::new(&v[..], ByteOrder::LittleEndian);
        assert_eq!(rng.next_u64(), 1 << 56);
    }

    #[test]
    fn reader_rng_latches_short_read() {
        // 8 good bytes then 4 stray ones: the first word succeeds without
        // touching the latch, the second latches and yields 0.
        let v = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let mut rng = ReadRng::new(&v[..], ByteOrder::LittleEndian);

        assert_eq!(rng.next_u64(), 0x0807060504030201);
        assert!(rng.error().is_none());

        assert_eq!(rng.next_u64(), 0);
        assert!(rng.error().is_some());

        assert!(rng.take_error().is_some());
        assert!(rng.error().is_none());
    }

    #[test]
    fn reader_rng_fill_bytes() {
        let v = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let mut w = [0u8; 8];

        let mut rng = ReadRng::new(&v[..], ByteOrder::LittleEndian);
        rng.fill_bytes(&mut w);
        assert_eq!(w, v);

        // Exhausted stream: the buffer is zeroed and the error latched.
        let mut w = [0xffu8; 8];
        rng.fill_bytes(&mut w);
        assert_eq!(w, [0u8; 8]);
        assert!(rng.error().is_some());
    }
}
