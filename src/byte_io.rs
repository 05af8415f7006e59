// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A read-only window over borrowed bytes.

use super::error::{Error, Result};

/// Borrowed source bytes plus the number of bits in them
/// which actually belong to the stream.
///
/// The view never copies and never outlives its bytes.
/// Any bits beyond the logical length are taken from
/// the least-significant end of the final byte.
#[derive(Copy, Clone, Debug)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
    bits: u64,
}

impl<'a> ByteView<'a> {
    /// Views the whole buffer, `8 × len` bits.
    pub fn new(bytes: &'a [u8]) -> ByteView<'a> {
        ByteView {
            bytes,
            bits: whole_bits(bytes),
        }
    }

    /// Views only the first `bits` bits of the buffer.
    ///
    /// Fails with [`Error::SizeTooLarge`] if the buffer
    /// doesn't actually hold that many bits.
    pub fn with_bits(bytes: &'a [u8], bits: u64) -> Result<ByteView<'a>> {
        let available = whole_bits(bytes);
        if bits > available {
            tracing::debug!(size = bits, available, "bit length override too large");
            Err(Error::SizeTooLarge {
                size: bits,
                available,
            })
        } else {
            Ok(ByteView { bytes, bits })
        }
    }

    /// The logical number of bits in the stream.
    #[inline]
    pub fn len_bits(&self) -> u64 {
        self.bits
    }

    /// Fetches `N` bytes starting at `offset`,
    /// or `None` if they would run past the end of the buffer.
    #[inline]
    pub fn fetch<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        let end = offset.checked_add(N)?;
        self.bytes.get(offset..end)?.try_into().ok()
    }
}

#[inline]
fn whole_bits(bytes: &[u8]) -> u64 {
    bytes.len() as u64 * 8
}
