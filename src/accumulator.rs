// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The in-flight word of loaded-but-unread bits.

use super::MAX_BITS;

/// Up to 64 bits which have been loaded from the source
/// but not yet handed to the caller.
///
/// Bits are kept left-justified: the next bit to be read
/// is always bit 63 of the word.  Everything below the
/// valid bits is zero, so taking more bits than are valid
/// yields zeroes rather than stale or padding data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Accumulator {
    word: u64,
    valid: u32,
}

impl Accumulator {
    /// Returns an empty accumulator.
    #[inline]
    pub fn new() -> Accumulator {
        Accumulator { word: 0, valid: 0 }
    }

    /// Replaces the contents with the top `bits` bits of `word`.
    /// Any bits still held are lost.
    ///
    /// Bits below those are discarded here, which is what keeps
    /// a final partial byte's padding from ever being read.
    #[inline]
    pub fn fill(&mut self, word: u64, bits: u32) {
        debug_assert!(bits <= MAX_BITS);
        self.word = word & high_mask(bits);
        self.valid = bits;
    }

    /// Removes the top `bits` bits and returns them right-justified.
    ///
    /// `bits` may be anything from 0 to 64 inclusive.
    /// Callers should never take more than [`Accumulator::len`] bits;
    /// any extra bits come back as zero.
    #[inline]
    pub fn take(&mut self, bits: u32) -> u64 {
        debug_assert!(bits <= MAX_BITS);
        // shifting a u64 by 64 is out of range, not zero
        let value = self.word.checked_shr(MAX_BITS - bits).unwrap_or(0);
        self.word = self.word.checked_shl(bits).unwrap_or(0);
        self.valid = self.valid.saturating_sub(bits);
        value
    }

    /// Number of valid bits still held.
    #[inline]
    pub fn len(&self) -> u32 {
        self.valid
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.valid == 0
    }

    /// The raw left-justified word.
    #[inline]
    pub fn word(&self) -> u64 {
        self.word
    }
}

/// A mask of the `bits` most-significant bits of a `u64`.
#[inline]
fn high_mask(bits: u32) -> u64 {
    u64::MAX.checked_shr(bits).map_or(u64::MAX, |low| !low)
}
