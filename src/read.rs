// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traits and implementations for reading bits from a byte buffer.
//!
//! ## Example
//! ```
//! use bitstrm::{BitRead, BitReader};
//!
//! let flac: Vec<u8> = vec![0x66,0x4C,0x61,0x43,0x00,0x00,0x00,0x22,
//!                          0x10,0x00,0x10,0x00,0x00,0x06,0x06,0x00,
//!                          0x21,0x62,0x0A,0xC4,0x42,0xF0,0x00,0x04,
//!                          0xA6,0xCC,0xFA,0xF2,0x69,0x2F,0xFD,0xEC,
//!                          0x2D,0x5B,0x30,0x01,0x76,0xB4,0x62,0x88,
//!                          0x7D,0x92];
//!
//! let mut reader = BitReader::new(&flac);
//! assert_eq!(reader.getbits(32).unwrap(), 0x664C6143); // "fLaC"
//!
//! let last_block = reader.getbits(1).unwrap();
//! let block_type = reader.getbits(7).unwrap();
//! let block_size = reader.getbits(24).unwrap();
//! assert_eq!(last_block, 0);
//! assert_eq!(block_type, 0);
//! assert_eq!(block_size, 34);
//!
//! let minimum_block_size = reader.getbits(16).unwrap();
//! let maximum_block_size = reader.getbits(16).unwrap();
//! let minimum_frame_size = reader.getbits(24).unwrap();
//! let maximum_frame_size = reader.getbits(24).unwrap();
//! let sample_rate = reader.getbits(20).unwrap();
//! let channels = reader.getbits(3).unwrap() + 1;
//! let bits_per_sample = reader.getbits(5).unwrap() + 1;
//! let total_samples = reader.getbits(36).unwrap();
//! assert_eq!(minimum_block_size, 4096);
//! assert_eq!(maximum_block_size, 4096);
//! assert_eq!(minimum_frame_size, 1542);
//! assert_eq!(maximum_frame_size, 8546);
//! assert_eq!(sample_rate, 44100);
//! assert_eq!(channels, 2);
//! assert_eq!(bits_per_sample, 16);
//! assert_eq!(total_samples, 304844);
//!
//! // the MD5 signature is the final 128 bits
//! assert_eq!(reader.bits_remaining(), 128);
//! assert_eq!(reader.getbits(64).unwrap(), 0xFAF2692FFDEC2D5B);
//! assert_eq!(reader.getbits(64).unwrap(), 0x300176B462887D92);
//! assert!(reader.is_empty());
//! ```

use super::accumulator::Accumulator;
use super::byte_io::ByteView;
use super::error::{Error, Result};
use super::loader::{ChunkLoader, LoadStrategy};
use super::MAX_BITS;

/// For reading MSB-first bit values from an underlying stream.
pub trait BitRead {
    /// Reads the next `bits` bits as an unsigned value
    /// whose most-significant bit is the earliest one read.
    ///
    /// `bits` may be from 0 to 64; reading 0 bits always
    /// returns 0 and leaves the stream untouched.
    fn getbits(&mut self, bits: u32) -> Result<u64>;

    /// Number of bits left in the stream.
    fn bits_remaining(&self) -> u64;

    /// Returns true if no bits are left in the stream.
    #[inline]
    fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Reads a single bit.
    #[inline]
    fn read_bit(&mut self) -> Result<bool> {
        self.getbits(1).map(|bit| bit != 0)
    }

    /// Skips the given number of bits in the stream.
    /// Since nothing is accumulated, there is no upper limit
    /// on the number of bits which may be skipped.
    /// Nothing is skipped if the stream is shorter than `bits`.
    fn skip(&mut self, mut bits: u32) -> Result<()> {
        if u64::from(bits) > self.bits_remaining() {
            return Err(Error::Exhausted);
        }
        while bits > 0 {
            let step = bits.min(MAX_BITS);
            self.getbits(step)?;
            bits -= step;
        }
        Ok(())
    }

    /// Counts the number of 1 bits in the stream until the next
    /// 0 bit and returns the amount read.
    fn read_unary0(&mut self) -> Result<u32> {
        let mut acc = 0;
        while self.read_bit()? {
            acc += 1;
        }
        Ok(acc)
    }

    /// Counts the number of 0 bits in the stream until the next
    /// 1 bit and returns the amount read.
    fn read_unary1(&mut self) -> Result<u32> {
        let mut acc = 0;
        while !self.read_bit()? {
            acc += 1;
        }
        Ok(acc)
    }
}

/// Construction-time settings for a [`BitReader`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Logical stream length in bits, if shorter than the buffer.
    pub size: Option<u64>,
    /// How chunks are fetched from the buffer.
    pub strategy: LoadStrategy,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    /// Limits the stream to its first `size` bits.
    pub fn size(mut self, size: u64) -> Options {
        self.size = Some(size);
        self
    }

    pub fn strategy(mut self, strategy: LoadStrategy) -> Options {
        self.strategy = strategy;
        self
    }
}

/// Reads big-endian bit values from a borrowed byte buffer.
///
/// Reads are destructive and forward-only.
/// A failed read leaves the reader exactly as it was,
/// so a shorter read may still succeed afterward.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    loader: ChunkLoader<'a>,
    acc: Accumulator,
}

impl<'a> BitReader<'a> {
    /// Reads every bit of the given buffer.
    pub fn new(bytes: &'a [u8]) -> BitReader<'a> {
        BitReader::from_view(ByteView::new(bytes), LoadStrategy::default())
    }

    /// Reads only the first `size` bits of the given buffer,
    /// ignoring the least-significant bits of its final byte(s).
    ///
    /// Fails with [`Error::SizeTooLarge`] if `size` exceeds
    /// the buffer's length in bits.
    ///
    /// A `size` of 0 is taken literally and yields an empty stream;
    /// it does not mean "the whole buffer".  Use [`BitReader::new`]
    /// to read every bit.
    ///
    /// ## Example
    /// ```
    /// use bitstrm::{BitRead, BitReader, Error};
    ///
    /// let mut reader = BitReader::with_size(b"\x12\x34", 15).unwrap();
    /// assert_eq!(reader.getbits(15).unwrap(), 0x091A);
    /// assert_eq!(reader.getbits(1), Err(Error::Exhausted));
    ///
    /// let empty = BitReader::with_size(b"\x12\x34", 0).unwrap();
    /// assert!(empty.is_empty());
    /// ```
    pub fn with_size(bytes: &'a [u8], size: u64) -> Result<BitReader<'a>> {
        BitReader::with_options(bytes, Options::new().size(size))
    }

    pub fn with_options(bytes: &'a [u8], options: Options) -> Result<BitReader<'a>> {
        let view = match options.size {
            Some(size) => ByteView::with_bits(bytes, size)?,
            None => ByteView::new(bytes),
        };
        if view.len_bits() < bytes.len() as u64 * 8 {
            tracing::debug!(
                size = view.len_bits(),
                bytes = bytes.len(),
                "reading truncated bit stream"
            );
        }
        Ok(BitReader::from_view(view, options.strategy))
    }

    pub fn from_view(view: ByteView<'a>, strategy: LoadStrategy) -> BitReader<'a> {
        BitReader {
            loader: ChunkLoader::with_strategy(view, strategy),
            acc: Accumulator::new(),
        }
    }

    /// The stream's logical length in bits.
    #[inline]
    pub fn len_bits(&self) -> u64 {
        self.loader.view().len_bits()
    }

    /// Number of bits consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.len_bits() - self.bits_remaining()
    }

    /// Returns true if the next read starts on a whole byte.
    #[inline]
    pub fn byte_aligned(&self) -> bool {
        self.position() % 8 == 0
    }
}

impl<'a> BitRead for BitReader<'a> {
    fn getbits(&mut self, mut bits: u32) -> Result<u64> {
        if bits > MAX_BITS {
            tracing::debug!(bits, "bit width out of range");
            return Err(Error::InvalidWidth(bits));
        }
        if bits == 0 {
            return Ok(0);
        }
        if u64::from(bits) > self.bits_remaining() {
            tracing::debug!(
                bits,
                remaining = self.bits_remaining(),
                "bit stream exhausted"
            );
            return Err(Error::Exhausted);
        }

        let mut value = 0;
        /*drain the accumulator before each reload*/
        while bits > self.acc.len() {
            let available = self.acc.len();
            value = append(value, available, self.acc.take(available));
            bits -= available;
            self.loader.reload(&mut self.acc)?;
        }
        Ok(append(value, bits, self.acc.take(bits)))
    }

    #[inline]
    fn bits_remaining(&self) -> u64 {
        u64::from(self.acc.len()) + self.loader.remaining()
    }
}

/// Appends `bits` bits of `low` below those already in `high`.
#[inline]
fn append(high: u64, bits: u32, low: u64) -> u64 {
    high.checked_shl(bits).unwrap_or(0) | low
}
