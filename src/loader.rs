// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Refilling the accumulator from a byte view.
//!
//! Under the default [`LoadStrategy::Widest`], each reload fetches
//! the largest of 8, 4, 2 or 1 bytes which both sits on a natural
//! boundary of the current offset and lies wholly within the
//! stream's remaining logical bits.  Fewer, wider fetches are
//! only a speed concern; [`LoadStrategy::Bytewise`] always
//! fetches a single byte and yields the very same bits.
//!
//! ## Example
//! ```
//! use bitstrm::{Accumulator, ByteView, ChunkLoader};
//!
//! let data = [0x12, 0x34, 0x56];
//! let mut loader = ChunkLoader::new(ByteView::new(&data));
//! let mut acc = Accumulator::new();
//!
//! loader.reload(&mut acc).unwrap();
//! assert_eq!(acc.len(), 16);
//! assert_eq!(acc.take(16), 0x1234);
//!
//! loader.reload(&mut acc).unwrap();
//! assert_eq!(acc.len(), 8);
//! assert_eq!(acc.take(8), 0x56);
//!
//! assert!(loader.reload(&mut acc).is_err());
//! ```

use super::accumulator::Accumulator;
use super::byte_io::ByteView;
use super::error::{Error, Result};

/// How a [`ChunkLoader`] sizes each fetch from its source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStrategy {
    /// The widest aligned 64, 32, 16 or 8 bit fetch available.
    #[default]
    Widest,
    /// Always a single byte.
    Bytewise,
}

/// Walks a [`ByteView`] forward one chunk at a time.
#[derive(Clone, Debug)]
pub struct ChunkLoader<'a> {
    view: ByteView<'a>,
    cursor: usize,
    remaining: u64,
    strategy: LoadStrategy,
}

impl<'a> ChunkLoader<'a> {
    /// Starts loading from the beginning of the view
    /// using the default strategy.
    pub fn new(view: ByteView<'a>) -> ChunkLoader<'a> {
        ChunkLoader::with_strategy(view, LoadStrategy::default())
    }

    pub fn with_strategy(view: ByteView<'a>, strategy: LoadStrategy) -> ChunkLoader<'a> {
        ChunkLoader {
            view,
            cursor: 0,
            remaining: view.len_bits(),
            strategy,
        }
    }

    /// Logical bits not yet loaded into any accumulator.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Byte offset of the next fetch.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn view(&self) -> &ByteView<'a> {
        &self.view
    }

    /// Fills an empty accumulator with the next chunk.
    ///
    /// An accumulator still holding unread bits is left alone
    /// and nothing is loaded; drain it first.
    /// Returns [`Error::Exhausted`] if no logical bits remain,
    /// in which case neither the loader nor the accumulator change.
    pub fn reload(&mut self, acc: &mut Accumulator) -> Result<()> {
        if !acc.is_empty() {
            return Ok(());
        }
        let (word, bits) = match self.strategy {
            LoadStrategy::Widest => self.load_widest(),
            LoadStrategy::Bytewise => self.load_byte(),
        }
        .ok_or(Error::Exhausted)?;

        tracing::trace!(
            cursor = self.cursor,
            bits,
            remaining = self.remaining,
            "reloaded accumulator"
        );
        acc.fill(word, bits);
        Ok(())
    }

    fn load_widest(&mut self) -> Option<(u64, u32)> {
        if self.fits::<8>() {
            self.load::<8>()
        } else if self.fits::<4>() {
            self.load::<4>()
        } else if self.fits::<2>() {
            self.load::<2>()
        } else {
            self.load_byte()
        }
    }

    /// Whether an `N`-byte fetch is both aligned at the cursor
    /// and entirely made of logical bits.
    #[inline]
    fn fits<const N: usize>(&self) -> bool {
        self.cursor % N == 0 && self.remaining >= (N as u64) * 8
    }

    /// Fetches `N` whole bytes as a left-justified big-endian word.
    #[inline]
    fn load<const N: usize>(&mut self) -> Option<(u64, u32)> {
        let bytes = self.view.fetch::<N>(self.cursor)?;
        let mut word = [0; 8];
        word[..N].copy_from_slice(&bytes);
        let bits = (N as u32) * 8;

        self.cursor += N;
        self.remaining -= u64::from(bits);
        Some((u64::from_be_bytes(word), bits))
    }

    /// Fetches one byte, of which only as many bits as
    /// remain in the stream are counted as valid.
    #[inline]
    fn load_byte(&mut self) -> Option<(u64, u32)> {
        if self.remaining == 0 {
            return None;
        }
        let [byte] = self.view.fetch::<1>(self.cursor)?;
        let bits = self.remaining.min(8) as u32;

        self.cursor += 1;
        self.remaining -= u64::from(bits);
        Some((u64::from(byte) << 56, bits))
    }
}
