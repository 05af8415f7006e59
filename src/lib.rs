// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading runs of 1 to 64 bits, most-significant bit first,
//! out of a borrowed byte buffer.
//!
//! A [`BitReader`] is built from any `&[u8]` and, optionally,
//! a logical length in bits shorter than the buffer itself.
//! Each [`BitRead::getbits`] call consumes the next bits of
//! the stream and returns them as a `u64` whose top bit is
//! the earliest bit read, regardless of how those bits
//! were split across the reader's internal chunks.
//!
//! ```
//! use bitstrm::{BitRead, BitReader};
//!
//! let mut reader = BitReader::new(b"\x12\x34");
//! assert_eq!(reader.getbits(4).unwrap(), 0x1);
//! assert_eq!(reader.getbits(8).unwrap(), 0x23);
//! assert_eq!(reader.getbits(4).unwrap(), 0x4);
//! assert!(reader.getbits(1).is_err());
//! ```
//!
//! The `std` feature is on by default.  Without it the crate is
//! `no_std`, and the `alloc` feature converts errors into
//! `core2::io::Error` instead of `std::io::Error`.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod accumulator;
pub mod byte_io;
pub mod error;
pub mod loader;
pub mod read;

pub use accumulator::Accumulator;
pub use byte_io::ByteView;
pub use error::{Error, Result};
pub use loader::{ChunkLoader, LoadStrategy};
pub use read::{BitRead, BitReader, Options};

/// The widest value a single read may return, in bits.
pub const MAX_BITS: u32 = u64::BITS;
