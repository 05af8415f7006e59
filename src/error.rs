// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors produced while constructing or reading from a bit stream.

use thiserror::Error;

/// Result type for bit stream operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can go wrong while reading bits.
///
/// None of these are transient; retrying the same call
/// on the same reader will fail the same way.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// A read asked for more bits than fit in a `u64`.
    #[error("{0} bits exceeds maximum bit size (64)")]
    InvalidWidth(u32),
    /// A read needed more bits than the stream has left.
    #[error("BitStrm buffer ran out of bits")]
    Exhausted,
    /// A bit-length override was longer than the buffer itself.
    #[error("size of {size} bits exceeds buffer length ({available} bits)")]
    SizeTooLarge {
        /// the requested logical length
        size: u64,
        /// the buffer's whole length in bits
        available: u64,
    },
}

impl Error {
    /// A short, static description of this error's kind
    /// for targets where formatted messages are unavailable.
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::InvalidWidth(_) => "invalid bit width",
            Error::Exhausted => "BitStrm buffer ran out of bits",
            Error::SizeTooLarge { .. } => "size exceeds buffer length",
        }
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        use std::io::ErrorKind;

        let kind = match err {
            Error::Exhausted => ErrorKind::UnexpectedEof,
            Error::InvalidWidth(_) | Error::SizeTooLarge { .. } => ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, err)
    }
}

#[cfg(all(feature = "alloc", not(feature = "std")))]
impl From<Error> for core2::io::Error {
    fn from(err: Error) -> Self {
        use core2::io::ErrorKind;

        let kind = match err {
            Error::Exhausted => ErrorKind::UnexpectedEof,
            Error::InvalidWidth(_) | Error::SizeTooLarge { .. } => ErrorKind::InvalidInput,
        };
        core2::io::Error::new(kind, err.as_str())
    }
}
