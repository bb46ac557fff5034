// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;
use trailcheck_core::ConfigError;

/// Errors raised while decoding or verifying a characteristic
///
/// A digest mismatch is not an error; see
/// [`VerificationReport::matched`](crate::VerificationReport::matched).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffError {
    /// Character outside the `0`, `1`, `n`, `u` alphabet
    #[error("invalid difference symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// Offending character
        symbol: char,
        /// Zero-based position within the word string
        position: usize,
    },

    /// Word string does not have one symbol per bit of the word
    #[error("difference word has {actual} symbols, expected {expected}")]
    WordLength {
        /// Word width in bits
        expected: usize,
        /// Symbols supplied
        actual: usize,
    },

    /// Byte conversion of a word whose length is not a multiple of 8
    #[error("{bits}-bit difference word cannot be split into bytes")]
    ByteMisaligned {
        /// Word length in bits
        bits: usize,
    },

    /// Word string longer than 64 symbols
    #[error("difference word of {bits} symbols exceeds 64 bits")]
    WordTooWide {
        /// Symbols supplied
        bits: usize,
    },

    /// Word value with bits above the word width
    #[error("word {index} ({value:#x}) does not fit in {width} bits")]
    WordOverflow {
        /// Position of the word in the block (0 = base, 1 = partner for a pair)
        index: usize,
        /// Offending value
        value: u64,
        /// Word width in bits
        width: u32,
    },

    /// Characteristic without any message block
    #[error("characteristic has no message blocks")]
    EmptyMessage,

    /// Invalid variant parameters or message layout
    #[error(transparent)]
    Config(#[from] ConfigError),
}
