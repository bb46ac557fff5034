// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Configuration error
///
/// Raised before any compression runs. None of these are retryable: the
/// inputs describe a variant or message that the engine cannot evaluate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Only 32- and 64-bit words exist in SHA-2
    #[error("unsupported word width: {0} bits (expected 32 or 64)")]
    UnsupportedWidth(u32),

    /// Round count outside `16..=max` for the word width
    #[error("round count {rounds} outside 16..={max} for {width}-bit words")]
    InvalidRounds {
        /// Word width in bits
        width: u32,
        /// Requested round count
        rounds: usize,
        /// Largest round count for the width
        max: usize,
    },

    /// Digest length is zero, not a multiple of 32, or wider than the state
    #[error("digest length of {bits} bits must be a non-zero multiple of 32 up to {max}")]
    InvalidDigestBits {
        /// Requested digest length in bits
        bits: usize,
        /// State size in bits (8 * width)
        max: usize,
    },

    /// No standard SHA-2 variant has this (width, digest length) pair
    #[error("no canonical SHA-2 variant with {width}-bit words and a {bits}-bit digest")]
    UnsupportedVariant {
        /// Word width in bits
        width: u32,
        /// Requested digest length in bits
        bits: usize,
    },

    /// IV word carries bits above the word width
    #[error("IV word {index} ({value:#x}) does not fit in {width} bits")]
    IvOutOfRange {
        /// Position of the word in the IV (0 = a)
        index: usize,
        /// Offending value
        value: u64,
        /// Word width in bits
        width: u32,
    },

    /// Unpadded message is not a whole number of blocks
    #[error("unpadded message of {len} bytes is not a non-zero multiple of {block_len} bytes")]
    UnalignedMessage {
        /// Message length in bytes
        len: usize,
        /// Block length in bytes
        block_len: usize,
    },

    /// Message block decoded from a byte slice of the wrong length
    #[error("message block must be exactly {block_len} bytes, got {len}")]
    InvalidBlockBytes {
        /// Bytes supplied
        len: usize,
        /// Block length in bytes
        block_len: usize,
    },

    /// Message block built from a slice that does not hold 16 words
    #[error("message block must hold exactly 16 words, got {words}")]
    InvalidBlockLength {
        /// Number of words supplied
        words: usize,
    },
}
