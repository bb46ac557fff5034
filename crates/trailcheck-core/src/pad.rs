// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message preparation per FIPS 180-4 Sections 5.1 and 5.2

use alloc::vec::Vec;

use crate::error::ConfigError;
use crate::schedule::MessageBlock;
use crate::word::{Word, WordWidth};

/// MD-strengthening padding
///
/// Appends a single 1 bit, zeros, and the message length in bits as a
/// big-endian field of two words (64 bits for W32, 128 bits for W64).
pub fn pad_message(message: &[u8], width: WordWidth) -> Vec<u8> {
    let block_len = width.block_len();
    let field_len = width.length_field_len();

    let bit_len = (message.len() as u128).wrapping_mul(8);

    let mut padded = Vec::with_capacity(message.len() + block_len + field_len);
    padded.extend_from_slice(message);
    padded.push(0x80);

    let zeros = (block_len - field_len + block_len - padded.len() % block_len) % block_len;
    padded.resize(padded.len() + zeros, 0);

    // W32 keeps the low 64 bits of the length
    padded.extend_from_slice(&bit_len.to_be_bytes()[16 - field_len..]);

    debug_assert_eq!(padded.len() % block_len, 0);
    padded
}

/// Split a block-aligned message into blocks
///
/// The message must be a non-zero multiple of the block length; padding is
/// the caller's business.
pub fn split_blocks<W: Word>(message: &[u8]) -> Result<Vec<MessageBlock<W>>, ConfigError> {
    let block_len = W::WIDTH.block_len();
    if message.is_empty() || message.len() % block_len != 0 {
        return Err(ConfigError::UnalignedMessage {
            len: message.len(),
            block_len,
        });
    }

    message
        .chunks_exact(block_len)
        .map(MessageBlock::from_be_bytes)
        .collect()
}

/// Pad (optionally) and split into blocks
pub fn prepare_blocks<W: Word>(
    message: &[u8],
    pad: bool,
) -> Result<Vec<MessageBlock<W>>, ConfigError> {
    if pad {
        split_blocks(&pad_message(message, W::WIDTH))
    } else {
        split_blocks(message)
    }
}
