// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use trailcheck_core::{BLOCK_WORDS, STATE_WORDS, WordWidth};

/// How the initial chaining value of a characteristic is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartMode {
    /// Standard IV for the variant; the IV rows are only checked for
    /// valid symbols
    FixedIv,
    /// IV rows decoded into a base and a partner IV
    FreeIv,
}

/// A differential characteristic, already extracted from whatever file
/// format the search tool wrote
///
/// IV rows are ordered a..h. Every message entry is one 16-word block and
/// every word string carries one symbol per bit, MSB first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Characteristic {
    /// Word width of the attacked variant
    pub width: WordWidth,
    /// Rounds per compression
    pub rounds: usize,
    /// Digest length in bits
    pub digest_bits: usize,
    /// IV handling
    pub start: StartMode,
    /// Difference words for registers a..h
    pub iv: [String; STATE_WORDS],
    /// Difference words per block
    pub message: Vec<[String; BLOCK_WORDS]>,
}

impl Characteristic {
    /// Characteristic over a single block
    pub fn single_block(
        width: WordWidth,
        rounds: usize,
        digest_bits: usize,
        start: StartMode,
        iv: [String; STATE_WORDS],
        block: [String; BLOCK_WORDS],
    ) -> Self {
        Self {
            width,
            rounds,
            digest_bits,
            start,
            iv,
            message: vec![block],
        }
    }
}
