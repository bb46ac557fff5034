// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message blocks and the message schedule per FIPS 180-4 Section 6.2.2 step 1

use alloc::vec::Vec;

use crate::consts::BLOCK_WORDS;
use crate::error::ConfigError;
use crate::word::Word;

/// One message block: exactly 16 words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageBlock<W: Word>([W; BLOCK_WORDS]);

impl<W: Word> MessageBlock<W> {
    /// Wrap 16 words
    pub const fn new(words: [W; BLOCK_WORDS]) -> Self {
        Self(words)
    }

    /// Build from a slice, which must hold exactly 16 words
    pub fn from_words(words: &[W]) -> Result<Self, ConfigError> {
        let words: [W; BLOCK_WORDS] = words
            .try_into()
            .map_err(|_| ConfigError::InvalidBlockLength { words: words.len() })?;

        Ok(Self(words))
    }

    /// Decode a big-endian block of `W::WIDTH.block_len()` bytes
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let word_len = W::WIDTH.bytes();
        let block_len = W::WIDTH.block_len();
        if bytes.len() != block_len {
            return Err(ConfigError::InvalidBlockBytes {
                len: bytes.len(),
                block_len,
            });
        }

        let mut words = [W::default(); BLOCK_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(word_len)) {
            *word = W::from_be_slice(chunk);
        }

        Ok(Self(words))
    }

    /// Block words in order
    pub fn words(&self) -> &[W; BLOCK_WORDS] {
        &self.0
    }

    /// Big-endian encoding of the block
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(W::WIDTH.block_len());
        for word in self.0 {
            word.extend_be(&mut out);
        }
        out
    }
}

/// Expanded message words W[0..R)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSchedule<W: Word> {
    words: Vec<W>,
}

impl<W: Word> RoundSchedule<W> {
    /// Expand `block` into `rounds` schedule words
    ///
    /// W[t] = W[t-16] + σ0(W[t-15]) + W[t-7] + σ1(W[t-2])  for 16 <= t < R
    pub fn expand(block: &MessageBlock<W>, rounds: usize) -> Result<Self, ConfigError> {
        W::WIDTH.check_rounds(rounds)?;

        let mut words = Vec::with_capacity(rounds);
        words.extend_from_slice(block.words());

        for t in BLOCK_WORDS..rounds {
            let wt = W::add_all([
                words[t - 16],
                words[t - 15].ssig0(),
                words[t - 7],
                words[t - 2].ssig1(),
            ]);
            words.push(wt);
        }

        Ok(Self { words })
    }

    /// Number of rounds this schedule drives
    pub fn rounds(&self) -> usize {
        self.words.len()
    }

    /// Schedule words in round order
    pub fn as_slice(&self) -> &[W] {
        &self.words
    }
}
