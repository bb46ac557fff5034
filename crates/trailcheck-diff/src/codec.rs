// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Difference codec: symbol strings to concrete (base, partner) values
//!
//! Symbols are read MSB-first. A bit is set in the base value for `1` and
//! `u`, and in the partner value for `1` and `n`.

use trailcheck_core::WordWidth;

use crate::error::DiffError;
use crate::symbol::{DiffSymbol, parse_symbols};

const MAX_BITS: usize = 64;

/// Concrete pair of values decoded from one difference word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordPair {
    base: u64,
    partner: u64,
    bits: usize,
}

impl WordPair {
    /// Pair from explicit values; `bits` is the word length
    ///
    /// Fails if `bits` exceeds 64 or either value has bits set above `bits`.
    pub fn new(base: u64, partner: u64, bits: usize) -> Result<Self, DiffError> {
        if bits > MAX_BITS {
            return Err(DiffError::WordTooWide { bits });
        }

        for (index, value) in [base, partner].into_iter().enumerate() {
            if value.checked_shr(bits as u32).unwrap_or(0) != 0 {
                return Err(DiffError::WordOverflow {
                    index,
                    value,
                    width: bits as u32,
                });
            }
        }

        Ok(Self::from_parts(base, partner, bits))
    }

    const fn from_parts(base: u64, partner: u64, bits: usize) -> Self {
        Self {
            base,
            partner,
            bits,
        }
    }

    /// Value of the first input
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Value of the second input
    pub const fn partner(&self) -> u64 {
        self.partner
    }

    /// Number of symbols decoded
    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// Active-bit mask, `base ^ partner`
    pub const fn difference(&self) -> u64 {
        self.base ^ self.partner
    }

    /// Whether any bit is active
    pub const fn is_active(&self) -> bool {
        self.difference() != 0
    }

    /// Both values as big-endian byte strings of `bits / 8` bytes
    pub fn to_bytes(&self) -> Result<(Vec<u8>, Vec<u8>), DiffError> {
        if self.bits % 8 != 0 {
            return Err(DiffError::ByteMisaligned { bits: self.bits });
        }

        let len = self.bits / 8;
        let be = |value: u64| value.to_be_bytes()[8 - len..].to_vec();

        Ok((be(self.base), be(self.partner)))
    }

    /// Render back into the symbol alphabet, MSB-first
    pub fn to_symbols(&self) -> String {
        (0..self.bits)
            .rev()
            .map(|i| {
                let bit = |value: u64| (value >> i) & 1 == 1;
                DiffSymbol::from_bits(bit(self.base), bit(self.partner)).as_char()
            })
            .collect()
    }
}

/// Decode a symbol string of at most 64 symbols
pub fn decode(word: &str) -> Result<WordPair, DiffError> {
    let bits = word.chars().count();
    if bits > MAX_BITS {
        return Err(DiffError::WordTooWide { bits });
    }

    let mut base = 0u64;
    let mut partner = 0u64;
    for symbol in parse_symbols(word) {
        let symbol = symbol?;
        base = (base << 1) | u64::from(symbol.base_bit());
        partner = (partner << 1) | u64::from(symbol.partner_bit());
    }

    Ok(WordPair::from_parts(base, partner, bits))
}

/// Decode a symbol string that must describe exactly one word of `width`
pub fn decode_word(word: &str, width: WordWidth) -> Result<WordPair, DiffError> {
    let expected = width.bits() as usize;
    let actual = word.chars().count();
    if actual != expected {
        return Err(DiffError::WordLength { expected, actual });
    }

    decode(word)
}

/// Decode straight to big-endian byte strings
pub fn decode_bytes(word: &str) -> Result<(Vec<u8>, Vec<u8>), DiffError> {
    decode(word)?.to_bytes()
}
