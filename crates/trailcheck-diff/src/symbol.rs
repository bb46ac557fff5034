// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generalized conditions restricted to the signed-difference alphabet

use core::fmt;

use crate::error::DiffError;

/// Condition on one bit of a (base, partner) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffSymbol {
    /// `0`: both bits zero
    Zero,
    /// `1`: both bits one
    One,
    /// `n`: base 0, partner 1
    N,
    /// `u`: base 1, partner 0
    U,
}

impl DiffSymbol {
    /// Parse one symbol; `position` is only used for the error
    pub fn from_char(c: char, position: usize) -> Result<Self, DiffError> {
        match c {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            'n' => Ok(Self::N),
            'u' => Ok(Self::U),
            symbol => Err(DiffError::InvalidSymbol { symbol, position }),
        }
    }

    /// Canonical character
    pub const fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::N => 'n',
            Self::U => 'u',
        }
    }

    /// Bit taken by the base value
    pub const fn base_bit(self) -> bool {
        matches!(self, Self::One | Self::U)
    }

    /// Bit taken by the partner value
    pub const fn partner_bit(self) -> bool {
        matches!(self, Self::One | Self::N)
    }

    /// Whether the two values differ in this bit
    pub const fn is_active(self) -> bool {
        matches!(self, Self::N | Self::U)
    }

    /// Symbol for a concrete pair of bits
    pub const fn from_bits(base: bool, partner: bool) -> Self {
        match (base, partner) {
            (false, false) => Self::Zero,
            (true, true) => Self::One,
            (false, true) => Self::N,
            (true, false) => Self::U,
        }
    }
}

impl TryFrom<char> for DiffSymbol {
    type Error = DiffError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c, 0)
    }
}

impl fmt::Display for DiffSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Iterate the symbols of `word`, failing on the first bad character
pub fn parse_symbols(word: &str) -> impl Iterator<Item = Result<DiffSymbol, DiffError>> + '_ {
    word.chars()
        .enumerate()
        .map(|(position, c)| DiffSymbol::from_char(c, position))
}
