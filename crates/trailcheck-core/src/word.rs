// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-width word arithmetic per FIPS 180-4 Sections 3.2 and 4.1.2/4.1.3
//!
//! [`Word`] is implemented for `u32` (SHA-224/256) and `u64` (SHA-384/512 and
//! the truncated SHA-512/t family). Everything above this module is generic
//! over it, so a single engine covers both widths.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::{BitAnd, BitXor, Not};

use crate::consts::{K32, K64, MIN_ROUNDS};
use crate::error::ConfigError;

/// Word width of a SHA-2 variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordWidth {
    /// 32-bit words: SHA-224, SHA-256
    W32,
    /// 64-bit words: SHA-384, SHA-512, SHA-512/t
    W64,
}

impl WordWidth {
    /// Parse a width given in bits
    pub const fn from_bits(bits: u32) -> Result<Self, ConfigError> {
        match bits {
            32 => Ok(Self::W32),
            64 => Ok(Self::W64),
            other => Err(ConfigError::UnsupportedWidth(other)),
        }
    }

    /// Word size in bits
    pub const fn bits(self) -> u32 {
        match self {
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Word size in bytes
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Message block size in bytes (16 words)
    pub const fn block_len(self) -> usize {
        16 * self.bytes()
    }

    /// Size of the trailing bit-length field written by padding
    pub const fn length_field_len(self) -> usize {
        2 * self.bytes()
    }

    /// Rounds of the full (unreduced) compression function
    pub const fn max_rounds(self) -> usize {
        match self {
            Self::W32 => 64,
            Self::W64 => 80,
        }
    }

    /// All-ones mask for the width, widened to u64
    pub const fn mask(self) -> u64 {
        match self {
            Self::W32 => u32::MAX as u64,
            Self::W64 => u64::MAX,
        }
    }

    /// Validate a round count against `16..=max_rounds`
    pub const fn check_rounds(self, rounds: usize) -> Result<(), ConfigError> {
        if rounds < MIN_ROUNDS || rounds > self.max_rounds() {
            return Err(ConfigError::InvalidRounds {
                width: self.bits(),
                rounds,
                max: self.max_rounds(),
            });
        }

        Ok(())
    }
}

impl TryFrom<u32> for WordWidth {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

/// A SHA-2 word: modular arithmetic plus the width-specific constants
///
/// All arithmetic wraps silently. Rotation amounts satisfy `0 < n < BITS`
/// for every constant used here.
pub trait Word:
    Copy
    + Debug
    + Default
    + Eq
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Width tag for this word type
    const WIDTH: WordWidth;

    /// Round constants K (64 or 80 entries)
    const K: &'static [Self];

    /// Σ0 rotation amounts
    const BSIG0: [u32; 3];

    /// Σ1 rotation amounts
    const BSIG1: [u32; 3];

    /// σ0 rotations and final shift
    const SSIG0: [u32; 3];

    /// σ1 rotations and final shift
    const SSIG1: [u32; 3];

    /// `self + rhs mod 2^BITS`
    fn add_mod(self, rhs: Self) -> Self;

    /// ROTR^n
    fn rotr(self, n: u32) -> Self;

    /// SHR^n (logical)
    fn shr(self, n: u32) -> Self;

    /// Widen to u64
    fn to_u64(self) -> u64;

    /// Narrow from u64, `None` if bits above the width are set
    fn try_from_u64(value: u64) -> Option<Self>;

    /// Big-endian decode; `bytes` holds exactly one word
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Append the big-endian encoding to `out`
    fn extend_be(self, out: &mut Vec<u8>);

    /// Mask keeping the `bits` high-order bits (`0 < bits <= BITS`)
    fn high_mask(bits: u32) -> Self;

    /// Sum of any number of words mod 2^BITS
    #[inline(always)]
    fn add_all<I: IntoIterator<Item = Self>>(words: I) -> Self {
        words
            .into_iter()
            .fold(Self::default(), |acc, word| acc.add_mod(word))
    }

    /// Ch(x, y, z) = (x & y) ^ (!x & z)
    #[inline(always)]
    fn ch(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (!x & z)
    }

    /// Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)
    #[inline(always)]
    fn maj(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (x & z) ^ (y & z)
    }

    /// Σ0(x)
    #[inline(always)]
    fn bsig0(self) -> Self {
        let [r0, r1, r2] = Self::BSIG0;
        self.rotr(r0) ^ self.rotr(r1) ^ self.rotr(r2)
    }

    /// Σ1(x)
    #[inline(always)]
    fn bsig1(self) -> Self {
        let [r0, r1, r2] = Self::BSIG1;
        self.rotr(r0) ^ self.rotr(r1) ^ self.rotr(r2)
    }

    /// σ0(x)
    #[inline(always)]
    fn ssig0(self) -> Self {
        let [r0, r1, s] = Self::SSIG0;
        self.rotr(r0) ^ self.rotr(r1) ^ self.shr(s)
    }

    /// σ1(x)
    #[inline(always)]
    fn ssig1(self) -> Self {
        let [r0, r1, s] = Self::SSIG1;
        self.rotr(r0) ^ self.rotr(r1) ^ self.shr(s)
    }
}

macro_rules! impl_word {
    ($ty:ty, $width:expr, $k:expr, bsig0: $b0:expr, bsig1: $b1:expr, ssig0: $s0:expr, ssig1: $s1:expr) => {
        impl Word for $ty {
            const WIDTH: WordWidth = $width;
            const K: &'static [Self] = &$k;
            const BSIG0: [u32; 3] = $b0;
            const BSIG1: [u32; 3] = $b1;
            const SSIG0: [u32; 3] = $s0;
            const SSIG1: [u32; 3] = $s1;

            #[inline(always)]
            fn add_mod(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn rotr(self, n: u32) -> Self {
                self.rotate_right(n)
            }

            #[inline(always)]
            fn shr(self, n: u32) -> Self {
                self >> n
            }

            #[inline(always)]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn try_from_u64(value: u64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }

            #[inline(always)]
            fn from_be_slice(bytes: &[u8]) -> Self {
                debug_assert_eq!(bytes.len(), core::mem::size_of::<$ty>());
                bytes
                    .iter()
                    .fold(0, |acc: $ty, &byte| (acc << 8) | byte as $ty)
            }

            #[inline(always)]
            fn extend_be(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }

            #[inline(always)]
            fn high_mask(bits: u32) -> Self {
                debug_assert!(bits > 0 && bits <= <$ty>::BITS);
                <$ty>::MAX << (<$ty>::BITS - bits)
            }
        }
    };
}

impl_word!(
    u32,
    WordWidth::W32,
    K32,
    bsig0: [2, 13, 22],
    bsig1: [6, 11, 25],
    ssig0: [7, 18, 3],
    ssig1: [17, 19, 10]
);

impl_word!(
    u64,
    WordWidth::W64,
    K64,
    bsig0: [28, 34, 39],
    bsig1: [14, 18, 41],
    ssig0: [1, 8, 7],
    ssig1: [19, 61, 6]
);
