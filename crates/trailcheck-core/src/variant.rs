// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variant registry: canonical SHA-2 parameter sets and custom
//! (free-start) instances with caller-chosen IV and round count.

use alloc::vec::Vec;
use core::fmt;

use crate::compress::ChainingState;
use crate::consts::{
    SHA224_IV, SHA256_IV, SHA384_IV, SHA512_224_IV, SHA512_256_IV, SHA512_IV, STATE_WORDS,
};
use crate::digest::Digest;
use crate::error::ConfigError;
use crate::word::{Word, WordWidth};

/// A fully parameterized SHA-2 instance
///
/// Immutable: the `with_*` builders return validated copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variant {
    width: WordWidth,
    rounds: usize,
    iv: [u64; STATE_WORDS],
    digest_bits: usize,
}

const fn widen32(iv: [u32; STATE_WORDS]) -> [u64; STATE_WORDS] {
    let mut out = [0u64; STATE_WORDS];
    let mut i = 0;
    while i < STATE_WORDS {
        out[i] = iv[i] as u64;
        i += 1;
    }
    out
}

const fn standard(width: WordWidth, digest_bits: usize, iv: [u64; STATE_WORDS]) -> Variant {
    Variant {
        width,
        rounds: width.max_rounds(),
        iv,
        digest_bits,
    }
}

impl Variant {
    /// SHA-224
    pub const SHA224: Self = standard(WordWidth::W32, 224, widen32(SHA224_IV));
    /// SHA-256
    pub const SHA256: Self = standard(WordWidth::W32, 256, widen32(SHA256_IV));
    /// SHA-384
    pub const SHA384: Self = standard(WordWidth::W64, 384, SHA384_IV);
    /// SHA-512
    pub const SHA512: Self = standard(WordWidth::W64, 512, SHA512_IV);
    /// SHA-512/224
    pub const SHA512_224: Self = standard(WordWidth::W64, 224, SHA512_224_IV);
    /// SHA-512/256
    pub const SHA512_256: Self = standard(WordWidth::W64, 256, SHA512_256_IV);

    /// All six standard variants
    pub const CANONICAL: [Self; 6] = [
        Self::SHA224,
        Self::SHA256,
        Self::SHA384,
        Self::SHA512,
        Self::SHA512_224,
        Self::SHA512_256,
    ];

    /// Standard variant for a (width, digest length) pair, full rounds
    pub fn canonical(width: WordWidth, digest_bits: usize) -> Result<Self, ConfigError> {
        Self::CANONICAL
            .into_iter()
            .find(|v| v.width == width && v.digest_bits == digest_bits)
            .ok_or(ConfigError::UnsupportedVariant {
                width: width.bits(),
                bits: digest_bits,
            })
    }

    /// Custom variant for free-start and semi-free-start analysis
    ///
    /// Any IV value that fits the width is accepted. `rounds` defaults to
    /// the full round count for the width.
    pub fn custom(
        width: WordWidth,
        digest_bits: usize,
        iv: [u64; STATE_WORDS],
        rounds: Option<usize>,
    ) -> Result<Self, ConfigError> {
        check_digest_bits(width, digest_bits)?;
        check_iv(width, &iv)?;

        let rounds = rounds.unwrap_or(width.max_rounds());
        width.check_rounds(rounds)?;

        Ok(Self {
            width,
            rounds,
            iv,
            digest_bits,
        })
    }

    /// Same variant with a different round count
    pub fn with_rounds(self, rounds: usize) -> Result<Self, ConfigError> {
        self.width.check_rounds(rounds)?;
        Ok(Self { rounds, ..self })
    }

    /// Same variant with a different IV
    pub fn with_iv(self, iv: [u64; STATE_WORDS]) -> Result<Self, ConfigError> {
        check_iv(self.width, &iv)?;
        Ok(Self { iv, ..self })
    }

    /// Word width
    pub const fn width(&self) -> WordWidth {
        self.width
    }

    /// Rounds per compression
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Initial chaining value, widened to u64
    pub const fn iv(&self) -> &[u64; STATE_WORDS] {
        &self.iv
    }

    /// Digest length in bits
    pub const fn digest_bits(&self) -> usize {
        self.digest_bits
    }

    /// Digest length in bytes
    pub const fn digest_len(&self) -> usize {
        self.digest_bits / 8
    }

    /// Whether the round count is reduced below the standard
    pub const fn is_reduced(&self) -> bool {
        self.rounds < self.width.max_rounds()
    }

    /// Registers kept after truncation: ceil(digest_bits / width)
    pub const fn retained_words(&self) -> usize {
        let width = self.width.bits() as usize;
        self.digest_bits.div_ceil(width)
    }

    /// Display name: `SHA-512/<t>` for truncated 64-bit variants, else `SHA-<t>`
    pub fn name(&self) -> VariantName {
        VariantName {
            width: self.width,
            digest_bits: self.digest_bits,
        }
    }

    /// Truncate a final chaining value to the digest
    ///
    /// Keeps the first `retained_words()` registers and masks the last one
    /// to its high-order bits when the digest ends mid-word.
    pub fn truncate<W: Word>(&self, state: &ChainingState<W>) -> Digest {
        debug_assert_eq!(W::WIDTH, self.width);

        let width = self.width.bits() as usize;
        let kept = self.retained_words();
        let tail_bits = self.digest_bits - (kept - 1) * width;

        let mut bytes = Vec::with_capacity(kept * self.width.bytes());
        for (i, &word) in state.words()[..kept].iter().enumerate() {
            let word = if i + 1 == kept {
                word & W::high_mask(tail_bits as u32)
            } else {
                word
            };
            word.extend_be(&mut bytes);
        }
        bytes.truncate(self.digest_len());

        Digest::new(bytes)
    }

    pub(crate) fn initial_state<W: Word>(&self) -> Result<ChainingState<W>, ConfigError> {
        ChainingState::from_u64_words(&self.iv)
    }
}

fn check_digest_bits(width: WordWidth, digest_bits: usize) -> Result<(), ConfigError> {
    let max = 8 * width.bits() as usize;
    if digest_bits == 0 || digest_bits % 32 != 0 || digest_bits > max {
        return Err(ConfigError::InvalidDigestBits {
            bits: digest_bits,
            max,
        });
    }

    Ok(())
}

fn check_iv(width: WordWidth, iv: &[u64; STATE_WORDS]) -> Result<(), ConfigError> {
    match iv.iter().position(|&word| word & !width.mask() != 0) {
        Some(index) => Err(ConfigError::IvOutOfRange {
            index,
            value: iv[index],
            width: width.bits(),
        }),
        None => Ok(()),
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if self.is_reduced() {
            write!(f, " ({} rounds)", self.rounds)?;
        }
        Ok(())
    }
}

/// Printable variant name, e.g. `SHA-256` or `SHA-512/224`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantName {
    width: WordWidth,
    digest_bits: usize,
}

impl fmt::Display for VariantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.width, self.digest_bits) {
            (WordWidth::W64, bits) if bits != 384 && bits != 512 => write!(f, "SHA-512/{bits}"),
            (_, bits) => write!(f, "SHA-{bits}"),
        }
    }
}
