// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw-message verification: hash a concrete message (e.g. a preimage
//! recovered from a solver trace) under a reduced variant.

use tracing::{debug, instrument};
use trailcheck_core::{
    BLOCK_WORDS, ConfigError, Digest, STATE_WORDS, Variant, VariantName, WordWidth, hash,
};

use crate::error::DiffError;

/// Raw message together with the variant parameters to hash it under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest {
    /// Message bytes
    pub message: Vec<u8>,
    /// Word width
    pub width: WordWidth,
    /// Rounds per compression
    pub rounds: usize,
    /// Digest length in bits
    pub digest_bits: usize,
    /// Custom IV; `None` selects the standard one
    pub iv: Option<[u64; STATE_WORDS]>,
    /// Apply MD-strengthening padding
    pub pad: bool,
}

impl RawRequest {
    /// Unpadded request over exactly one block given as raw words
    pub fn from_block_words(
        words: &[u64],
        width: WordWidth,
        rounds: usize,
        digest_bits: usize,
        iv: Option<[u64; STATE_WORDS]>,
    ) -> Result<Self, DiffError> {
        if words.len() != BLOCK_WORDS {
            return Err(ConfigError::InvalidBlockLength { words: words.len() }.into());
        }

        let mut message = Vec::with_capacity(width.block_len());
        for (index, &value) in words.iter().enumerate() {
            if value & !width.mask() != 0 {
                return Err(DiffError::WordOverflow {
                    index,
                    value,
                    width: width.bits(),
                });
            }
            message.extend_from_slice(&value.to_be_bytes()[8 - width.bytes()..]);
        }

        Ok(Self {
            message,
            width,
            rounds,
            digest_bits,
            iv,
            pad: false,
        })
    }

    /// Variant described by this request
    pub fn variant(&self) -> Result<Variant, DiffError> {
        let variant = match self.iv {
            Some(iv) => Variant::custom(self.width, self.digest_bits, iv, Some(self.rounds))?,
            None => Variant::canonical(self.width, self.digest_bits)?.with_rounds(self.rounds)?,
        };

        Ok(variant)
    }
}

/// Outcome of [`verify_raw`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReport {
    /// Name of the variant
    pub name: VariantName,
    /// Rounds per compression
    pub rounds: usize,
    /// Message as hashed (before padding)
    pub message: Vec<u8>,
    /// Resulting digest
    pub digest: Digest,
}

/// Hash a raw message and report the digest for audit
#[instrument(skip_all, name = "verify_raw")]
pub fn verify_raw(request: &RawRequest) -> Result<RawReport, DiffError> {
    let variant = request.variant()?;
    let digest = hash(&request.message, &variant, request.pad)?;

    debug!(
        variant = %variant,
        pad = request.pad,
        len = request.message.len(),
        "hashed raw message"
    );

    Ok(RawReport {
        name: variant.name(),
        rounds: variant.rounds(),
        message: request.message.clone(),
        digest,
    })
}
