// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Differential verification: decode both inputs of a characteristic, hash
//! them with the reduced variant and compare.

use core::fmt;

use tracing::{debug, instrument, warn};
use trailcheck_core::{Digest, STATE_WORDS, Variant, VariantName, WordWidth, hash};

use crate::characteristic::{Characteristic, StartMode};
use crate::codec::{decode, decode_word};
use crate::error::DiffError;

/// What kind of collision a characteristic claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    /// Standard IV on both sides
    FixedStart,
    /// Freely chosen IV, identical for both sides
    SemiFreeStart,
    /// Freely chosen IVs that differ
    FreeStart,
}

impl CollisionKind {
    /// Classify from the start mode and the two IVs actually used
    pub fn classify(
        start: StartMode,
        base_iv: &[u64; STATE_WORDS],
        partner_iv: &[u64; STATE_WORDS],
    ) -> Self {
        match start {
            StartMode::FixedIv => Self::FixedStart,
            StartMode::FreeIv if base_iv == partner_iv => Self::SemiFreeStart,
            StartMode::FreeIv => Self::FreeStart,
        }
    }

    /// Label used in reports
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FixedStart => "fixed-start",
            Self::SemiFreeStart => "semi-free-start",
            Self::FreeStart => "free-start",
        }
    }
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`verify_differential`]
///
/// Holds everything needed to audit the claim by hand: both IVs, both
/// messages and both digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// Claimed collision kind
    pub kind: CollisionKind,
    /// Name of the attacked variant
    pub name: VariantName,
    /// Word width
    pub width: WordWidth,
    /// Rounds per compression
    pub rounds: usize,
    /// IV of the first input
    pub base_iv: [u64; STATE_WORDS],
    /// IV of the second input
    pub partner_iv: [u64; STATE_WORDS],
    /// Message of the first input
    pub base_message: Vec<u8>,
    /// Message of the second input
    pub partner_message: Vec<u8>,
    /// Digest of the first input
    pub base_digest: Digest,
    /// Digest of the second input
    pub partner_digest: Digest,
    /// Whether the digests are equal
    pub matched: bool,
}

impl VerificationReport {
    /// Whether the two messages differ at all
    pub fn messages_differ(&self) -> bool {
        self.base_message != self.partner_message
    }
}

/// Check whether a characteristic yields a collision
///
/// Both inputs are hashed without padding: each message entry must be one
/// full block. A digest mismatch is reported through
/// [`VerificationReport::matched`], not as an error.
#[instrument(skip_all, name = "verify_differential")]
pub fn verify_differential(
    characteristic: &Characteristic,
) -> Result<VerificationReport, DiffError> {
    if characteristic.message.is_empty() {
        return Err(DiffError::EmptyMessage);
    }

    let (base_variant, partner_variant) = variants(characteristic)?;
    let (base_message, partner_message) = messages(characteristic)?;

    let base_digest = hash(&base_message, &base_variant, false)?;
    let partner_digest = hash(&partner_message, &partner_variant, false)?;

    let kind = CollisionKind::classify(
        characteristic.start,
        base_variant.iv(),
        partner_variant.iv(),
    );
    let matched = base_digest == partner_digest;

    debug!(
        variant = %base_variant,
        %kind,
        blocks = characteristic.message.len(),
        matched,
        "verified characteristic"
    );
    if !matched {
        warn!(
            %kind,
            base = %base_digest,
            partner = %partner_digest,
            "characteristic does not hold"
        );
    }

    Ok(VerificationReport {
        kind,
        name: base_variant.name(),
        width: characteristic.width,
        rounds: characteristic.rounds,
        base_iv: *base_variant.iv(),
        partner_iv: *partner_variant.iv(),
        base_message,
        partner_message,
        base_digest,
        partner_digest,
        matched,
    })
}

fn variants(characteristic: &Characteristic) -> Result<(Variant, Variant), DiffError> {
    let Characteristic {
        width,
        rounds,
        digest_bits,
        ..
    } = *characteristic;

    match characteristic.start {
        StartMode::FixedIv => {
            let mut active = false;
            for word in &characteristic.iv {
                active |= decode(word)?.is_active();
            }
            if active {
                warn!("IV rows carry active bits; ignored for a fixed start");
            }

            let variant = Variant::canonical(width, digest_bits)?.with_rounds(rounds)?;
            Ok((variant, variant))
        }
        StartMode::FreeIv => {
            let mut base = [0u64; STATE_WORDS];
            let mut partner = [0u64; STATE_WORDS];
            for (i, word) in characteristic.iv.iter().enumerate() {
                let pair = decode_word(word, width)?;
                base[i] = pair.base();
                partner[i] = pair.partner();
            }

            let custom = |iv| Variant::custom(width, digest_bits, iv, Some(rounds));
            Ok((custom(base)?, custom(partner)?))
        }
    }
}

fn messages(characteristic: &Characteristic) -> Result<(Vec<u8>, Vec<u8>), DiffError> {
    let capacity = characteristic.message.len() * characteristic.width.block_len();
    let mut base = Vec::with_capacity(capacity);
    let mut partner = Vec::with_capacity(capacity);

    for block in &characteristic.message {
        for word in block {
            let (b, p) = decode_word(word, characteristic.width)?.to_bytes()?;
            base.extend_from_slice(&b);
            partner.extend_from_slice(&p);
        }
    }

    Ok((base, partner))
}
