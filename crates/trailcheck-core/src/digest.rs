// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot hashing over a [`Variant`]

use alloc::vec::Vec;
use core::fmt;

use crate::compress::ChainingState;
use crate::consts::STATE_WORDS;
use crate::error::ConfigError;
use crate::pad::prepare_blocks;
use crate::variant::Variant;
use crate::word::{Word, WordWidth};

/// Truncated hash output
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Digest bytes (big-endian words, truncated)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for digests produced by a valid variant
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume into the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

/// Standard one-shot hash: padded message, the variant's IV and rounds
pub fn digest(message: &[u8], variant: &Variant) -> Result<Digest, ConfigError> {
    hash(message, variant, true)
}

/// Hash with explicit control over padding
///
/// With `pad == false` the message must already be a non-zero multiple of the
/// block length.
pub fn hash(message: &[u8], variant: &Variant, pad: bool) -> Result<Digest, ConfigError> {
    match variant.width() {
        WordWidth::W32 => run::<u32>(message, variant, pad).map(|s| variant.truncate(&s)),
        WordWidth::W64 => run::<u64>(message, variant, pad).map(|s| variant.truncate(&s)),
    }
}

/// Final chaining value before truncation, widened to u64
pub fn final_state(
    message: &[u8],
    variant: &Variant,
    pad: bool,
) -> Result<[u64; STATE_WORDS], ConfigError> {
    match variant.width() {
        WordWidth::W32 => run::<u32>(message, variant, pad).map(|s| s.to_u64_words()),
        WordWidth::W64 => run::<u64>(message, variant, pad).map(|s| s.to_u64_words()),
    }
}

fn run<W: Word>(
    message: &[u8],
    variant: &Variant,
    pad: bool,
) -> Result<ChainingState<W>, ConfigError> {
    let mut state = variant.initial_state::<W>()?;

    for block in prepare_blocks::<W>(message, pad)? {
        state.compress_block(&block, variant.rounds())?;
    }

    Ok(state)
}
