// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test vectors for the trailcheck crates.
//!
//! References:
//! [1] FIPS 180-4: Secure Hash Standard (SHS)
//!     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
//! [2] NIST example values for SHA-2
//!     https://csrc.nist.gov/projects/cryptographic-standards-and-guidelines/example-values
//! [3] RFC 6234 Section 8.5 test vectors
//!
//! The reduced-round values were produced by an independent implementation
//! of the round function truncated to the given number of rounds; each set
//! was cross-checked against the full-round NIST value at 64/80 rounds.

#![no_std]

extern crate alloc;

mod known_answers;
mod reduced;

use alloc::vec::Vec;

pub use known_answers::{KnownAnswer, KNOWN_ANSWERS, MSG_448, MSG_896};
pub use reduced::{ReducedRound, ABC_BLOCK_1024, ABC_BLOCK_512, REDUCED_ROUNDS};

/// Decode a hex literal from the vector tables
///
/// # Panics
/// On malformed hex; the tables are static so this is a bug in the table.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    match hex::decode(hex) {
        Ok(bytes) => bytes,
        Err(err) => panic!("malformed hex in test vector {hex:?}: {err}"),
    }
}
