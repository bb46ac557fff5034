// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Parameterized SHA-2 compression engine
//!
//! Bit-exact SHA-224/256/384/512 and SHA-512/t, generalized over word width,
//! round count, initial chaining value and digest truncation. Intended for
//! checking reduced-round and (semi-)free-start collisions, not as a general
//! purpose hash library: there is no streaming API and nothing here is
//! constant-time.
//!
//! ```
//! use trailcheck_core::{Variant, digest};
//!
//! let full = digest(b"abc", &Variant::SHA256)?;
//! assert_eq!(
//!     full.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! let reduced = Variant::SHA256.with_rounds(20)?;
//! assert_ne!(digest(b"abc", &reduced)?, full);
//! # Ok::<(), trailcheck_core::ConfigError>(())
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod digest;
mod error;
mod pad;
mod schedule;
mod variant;
mod word;

pub use compress::ChainingState;
pub use consts::{
    BLOCK_WORDS, K32, K64, MIN_ROUNDS, SHA224_IV, SHA256_IV, SHA384_IV, SHA512_224_IV,
    SHA512_256_IV, SHA512_IV, STATE_WORDS,
};
pub use digest::{Digest, digest, final_state, hash};
pub use error::ConfigError;
pub use pad::{pad_message, prepare_blocks, split_blocks};
pub use schedule::{MessageBlock, RoundSchedule};
pub use variant::{Variant, VariantName};
pub use word::{Word, WordWidth};
