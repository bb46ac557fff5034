// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Differential characteristic verification for reduced-round SHA-2
//!
//! A characteristic describes two related inputs bit by bit with the
//! symbols `0`, `1`, `n` and `u`. [`verify_differential`] decodes both
//! inputs, hashes them with the requested round count and reports whether
//! they collide. [`verify_raw`] hashes a single concrete message, e.g. a
//! preimage candidate.
//!
//! ```
//! use trailcheck_core::WordWidth;
//! use trailcheck_diff::{Characteristic, CollisionKind, StartMode, verify_differential};
//!
//! let zero = "0".repeat(32);
//! let characteristic = Characteristic::single_block(
//!     WordWidth::W32,
//!     24,
//!     256,
//!     StartMode::FreeIv,
//!     core::array::from_fn(|_| zero.clone()),
//!     core::array::from_fn(|_| zero.clone()),
//! );
//!
//! let report = verify_differential(&characteristic)?;
//! assert!(report.matched);
//! assert_eq!(report.kind, CollisionKind::SemiFreeStart);
//! # Ok::<(), trailcheck_diff::DiffError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod characteristic;
mod codec;
mod error;
mod raw;
mod report;
mod symbol;
mod verify;

pub use characteristic::{Characteristic, StartMode};
pub use codec::{WordPair, decode, decode_bytes, decode_word};
pub use error::DiffError;
pub use raw::{RawReport, RawRequest, verify_raw};
pub use symbol::{DiffSymbol, parse_symbols};
pub use verify::{CollisionKind, VerificationReport, verify_differential};
