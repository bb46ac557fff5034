// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Verify differential characteristics and collisions for reduced-round
//! SHA-2.
//!
//! Search tools for SHA-2 collisions emit a characteristic: two related
//! inputs described bit by bit, a round count and a digest length. This
//! crate evaluates such claims. It does not search.
//!
//! # Crates
//!
//! - [`engine`]: the SHA-2 compression function generalized over word
//!   width (32/64), round count, IV and digest truncation, plus the
//!   registry of standard variants.
//! - [`diff`]: the `0`/`1`/`n`/`u` difference codec, the differential
//!   verifier and raw-message verification.
//!
//! # Quick Start
//!
//! ```rust
//! use trailcheck::engine::{Variant, digest};
//! use trailcheck::diff::{RawRequest, verify_raw};
//! use trailcheck::engine::WordWidth;
//!
//! // SHA-512/256 reduced to 24 rounds
//! let variant = Variant::SHA512_256.with_rounds(24)?;
//! let out = digest(b"abc", &variant)?;
//! assert_eq!(out.len(), 32);
//!
//! // The same computation through a raw request
//! let request = RawRequest {
//!     message: b"abc".to_vec(),
//!     width: WordWidth::W64,
//!     rounds: 24,
//!     digest_bits: 256,
//!     iv: None,
//!     pad: true,
//! };
//! let report = verify_raw(&request)?;
//! assert_eq!(report.digest, out);
//! println!("{report}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Collision kinds
//!
//! | kind | IV |
//! |---|---|
//! | fixed-start | standard IV of the variant |
//! | semi-free-start | chosen freely, equal for both inputs |
//! | free-start | chosen freely, different per input |

#![cfg_attr(not(test), no_std)]

pub use trailcheck_core as engine;
pub use trailcheck_diff as diff;
