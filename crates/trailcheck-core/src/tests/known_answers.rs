// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Full-round known answers for the six standard variants.
//!
//! References:
//! [1] NIST CSRC example values (SHA-224, SHA-256, SHA-384, SHA-512,
//!     SHA-512/224, SHA-512/256)
//! [2] RFC 6234 Section 8.5 TEST1, TEST2_1, TEST2_2

use trailcheck_vectors::KNOWN_ANSWERS;

use crate::digest::{digest, final_state};
use crate::variant::Variant;
use crate::word::WordWidth;

#[test]
fn test_known_answers() {
    for kat in KNOWN_ANSWERS {
        let width = WordWidth::from_bits(kat.width_bits).expect("Failed to parse width");
        let variant = Variant::canonical(width, kat.digest_bits).expect("Failed to look up");

        let out = digest(kat.message, &variant).expect("Failed to digest(..)");

        assert_eq!(out.to_string(), kat.digest_hex, "{}", kat.name);
        assert_eq!(out.len(), kat.digest_bits / 8, "{}", kat.name);
        assert!(kat.name.starts_with(&variant.name().to_string()), "{}", kat.name);
    }
}

#[test]
fn test_sha512_final_state_is_the_digest() {
    let state = final_state(b"abc", &Variant::SHA512, true).expect("Failed to final_state(..)");
    let out = digest(b"abc", &Variant::SHA512).expect("Failed to digest(..)");

    let bytes: Vec<u8> = state.iter().flat_map(|w| w.to_be_bytes()).collect();
    assert_eq!(out.as_bytes(), &bytes[..]);
}

#[test]
fn test_sha224_is_sha256_engine_with_other_iv() {
    let iv = *Variant::SHA224.iv();
    let custom =
        Variant::custom(WordWidth::W32, 224, iv, None).expect("Failed to build variant");

    let expected = digest(b"abc", &Variant::SHA224).expect("Failed to digest(..)");
    let actual = digest(b"abc", &custom).expect("Failed to digest(..)");

    assert_eq!(actual, expected);
}
