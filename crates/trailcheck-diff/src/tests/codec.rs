// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use trailcheck_core::WordWidth;

use crate::codec::{WordPair, decode, decode_bytes, decode_word};
use crate::error::DiffError;

#[test]
fn test_decodes_msb_first() {
    let pair = decode("1n0u").expect("Failed to decode(..)");

    assert_eq!(pair.base(), 0b1001);
    assert_eq!(pair.partner(), 0b1100);
    assert_eq!(pair.bits(), 4);
    assert_eq!(pair.difference(), 0b0101);
    assert!(pair.is_active());
}

#[test]
fn test_fixed_symbols_have_no_difference() {
    let pair = decode("0110100111").expect("Failed to decode(..)");

    assert_eq!(pair.base(), pair.partner());
    assert_eq!(pair.base(), 0b0110100111);
    assert!(!pair.is_active());
}

#[test]
fn test_all_u_sets_base_only() {
    for bits in [1, 8, 32, 63, 64] {
        let pair = decode(&"u".repeat(bits)).expect("Failed to decode(..)");

        assert_eq!(pair.partner(), 0);
        assert_eq!(pair.base(), u64::MAX >> (64 - bits));
    }

    let pair = decode(&"n".repeat(64)).expect("Failed to decode(..)");
    assert_eq!(pair.base(), 0);
    assert_eq!(pair.partner(), u64::MAX);
}

#[test]
fn test_empty_word_decodes_to_zero() {
    let pair = decode("").expect("Failed to decode(..)");

    assert_eq!(pair, WordPair::new(0, 0, 0).expect("Failed to build WordPair"));
}

#[test]
fn test_rejects_words_wider_than_64() {
    assert_eq!(
        decode(&"0".repeat(65)),
        Err(DiffError::WordTooWide { bits: 65 })
    );
}

#[test]
fn test_invalid_symbol_position() {
    assert_eq!(
        decode("0000x000"),
        Err(DiffError::InvalidSymbol {
            symbol: 'x',
            position: 4
        })
    );
}

#[test]
fn test_decode_word_checks_width() {
    assert!(decode_word(&"0".repeat(32), WordWidth::W32).is_ok());
    assert!(decode_word(&"1".repeat(64), WordWidth::W64).is_ok());

    assert_eq!(
        decode_word(&"0".repeat(62), WordWidth::W64),
        Err(DiffError::WordLength {
            expected: 64,
            actual: 62
        })
    );
    assert_eq!(
        decode_word(&"0".repeat(64), WordWidth::W32),
        Err(DiffError::WordLength {
            expected: 32,
            actual: 64
        })
    );
}

#[test]
fn test_to_bytes_is_big_endian() {
    let (base, partner) = decode_bytes("0000000100000010nnnnuuuu").expect("Failed to decode");

    assert_eq!(base, [0x01, 0x02, 0x0f]);
    assert_eq!(partner, [0x01, 0x02, 0xf0]);
}

#[test]
fn test_to_bytes_requires_whole_bytes() {
    assert_eq!(
        decode_bytes("0101"),
        Err(DiffError::ByteMisaligned { bits: 4 })
    );
}

#[test]
fn test_to_symbols_renders_pair() {
    let pair = WordPair::new(0b1001, 0b1100, 4).expect("Failed to build WordPair");
    assert_eq!(pair.to_symbols(), "1n0u");

    let pair = WordPair::new(0, 1, 8).expect("Failed to build WordPair");
    assert_eq!(pair.to_symbols(), "0000000n");
}

#[test]
fn test_word_pair_rejects_wide_words() {
    assert_eq!(
        WordPair::new(1, 2, 72),
        Err(DiffError::WordTooWide { bits: 72 })
    );
    assert_eq!(
        WordPair::new(1, 2, 65),
        Err(DiffError::WordTooWide { bits: 65 })
    );

    let pair = WordPair::new(u64::MAX, 0, 64).expect("Failed to build WordPair");
    assert_eq!(pair.to_symbols(), "u".repeat(64));
    assert_eq!(
        pair.to_bytes().expect("Failed to convert to bytes"),
        (vec![0xff; 8], vec![0; 8])
    );
}

#[test]
fn test_word_pair_rejects_values_above_width() {
    assert_eq!(
        WordPair::new(0x1ff, 0, 8),
        Err(DiffError::WordOverflow {
            index: 0,
            value: 0x1ff,
            width: 8
        })
    );
    assert_eq!(
        WordPair::new(0xff, 0x100, 8),
        Err(DiffError::WordOverflow {
            index: 1,
            value: 0x100,
            width: 8
        })
    );
    assert_eq!(
        WordPair::new(0, 1, 0),
        Err(DiffError::WordOverflow {
            index: 1,
            value: 1,
            width: 0
        })
    );

    let pair = WordPair::new(0xff, 0, 8).expect("Failed to build WordPair");
    assert_eq!(pair.to_symbols(), "uuuuuuuu");
    assert_eq!(
        pair.to_bytes().expect("Failed to convert to bytes"),
        (vec![0xff], vec![0])
    );
}
