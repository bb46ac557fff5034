// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Message schedule expansion
//
// References:
// [1] NIST SHA-256 example values (one-block message "abc"), W[16..19]
//     https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf

use trailcheck_vectors::{ABC_BLOCK_1024, ABC_BLOCK_512, hex_to_bytes};

use crate::error::ConfigError;
use crate::schedule::{MessageBlock, RoundSchedule};

fn abc_block_32() -> MessageBlock<u32> {
    MessageBlock::from_be_bytes(&hex_to_bytes(ABC_BLOCK_512)).expect("Failed to decode block")
}

#[test]
fn test_abc_schedule_matches_nist_example() {
    let schedule = RoundSchedule::expand(&abc_block_32(), 64).expect("Failed to expand");
    let w = schedule.as_slice();

    assert_eq!(w[0], 0x6162_6380);
    assert_eq!(w[15], 0x0000_0018);
    assert_eq!(&w[16..20], &[0x6162_6380, 0x000f_0000, 0x7da8_6405, 0x6000_03c6]);
}

#[test]
fn test_schedule_length_follows_rounds() {
    let block = abc_block_32();
    for rounds in [16, 17, 20, 48, 64] {
        let schedule = RoundSchedule::expand(&block, rounds).expect("Failed to expand");
        assert_eq!(schedule.rounds(), rounds);
        assert_eq!(&schedule.as_slice()[..16], block.words());
    }
}

#[test]
fn test_reduced_schedule_is_prefix_of_full_schedule() {
    let block = MessageBlock::<u64>::from_be_bytes(&hex_to_bytes(ABC_BLOCK_1024))
        .expect("Failed to decode block");

    let full = RoundSchedule::expand(&block, 80).expect("Failed to expand");
    let reduced = RoundSchedule::expand(&block, 20).expect("Failed to expand");

    assert_eq!(reduced.as_slice(), &full.as_slice()[..20]);
}

#[test]
fn test_expand_rejects_out_of_range_rounds() {
    let block = abc_block_32();

    assert_eq!(
        RoundSchedule::expand(&block, 15),
        Err(ConfigError::InvalidRounds {
            width: 32,
            rounds: 15,
            max: 64
        })
    );
    assert!(RoundSchedule::expand(&block, 65).is_err());
}

#[test]
fn test_block_from_words_requires_sixteen_words() {
    assert_eq!(
        MessageBlock::<u32>::from_words(&[0; 15]),
        Err(ConfigError::InvalidBlockLength { words: 15 })
    );
    assert_eq!(
        MessageBlock::<u64>::from_words(&[0; 17]),
        Err(ConfigError::InvalidBlockLength { words: 17 })
    );

    let block = MessageBlock::<u32>::from_words(&[7; 16]).expect("Failed to build block");
    assert_eq!(block.words(), &[7; 16]);
}

#[test]
fn test_block_from_bytes_requires_block_length() {
    assert!(MessageBlock::<u32>::from_be_bytes(&[0u8; 63]).is_err());
    assert!(MessageBlock::<u64>::from_be_bytes(&[0u8; 64]).is_err());

    // one stray byte must not round down to a full block of words
    let err = MessageBlock::<u32>::from_be_bytes(&[0u8; 65]).expect_err("Expected an error");
    assert_eq!(
        err,
        ConfigError::InvalidBlockBytes {
            len: 65,
            block_len: 64
        }
    );
    assert_eq!(
        err.to_string(),
        "message block must be exactly 64 bytes, got 65"
    );
    assert_eq!(
        MessageBlock::<u64>::from_be_bytes(&[0u8; 129]),
        Err(ConfigError::InvalidBlockBytes {
            len: 129,
            block_len: 128
        })
    );

    let bytes = hex_to_bytes(ABC_BLOCK_512);
    let block = MessageBlock::<u32>::from_be_bytes(&bytes).expect("Failed to decode block");
    assert_eq!(block.to_be_bytes(), bytes);
}
