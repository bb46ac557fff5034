// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Padded one-block encoding of "abc" for 32-bit variants
pub const ABC_BLOCK_512: &str = "6162638000000000000000000000000000000000000000000000000000000000\
                                 0000000000000000000000000000000000000000000000000000000000000018";

/// Padded one-block encoding of "abc" for 64-bit variants
pub const ABC_BLOCK_1024: &str = "6162638000000000000000000000000000000000000000000000000000000000\
                                  0000000000000000000000000000000000000000000000000000000000000000\
                                  0000000000000000000000000000000000000000000000000000000000000000\
                                  0000000000000000000000000000000000000000000000000000000000000018";

/// One compression of a single pre-aligned block with fewer rounds
#[derive(Debug, Clone, Copy)]
pub struct ReducedRound {
    /// Word width in bits
    pub width_bits: u32,
    /// Digest length in bits
    pub digest_bits: usize,
    /// Rounds per compression
    pub rounds: usize,
    /// Custom IV; `None` means the standard IV for (width, digest_bits)
    pub iv: Option<[u64; 8]>,
    /// Block, hex
    pub block_hex: &'static str,
    /// Expected truncated digest, hex
    pub digest_hex: &'static str,
}

const COUNTING_IV: [u64; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Reduced-round golden values over [`ABC_BLOCK_512`] / [`ABC_BLOCK_1024`]
pub const REDUCED_ROUNDS: &[ReducedRound] = &[
    ReducedRound {
        width_bits: 32,
        digest_bits: 256,
        rounds: 16,
        iv: None,
        block_hex: ABC_BLOCK_512,
        digest_hex: "1b0409f57bcc0e6315a1de882ce11eca5867604ca6985a9893de22897a384f31",
    },
    ReducedRound {
        width_bits: 32,
        digest_bits: 256,
        rounds: 20,
        iv: None,
        block_hex: ABC_BLOCK_512,
        digest_hex: "4bfbf29ab9df2a44ff6acd43c72a8fd50171d3f8678f01eda3f2bdffdc14efb5",
    },
    ReducedRound {
        width_bits: 32,
        digest_bits: 256,
        rounds: 32,
        iv: None,
        block_hex: ABC_BLOCK_512,
        digest_hex: "ddbd225ca600d8a7dc74fea2db8478030b6763919c0f13c6cd6b6de2bcf370d0",
    },
    ReducedRound {
        width_bits: 32,
        digest_bits: 224,
        rounds: 24,
        iv: None,
        block_hex: ABC_BLOCK_512,
        digest_hex: "18260e901ca756350f3f75bbfee3b604c720901b915624ea8e398b04",
    },
    ReducedRound {
        width_bits: 32,
        digest_bits: 256,
        rounds: 24,
        iv: Some(COUNTING_IV),
        block_hex: ABC_BLOCK_512,
        digest_hex: "8a3e27e9b931c33d96463de1886b5f28efab6daa0030f4a7edb84aeb3c868699",
    },
    ReducedRound {
        width_bits: 64,
        digest_bits: 512,
        rounds: 20,
        iv: None,
        block_hex: ABC_BLOCK_1024,
        digest_hex: "04499b3b7e73980ef7b2ef899b58e6168394b1979966969670480f7cbc9d3c28\
                     4257eb5d0d56f94fc46ec864b8c047ef14025cfff34631c089cf99844d546ef1",
    },
    ReducedRound {
        width_bits: 64,
        digest_bits: 256,
        rounds: 20,
        iv: None,
        block_hex: ABC_BLOCK_1024,
        digest_hex: "96261ab51da442ddbf3c58267ca099c64efaf08c0a7a6879d0dde11929653981",
    },
    ReducedRound {
        width_bits: 64,
        digest_bits: 224,
        rounds: 24,
        iv: None,
        block_hex: ABC_BLOCK_1024,
        digest_hex: "91b6c81bff26ce9f9cc5141ff2b0cabbf1784af37e5943eb97deee23",
    },
    ReducedRound {
        width_bits: 64,
        digest_bits: 384,
        rounds: 40,
        iv: None,
        block_hex: ABC_BLOCK_1024,
        digest_hex: "a6e096fe00559e43b6a1ac5e6c0248bb684d1f7fd92711ed\
                     e9bd84a73a9b4e293a41c01cb354bbc19cf5ea37e883240d",
    },
    ReducedRound {
        width_bits: 64,
        digest_bits: 224,
        rounds: 18,
        iv: Some(COUNTING_IV),
        block_hex: ABC_BLOCK_1024,
        digest_hex: "7b72e2bce2234c1028841567749bbc91203981413f6351b0ead0b22b",
    },
];
