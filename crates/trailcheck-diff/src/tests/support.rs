// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use trailcheck_core::{BLOCK_WORDS, STATE_WORDS, WordWidth};

use crate::codec::WordPair;

pub(crate) fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_test_writer())
        .try_init();
}

/// Symbols describing `base` and `partner` over `width` bits
pub(crate) fn pair(base: u64, partner: u64, width: WordWidth) -> String {
    WordPair::new(base, partner, width.bits() as usize)
        .expect("Failed to build WordPair")
        .to_symbols()
}

pub(crate) fn zero_iv(width: WordWidth) -> [String; STATE_WORDS] {
    core::array::from_fn(|_| pair(0, 0, width))
}

/// Block of symbols with no active bits spelling out `bytes`
pub(crate) fn fixed_block(bytes: &[u8], width: WordWidth) -> [String; BLOCK_WORDS] {
    assert_eq!(bytes.len(), width.block_len());

    let words: Vec<String> = bytes
        .chunks(width.bytes())
        .map(|chunk| {
            let value = chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
            pair(value, value, width)
        })
        .collect();

    core::array::from_fn(|i| words[i].clone())
}
