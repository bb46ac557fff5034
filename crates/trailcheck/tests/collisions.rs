// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod collisions_tests {
    use trailcheck::diff::{
        Characteristic, CollisionKind, DiffError, StartMode, WordPair, verify_differential,
    };
    use trailcheck::engine::{Variant, WordWidth, digest, hash};
    use trailcheck_vectors::{ABC_BLOCK_512, KNOWN_ANSWERS, hex_to_bytes};

    fn symbols(base: u64, partner: u64) -> String {
        WordPair::new(base, partner, 32)
            .expect("Failed to build WordPair")
            .to_symbols()
    }

    fn sha256_characteristic(rounds: usize, start: StartMode) -> Characteristic {
        let block = hex_to_bytes(ABC_BLOCK_512);
        let message = core::array::from_fn(|i| {
            let word = u32::from_be_bytes([
                block[4 * i],
                block[4 * i + 1],
                block[4 * i + 2],
                block[4 * i + 3],
            ]);
            symbols(word.into(), word.into())
        });
        let iv = core::array::from_fn(|i| {
            let word = Variant::SHA256.iv()[i];
            symbols(word, word)
        });

        Characteristic::single_block(WordWidth::W32, rounds, 256, start, iv, message)
    }

    #[test]
    fn test_fixed_and_semi_free_start_agree_on_standard_iv() {
        let fixed = verify_differential(&sha256_characteristic(64, StartMode::FixedIv))
            .expect("Failed to verify_differential(..)");
        let free = verify_differential(&sha256_characteristic(64, StartMode::FreeIv))
            .expect("Failed to verify_differential(..)");

        assert_eq!(fixed.kind, CollisionKind::FixedStart);
        assert_eq!(free.kind, CollisionKind::SemiFreeStart);
        assert_eq!(fixed.base_digest, free.base_digest);
        assert_eq!(
            fixed.base_digest.to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_verifier_matches_engine_at_every_round_count() {
        let block = hex_to_bytes(ABC_BLOCK_512);

        for rounds in 16..=64 {
            let report = verify_differential(&sha256_characteristic(rounds, StartMode::FixedIv))
                .expect("Failed to verify_differential(..)");
            let variant = Variant::SHA256
                .with_rounds(rounds)
                .expect("Failed to reduce");

            assert!(report.matched);
            assert_eq!(
                report.base_digest,
                hash(&block, &variant, false).expect("Failed to hash(..)"),
                "rounds={rounds}"
            );
        }
    }

    #[test]
    fn test_out_of_range_rounds() {
        for rounds in [0, 15, 65] {
            assert!(matches!(
                verify_differential(&sha256_characteristic(rounds, StartMode::FixedIv)),
                Err(DiffError::Config(_))
            ));
        }
    }

    #[test]
    fn test_known_answers_through_facade() {
        for kat in KNOWN_ANSWERS {
            let width = WordWidth::from_bits(kat.width_bits).expect("Failed to parse width");
            let variant =
                Variant::canonical(width, kat.digest_bits).expect("Failed to look up variant");

            let out = digest(kat.message, &variant).expect("Failed to digest(..)");
            assert_eq!(out.to_string(), kat.digest_hex, "{}", kat.name);
        }
    }
}
