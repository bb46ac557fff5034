// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-2 compression function per FIPS 180-4 Section 6.2.2 steps 2-4,
//! generalized over the word width and the number of rounds.

use crate::consts::STATE_WORDS;
use crate::error::ConfigError;
use crate::schedule::{MessageBlock, RoundSchedule};
use crate::word::Word;

/// Chaining value H(i): registers a..h
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainingState<W: Word>([W; STATE_WORDS]);

impl<W: Word> ChainingState<W> {
    /// Start from an IV
    pub const fn new(iv: [W; STATE_WORDS]) -> Self {
        Self(iv)
    }

    /// Start from an IV given as widened words
    ///
    /// Fails if any word has bits above the width.
    pub fn from_u64_words(iv: &[u64; STATE_WORDS]) -> Result<Self, ConfigError> {
        let mut words = [W::default(); STATE_WORDS];
        for (index, (word, &value)) in words.iter_mut().zip(iv.iter()).enumerate() {
            *word = W::try_from_u64(value).ok_or(ConfigError::IvOutOfRange {
                index,
                value,
                width: W::WIDTH.bits(),
            })?;
        }

        Ok(Self(words))
    }

    /// Registers a..h
    pub fn words(&self) -> &[W; STATE_WORDS] {
        &self.0
    }

    /// Registers a..h widened to u64
    pub fn to_u64_words(&self) -> [u64; STATE_WORDS] {
        self.0.map(W::to_u64)
    }

    /// Run the rounds driven by `schedule`, then feed forward into H
    ///
    /// The round count is the schedule length, which `RoundSchedule::expand`
    /// has already validated.
    pub fn compress(&mut self, schedule: &RoundSchedule<W>) {
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.0;

        for (&k, &wt) in W::K.iter().zip(schedule.as_slice()) {
            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            let t1 = W::add_all([h, e.bsig1(), W::ch(e, f, g), k, wt]);
            // T2 = Σ0(a) + Maj(a,b,c)
            let t2 = a.bsig0().add_mod(W::maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.add_mod(t1);
            d = c;
            c = b;
            b = a;
            a = t1.add_mod(t2);
        }

        for (hi, wv) in self.0.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *hi = hi.add_mod(wv);
        }
    }

    /// Expand `block` and compress it with `rounds` rounds
    pub fn compress_block(
        &mut self,
        block: &MessageBlock<W>,
        rounds: usize,
    ) -> Result<(), ConfigError> {
        let schedule = RoundSchedule::expand(block, rounds)?;
        self.compress(&schedule);

        Ok(())
    }
}
