// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Plain-text audit rendering
//!
//! Values are printed as big-endian hex words, 256 bits per row. Rows
//! prefixed with `d` hold the XOR difference of the two rows above.

use core::fmt;

use trailcheck_core::WordWidth;

use crate::raw::RawReport;
use crate::verify::{CollisionKind, VerificationReport};

const ROW_BITS: usize = 256;

fn write_rows(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    bytes: &[u8],
    width: WordWidth,
) -> fmt::Result {
    let per_row = ROW_BITS / width.bits() as usize;
    let words: Vec<String> = bytes.chunks(width.bytes()).map(hex::encode).collect();

    for (i, row) in words.chunks(per_row).enumerate() {
        let label = if i == 0 { label } else { "" };
        writeln!(f, "{label:<5}{}", row.join(" "))?;
    }

    Ok(())
}

fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

fn iv_bytes(iv: &[u64], width: WordWidth) -> Vec<u8> {
    iv.iter()
        .flat_map(|w| w.to_be_bytes()[8 - width.bytes()..].to_vec())
        .collect()
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.matched { "holds" } else { "FAILS" };
        writeln!(
            f,
            "{} collision for {} rounds of {}: {outcome}",
            self.kind, self.rounds, self.name
        )?;
        writeln!(f)?;

        if self.kind != CollisionKind::FixedStart {
            let base = iv_bytes(&self.base_iv, self.width);
            write_rows(f, "h0", &base, self.width)?;

            if self.kind == CollisionKind::FreeStart {
                let partner = iv_bytes(&self.partner_iv, self.width);
                write_rows(f, "h0*", &partner, self.width)?;
                write_rows(f, "dh0", &xor(&base, &partner), self.width)?;
            }
            writeln!(f)?;
        }

        write_rows(f, "m", &self.base_message, self.width)?;
        write_rows(f, "m*", &self.partner_message, self.width)?;
        let delta = xor(&self.base_message, &self.partner_message);
        write_rows(f, "dm", &delta, self.width)?;
        writeln!(f)?;

        write_rows(f, "h1", self.base_digest.as_bytes(), self.width)?;
        if !self.matched {
            write_rows(f, "h1*", self.partner_digest.as_bytes(), self.width)?;
        }

        Ok(())
    }
}

impl fmt::Display for RawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "message: {}", hex::encode(&self.message))?;
        writeln!(f, "digest:  {}", self.digest)?;
        write!(f, "(after {} rounds of {})", self.rounds, self.name)
    }
}
