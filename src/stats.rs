//! Nucleotide composition statistics.
//!
//! Statistics are computed over the characters of a sequence that
//! belong to the A/C/G/T alphabet; every other byte (such as inserted
//! marker text) is skipped. Marker text that itself contains alphabet
//! characters is indistinguishable from sequence data at this point and
//! is counted like any other base.

use crate::error::{Error, ErrorKind, Result};
use crate::ALPHABET;
use serde::{Deserialize, Serialize};

#[inline]
fn base_index(base: u8) -> Option<usize> {
    ALPHABET.iter().position(|&b| b == base)
}

/// Per-base counts over the A/C/G/T characters of a sequence.
///
/// Percentages are derived from the counts on access and keep full
/// `f64` precision; rounding to one decimal is left to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    counts: [u64; 4],
    total: u64,
}

impl Composition {
    /// Counts the A/C/G/T bytes of `seq`, skipping everything else.
    ///
    /// Fails with
    /// [`ErrorKind::DegenerateSequence`](crate::ErrorKind::DegenerateSequence)
    /// if no alphabet character was found, since the percentages would
    /// divide by zero.
    pub fn analyze(seq: &[u8]) -> Result<Composition> {
        let mut counts = [0u64; 4];
        for &base in seq {
            if let Some(i) = base_index(base) {
                counts[i] += 1;
            }
        }
        let total: u64 = counts.iter().sum();
        if total == 0 {
            return Err(Error::new(ErrorKind::DegenerateSequence));
        }
        Ok(Composition { counts, total })
    }

    /// Number of characters that entered the statistics.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count of a single base. Returns 0 for bytes outside the alphabet.
    #[inline]
    pub fn count(&self, base: u8) -> u64 {
        base_index(base).map(|i| self.counts[i]).unwrap_or(0)
    }

    /// Percentage of a single base, in `[0, 100]`. Returns 0.0 for
    /// bytes outside the alphabet.
    #[inline]
    pub fn percent(&self, base: u8) -> f64 {
        self.count(base) as f64 / self.total as f64 * 100.0
    }

    /// Combined percentage of the strong-pairing bases, C and G.
    #[inline]
    pub fn percent_cg(&self) -> f64 {
        self.percent(b'C') + self.percent(b'G')
    }
}
