//! Random synthesis of nucleotide sequences.

use crate::error::{Error, ErrorKind, Result};
use crate::ALPHABET;
use rand::Rng;

/// Generates a sequence of exactly `length` bases, each drawn
/// independently and uniformly from [`ALPHABET`](crate::ALPHABET).
///
/// Draws are made with replacement, so any base may repeat. The random
/// source is supplied by the caller; a seeded generator makes the
/// output reproducible.
///
/// A length of zero is rejected with
/// [`ErrorKind::InvalidLength`](crate::ErrorKind::InvalidLength).
pub fn random_sequence<R: Rng>(rng: &mut R, length: usize) -> Result<Vec<u8>> {
    if length == 0 {
        return Err(Error::new(ErrorKind::InvalidLength {
            input: length.to_string(),
        }));
    }
    Ok((0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect())
}
