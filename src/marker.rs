//! Splicing of opaque marker text into a generated sequence.

use rand::Rng;

/// A sequence with a marker spliced in at a recorded offset.
///
/// The marker bytes are carried verbatim and never interpreted as
/// nucleotide data by this type. Removing exactly `marker_len` bytes at
/// `offset` restores the original sequence, which is what
/// [`without_marker`](MarkedSequence::without_marker) does. Note that
/// filtering the sequence down to A/C/G/T does *not* reliably restore
/// it, since marker text may itself contain alphabet characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedSequence {
    sequence: Vec<u8>,
    offset: usize,
    marker_len: usize,
}

impl MarkedSequence {
    /// Returns the full sequence including the marker bytes.
    #[inline]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Returns the full sequence, consuming `self`.
    #[inline]
    pub fn into_sequence(self) -> Vec<u8> {
        self.sequence
    }

    /// Offset at which the marker was inserted. Lies in `0..=len` of
    /// the unmarked sequence.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the inserted marker in bytes.
    #[inline]
    pub fn marker_len(&self) -> usize {
        self.marker_len
    }

    /// Reconstructs the sequence as it was before the insertion.
    pub fn without_marker(&self) -> Vec<u8> {
        let mut seq = Vec::with_capacity(self.sequence.len() - self.marker_len);
        seq.extend_from_slice(&self.sequence[..self.offset]);
        seq.extend_from_slice(&self.sequence[self.offset + self.marker_len..]);
        seq
    }
}

/// Inserts `marker` into `sequence` at an offset drawn uniformly from
/// `0..=sequence.len()`, so insertion before the first and after the
/// last base are as likely as any interior position.
///
/// The marker content is not validated: any bytes are accepted,
/// including alphabet characters, digits or punctuation. An empty
/// marker is a valid no-op and yields a sequence equal to the input.
pub fn insert_marker<R: Rng>(rng: &mut R, sequence: &[u8], marker: &[u8]) -> MarkedSequence {
    let offset = rng.gen_range(0..=sequence.len());
    let mut spliced = Vec::with_capacity(sequence.len() + marker.len());
    spliced.extend_from_slice(&sequence[..offset]);
    spliced.extend_from_slice(marker);
    spliced.extend_from_slice(&sequence[offset..]);
    MarkedSequence {
        sequence: spliced,
        offset,
        marker_len: marker.len(),
    }
}
