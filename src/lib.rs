//! This library generates random DNA sequences, splices a user-supplied
//! marker string into them at a random position, computes nucleotide
//! composition statistics and writes the result as a line-wrapped FASTA
//! record.
//!
//! The pipeline consists of four small pieces, each living in its own
//! module:
//!
//! * [`generate::random_sequence`](generate::random_sequence) draws a
//!   sequence of a given length uniformly from the A/C/G/T alphabet.
//! * [`marker::insert_marker`](marker::insert_marker) splices arbitrary
//!   marker text into a sequence at a uniformly random offset.
//! * [`stats::Composition`](stats::Composition) reports per-base
//!   percentages and the combined C+G percentage, counting only genuine
//!   alphabet characters.
//! * [`fasta`](fasta) serializes an identifier, description and sequence
//!   into the FASTA format, wrapping the sequence at
//!   [`fasta::WRAP`](fasta::WRAP) characters per line.
//!
//! The random source is always passed in explicitly, so seeding a
//! generator makes whole runs reproducible.
//!
//! # Example
//!
//! ```
//! use rand::thread_rng;
//! use seq_gen::record::Record;
//! use seq_gen::stats::Composition;
//! use seq_gen::{generate, marker};
//!
//! let mut rng = thread_rng();
//!
//! let seq = generate::random_sequence(&mut rng, 120).unwrap();
//! let marked = marker::insert_marker(&mut rng, &seq, b"Al");
//! assert_eq!(marked.sequence().len(), 122);
//!
//! let comp = Composition::analyze(marked.sequence()).unwrap();
//! assert!(comp.percent_cg() <= 100.0);
//!
//! let record = Record::new("demo_1", "synthetic sequence", marked.into_sequence()).unwrap();
//! let mut out = vec![];
//! record.write(&mut out).unwrap();
//! assert!(out.starts_with(b">demo_1 synthetic sequence\n"));
//! ```

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;
extern crate serde;

pub mod error;
pub mod fasta;
pub mod generate;
pub mod marker;
pub mod record;
pub mod stats;

pub use crate::error::{Error, ErrorKind, Result};

/// The four-symbol nucleotide alphabet. Everything outside of it is
/// treated as opaque marker text by the statistics.
pub const ALPHABET: &[u8; 4] = b"ACGT";
