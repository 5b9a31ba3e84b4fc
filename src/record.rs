//! Owned sequence records destined for serialization.

use crate::error::{Error, ErrorKind, Result};
use crate::fasta;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^\w+$").unwrap();
}

/// Checks that `id` consists of one or more word characters (letters,
/// digits, underscore), which keeps it safe as a file name fragment.
pub fn check_identifier(id: &str) -> Result<()> {
    if IDENTIFIER.is_match(id) {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::InvalidIdentifier { id: id.to_string() }))
    }
}

/// A sequence record that owns its data: identifier, description and
/// the (possibly marker-bearing) sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    desc: String,
    seq: Vec<u8>,
}

impl Record {
    /// Creates a record, validating the identifier with
    /// [`check_identifier`](check_identifier). The description may be
    /// any string, including an empty one.
    pub fn new<I, D>(id: I, desc: D, seq: Vec<u8>) -> Result<Record>
    where
        I: Into<String>,
        D: Into<String>,
    {
        let id = id.into();
        check_identifier(&id)?;
        Ok(Record {
            id,
            desc: desc.into(),
            seq,
        })
    }

    /// Returns the record identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the record description.
    #[inline]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Returns the record sequence as a byte slice.
    #[inline]
    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    /// File name the record is saved under: `<id>.fasta`.
    #[inline]
    pub fn file_name(&self) -> String {
        format!("{}.fasta", self.id)
    }

    /// Writes the record to the FASTA format, wrapping the sequence at
    /// [`fasta::WRAP`](crate::fasta::WRAP) characters.
    #[inline]
    pub fn write<W: io::Write>(&self, writer: W) -> io::Result<()> {
        fasta::write(writer, &self.id, &self.desc, &self.seq)
    }
}
