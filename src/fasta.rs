//! FASTA serialization.
//!
//! A record is written as a single header line (`>` followed by the
//! identifier, a space and the description) and the sequence wrapped
//! into lines of at most [`WRAP`] characters. The wrapping is cosmetic
//! line-folding only: no characters are dropped, added or reordered,
//! and concatenating the body lines yields the sequence unchanged.
//!
//! The writing functions are generic over `io::Write`, so records can
//! go to a file, a `Vec<u8>` or anything else. [`save`](save()) is the
//! convenience path used by the shell: it creates `<id>.fasta` in a
//! given directory and guarantees the handle is flushed and closed.

use crate::error::Result;
use crate::record::Record;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Standard FASTA line width used by [`write`](write()) and
/// [`save`](save()).
pub const WRAP: usize = 60;

/// Writes a record to the FASTA format, wrapping the sequence to lines
/// of at most [`WRAP`] characters.
#[inline]
pub fn write<W>(mut writer: W, id: &str, desc: &str, seq: &[u8]) -> io::Result<()>
where
    W: io::Write,
{
    write_head(&mut writer, id, desc)?;
    write_wrap_seq(writer, seq, WRAP)
}

/// Like [`write`](write()), but with a maximum line width specified by
/// the `wrap` parameter.
#[inline]
pub fn write_wrap<W>(mut writer: W, id: &str, desc: &str, seq: &[u8], wrap: usize) -> io::Result<()>
where
    W: io::Write,
{
    write_head(&mut writer, id, desc)?;
    write_wrap_seq(writer, seq, wrap)
}

/// Writes only the header line. The space separating identifier and
/// description is always written, even for an empty description.
#[inline]
pub fn write_head<W>(mut writer: W, id: &str, desc: &str) -> io::Result<()>
where
    W: io::Write,
{
    writer.write_all(b">")?;
    writer.write_all(id.as_bytes())?;
    writer.write_all(b" ")?;
    writer.write_all(desc.as_bytes())?;
    writer.write_all(b"\n")
}

/// Writes only the sequence lines, wrapped to a maximum width of
/// `wrap` characters. The final line may be shorter; every line is
/// terminated with `\n` and no trailing blank line is appended.
#[inline]
pub fn write_wrap_seq<W>(mut writer: W, seq: &[u8], wrap: usize) -> io::Result<()>
where
    W: io::Write,
{
    assert!(wrap > 0);
    for chunk in seq.chunks(wrap) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Saves `record` to `<id>.fasta` inside `dir` and returns the path of
/// the written file.
///
/// The file handle is buffered, flushed explicitly and released on
/// every exit path.
pub fn save<P: AsRef<Path>>(record: &Record, dir: P) -> Result<PathBuf> {
    let path = dir.as_ref().join(record.file_name());
    let mut writer = BufWriter::new(File::create(&path)?);
    record.write(&mut writer)?;
    writer.flush()?;
    Ok(path)
}
