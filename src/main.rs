use std::io::{self, BufRead, Write};
use std::process::exit;

use log::info;
use rand::thread_rng;

use seq_gen::error::{Error, ErrorKind, Result};
use seq_gen::record::{check_identifier, Record};
use seq_gen::stats::Composition;
use seq_gen::{fasta, generate, marker, ALPHABET};

fn prompt(text: &str) -> io::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run() -> Result<()> {
    // All input is validated before anything is generated or written,
    // so a failed run never leaves a file behind.
    let input = prompt("Sequence length: ")?;
    let length: usize = input
        .parse()
        .map_err(|_| Error::new(ErrorKind::InvalidLength {
            input: input.clone(),
        }))?;
    if length == 0 {
        return Err(Error::new(ErrorKind::InvalidLength { input }));
    }

    let id = prompt("Sequence ID: ")?;
    check_identifier(&id)?;
    let desc = prompt("Description: ")?;
    let marker_text = prompt("Marker text: ")?;

    let mut rng = thread_rng();
    let sequence = generate::random_sequence(&mut rng, length)?;
    let marked = marker::insert_marker(&mut rng, &sequence, marker_text.as_bytes());
    info!(
        "inserted {} marker byte(s) at offset {}",
        marked.marker_len(),
        marked.offset()
    );

    let composition = Composition::analyze(marked.sequence())?;
    let record = Record::new(id, desc, marked.into_sequence())?;
    let path = fasta::save(&record, ".")?;
    info!(
        "wrote {} ({} sequence bytes)",
        path.display(),
        record.seq().len()
    );

    println!();
    println!("Sequence saved to {}", record.file_name());
    println!("Generated sequence (with marker):");
    println!("{}", String::from_utf8_lossy(record.seq()));
    println!("Sequence statistics:");
    for &base in ALPHABET.iter() {
        println!("{}: {:.1}%", base as char, composition.percent(base));
    }
    println!("%CG: {:.1}", composition.percent_cg());
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{}", e);
        exit(1);
    }
}
