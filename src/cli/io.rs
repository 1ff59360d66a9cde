use crate::skew::fasta::{parse_fasta, FastaRecord};
use anyhow::{bail, Context, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use twobit::TwoBitFile;

// FASTA

/// First two bytes of every gzip member
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read a plain or gzip-compressed FASTA file (detected from its magic bytes).
pub fn read_fasta(path: &Path) -> Result<Vec<FastaRecord>> {
    let f = File::open(path).context(format!("Opening FASTA {:?}", path))?;
    let mut reader = BufReader::new(f);
    let is_gzip = reader
        .fill_buf()
        .context(format!("Reading FASTA {:?}", path))?
        .starts_with(&GZIP_MAGIC);
    let records = if is_gzip {
        parse_fasta(BufReader::new(MultiGzDecoder::new(reader)))
    } else {
        parse_fasta(reader)
    }
    .context(format!("Parsing FASTA {:?}", path))?;
    if records.is_empty() {
        bail!("No FASTA records found in {:?}", path);
    }
    Ok(records)
}

// Reference 2bit file

pub fn list_2bit_sequences(path: &Path) -> Result<Vec<String>> {
    let tb = TwoBitFile::open(path).context("opening 2bit")?;
    Ok(tb.chrom_names())
}

pub fn read_seq(path: &Path, chr: &str) -> Result<Vec<u8>> {
    let mut tb = TwoBitFile::open(path).context("opening 2bit")?;
    let seq = tb
        .read_sequence(chr, ..)
        .context(format!("extracting reference seq for {}", chr))?;
    Ok(seq.into_bytes())
}
