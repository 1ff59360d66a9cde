use anyhow::{bail, Context, Result};
use std::io::BufRead;

/// One FASTA record with its sequence lines joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// First whitespace-delimited word of the header
    pub id: String,
    /// Remainder of the header line, if any
    pub description: String,
    pub seq: Vec<u8>,
}

/// Parse every record of a FASTA stream.
///
/// Line endings and surrounding whitespace are stripped from sequence
/// lines, blank lines are skipped and case is left untouched.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    let mut records: Vec<FastaRecord> = Vec::new();
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.context(format!("Reading FASTA line {}", line_idx + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            let header = header.trim();
            let (id, description) = match header.split_once(char::is_whitespace) {
                Some((id, rest)) => (id, rest.trim()),
                None => (header, ""),
            };
            records.push(FastaRecord {
                id: id.to_string(),
                description: description.to_string(),
                seq: Vec::new(),
            });
            continue;
        }
        match records.last_mut() {
            Some(record) => record.seq.extend_from_slice(line.as_bytes()),
            None => bail!(
                "sequence data before first FASTA header (line {})",
                line_idx + 1
            ),
        }
    }
    Ok(records)
}
