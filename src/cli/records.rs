use crate::cli::io::{list_2bit_sequences, read_fasta};
use crate::cli::opts::InputArgs;
use crate::skew::fasta::FastaRecord;
use crate::skew::write::sanitize_name;
use anyhow::{bail, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Name reported for a `--sequence` given on the command line
pub const LITERAL_RECORD_NAME: &str = "sequence";

/// Where a record's sequence comes from
#[derive(Debug, PartialEq, Eq)]
pub enum SeqSource {
    Loaded(Vec<u8>),
    TwoBit(PathBuf),
}

/// Drop repeated names, keeping the first occurrence and the given order.
pub fn dedup_names(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

/// Keep the FASTA records named in `selected` (all when `None`), in file order.
///
/// Repeated ids in the file and selected names absent from it are errors.
pub fn select_fasta_records(
    records: Vec<FastaRecord>,
    selected: Option<&[String]>,
    path: &Path,
) -> Result<Vec<(String, SeqSource)>> {
    let mut seen = HashSet::new();
    for rec in &records {
        if !seen.insert(rec.id.as_str()) {
            bail!("Duplicate record name {:?} in {:?}", rec.id, path);
        }
    }
    if let Some(names) = selected {
        for name in names {
            if !seen.contains(name.as_str()) {
                bail!("Record {:?} not found in {:?}", name, path);
            }
        }
    }
    Ok(records
        .into_iter()
        .filter(|rec| selected.map_or(true, |names| names.contains(&rec.id)))
        .map(|rec| (rec.id, SeqSource::Loaded(rec.seq)))
        .collect())
}

/// Fail when two records would write to the same `<stem>_skew.*` files.
pub fn check_output_stems<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut stems: HashMap<String, &str> = HashMap::new();
    for name in names {
        let stem = sanitize_name(name);
        if let Some(other) = stems.get(&stem) {
            bail!(
                "Records {:?} and {:?} would both be written to {}_skew.*",
                other,
                name,
                stem
            );
        }
        stems.insert(stem, name);
    }
    Ok(())
}

/// Returns the records to profile, in input order, with distinct output stems
pub fn resolve_records(
    input: &InputArgs,
    selected: Option<&[String]>,
) -> Result<Vec<(String, SeqSource)>> {
    let selected = selected.map(dedup_names);
    let selected = selected.as_deref();
    let records = if let Some(path) = &input.fasta {
        select_fasta_records(read_fasta(path)?, selected, path)?
    } else if let Some(path) = &input.ref_2bit {
        let names = match selected {
            Some(names) => names.to_vec(),
            None => list_2bit_sequences(path)?,
        };
        names
            .into_iter()
            .map(|name| (name, SeqSource::TwoBit(path.clone())))
            .collect()
    } else if let Some(seq) = &input.sequence {
        vec![(
            LITERAL_RECORD_NAME.to_string(),
            SeqSource::Loaded(seq.as_bytes().to_vec()),
        )]
    } else {
        bail!("No input given (use --fasta, --ref-2bit or --sequence)")
    };
    check_output_stems(records.iter().map(|(name, _)| name.as_str()))?;
    Ok(records)
}
