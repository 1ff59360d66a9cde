use crate::cli::Skew;
use crate::skew::delta::delta;
use crate::skew::profile::SkewSummary;
use anyhow::{Context, Result};
use ndarray::{Array1, ArrayView1};
use ndarray_npy::NpzWriter;
use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const SKEW_CSV_HEADER: &str = "Index,Base,Delta,Skew";
pub const SUMMARY_CSV_HEADER: &str =
    "Record,Length,FinalSkew,MinSkew,MinCount,MinPositions,MaxSkew,MaxCount,MaxPositions";

/// How an existing CSV output file is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Recreate the file on every run
    #[default]
    Truncate,
    /// Append rows; the header is only written to a new or empty file
    Append,
}

/// Open `path` according to `mode` and write `header` when the file is empty.
fn open_csv(path: &Path, mode: WriteMode, header: &str) -> Result<BufWriter<File>> {
    let file = match mode {
        WriteMode::Truncate => File::create(path),
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
    }
    .context(format!("Opening {:?} for writing", path))?;
    let is_empty = file
        .metadata()
        .context(format!("Reading metadata of {:?}", path))?
        .len()
        == 0;
    let mut writer = BufWriter::new(file);
    if is_empty {
        writeln!(writer, "{}", header).context("Write CSV header fail")?;
    }
    Ok(writer)
}

/// Write the per-base table `Index,Base,Delta,Skew`.
///
/// Row `i` (1-based) holds `seq[i-1]`, its delta and `skew[i]`; the leading
/// zero of the profile has no base and gets no row.
pub fn write_skew_csv(path: &Path, seq: &[u8], skew: &[Skew], mode: WriteMode) -> Result<()> {
    let mut writer = open_csv(path, mode, SKEW_CSV_HEADER)?;
    for (i, (&base, &value)) in seq.iter().zip(skew.iter().skip(1)).enumerate() {
        writeln!(
            writer,
            "{},{},{},{}",
            i + 1,
            csv_field(&(base as char).to_string()),
            delta(base),
            value
        )
        .context("Write skew row fail")?;
    }
    writer.flush().context("Flushing skew CSV")?;
    Ok(())
}

/// Write one summary row per record (in the given order).
pub fn write_summary_csv(
    path: &Path,
    summaries: &[(String, SkewSummary)],
    mode: WriteMode,
) -> Result<()> {
    let mut writer = open_csv(path, mode, SUMMARY_CSV_HEADER)?;
    for (name, s) in summaries {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            csv_field(name),
            s.length,
            s.final_skew,
            s.min_skew,
            s.min_positions.len(),
            join_positions(&s.min_positions),
            s.max_skew,
            s.max_positions.len(),
            join_positions(&s.max_positions)
        )
        .context("Write summary row fail")?;
    }
    writer.flush().context("Flushing summary CSV")?;
    Ok(())
}

/// Write `skew`, `min_positions` and `max_positions` into one `.npz` archive.
///
/// Positions index into `skew`, whose implicit x-axis is `0..=N`.
pub fn write_skew_npz(path: &Path, skew: &[Skew], summary: &SkewSummary) -> Result<()> {
    let file = File::create(path).context(format!("Creating {:?}", path))?;
    let mut npz = NpzWriter::new(file);
    npz.add_array("skew", &ArrayView1::from(skew))?;
    npz.add_array("min_positions", &positions_array(&summary.min_positions))?;
    npz.add_array("max_positions", &positions_array(&summary.max_positions))?;
    npz.finish().context(format!("Finishing {:?}", path))?;
    Ok(())
}

fn positions_array(positions: &[usize]) -> Array1<u64> {
    positions.iter().map(|&p| p as u64).collect()
}

/// Quote a CSV field when it holds a comma, quote or line break (RFC 4180).
pub fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// `;`-separated positions, e.g. `1;2;4`
pub fn join_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

/// Make a record name safe to use as a file name stem.
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "record".to_string()
    } else {
        cleaned
    }
}
