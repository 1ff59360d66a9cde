use crate::cli::counters::BaseCounters;
use crate::cli::Skew;
use crate::skew::delta::delta;
use crate::skew::profile::SkewSummary;
use crate::skew::write::join_positions;

/// Render the per-base console table:
///
/// ```text
/// Index | Base | Delta | Skew
/// -----------------------------
///     1 |   C   |    -1 |   -1
/// ```
pub fn format_table(seq: &[u8], skew: &[Skew]) -> String {
    let mut out = String::new();
    out.push_str("Index | Base | Delta | Skew\n");
    out.push_str("-----------------------------\n");
    for (i, (&base, &value)) in seq.iter().zip(skew.iter().skip(1)).enumerate() {
        out.push_str(&format!(
            "{:5} |   {}   | {:+5} | {:4}\n",
            i + 1,
            base as char,
            delta(base),
            value
        ));
    }
    out
}

/// One-line description of a profiled record
pub fn format_summary(name: &str, summary: &SkewSummary, counters: &BaseCounters) -> String {
    format!(
        "{}: length {}, GC {:.2}%, final skew {}, min skew {} at [{}], max skew {} at [{}]",
        name,
        summary.length,
        counters.gc_pct(),
        summary.final_skew,
        summary.min_skew,
        join_positions(&summary.min_positions).replace(';', ", "),
        summary.max_skew,
        join_positions(&summary.max_positions).replace(';', ", ")
    )
}
