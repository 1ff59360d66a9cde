use anyhow::{Context, Result};
use clap::Parser;
use gcskew::cli::counters::BaseCounters;
use gcskew::cli::io::read_seq;
use gcskew::cli::opts::{InputArgs, OutputArgs, SelectionArgs};
use gcskew::cli::records::{resolve_records, SeqSource};
use gcskew::skew::profile::{compute_skew, SkewSummary};
use gcskew::skew::report::{format_summary, format_table};
use gcskew::skew::write::{sanitize_name, write_skew_csv, write_skew_npz, write_summary_csv};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::{fs::create_dir_all, sync::Arc, time::Instant};

/// Command-line options for the GC skew profiler
#[derive(Parser)]
#[command(
    name = "gcskew",
    about = "Compute cumulative GC skew profiles and their minima",
    long_about = "Compute cumulative GC skew (#G - #C) profiles and locate their minima.

The positions of the minimum skew are candidates for the origin of replication
in bacterial genomes. Every tied minimum position is reported.

EXAMPLES:
    // One profile per FASTA record
    $ gcskew --fasta <path/to/genome.fa> --output-dir <path/to/output_directory/> --n-threads <N>

    // Quick look at a short sequence
    $ gcskew --sequence CAGC --output-dir out/ --show-table
    ",
    version = "0.1.0"
)]
struct Cli {
    #[clap(flatten)]
    input: InputArgs,

    #[clap(flatten)]
    selection: SelectionArgs,

    #[clap(flatten)]
    output: OutputArgs,
}

struct RecordResult {
    name: String,
    summary: SkewSummary,
    counters: BaseCounters,
    table: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
    std::process::exit(0);
}

fn run() -> Result<()> {
    let start_time = Instant::now();
    let opt = Cli::parse();
    let mode = opt.output.write_mode();

    create_dir_all(&opt.output.output_dir).context("Cannot create output_dir")?;

    println!("Start: Loading sequences");
    let records = resolve_records(&opt.input, opt.selection.records.as_deref())?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(opt.output.n_threads)
        .build_global()
        .context("building Rayon thread pool")?;

    let pb = Arc::new(ProgressBar::new(records.len() as u64));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("       {bar:40} {pos}/{len} [{elapsed_precise}] {msg}")
            .context("progress bar template")?,
    );

    println!("Start: Profiling {} record(s)", records.len());
    let results: Vec<RecordResult> = records
        .into_par_iter()
        .map(|(name, source)| -> Result<RecordResult> {
            let out = process_record(name, source, &opt);
            pb.inc(1);
            out
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("| Finished profiling");

    for res in &results {
        if let Some(table) = &res.table {
            println!("\n{}", res.name);
            print!("{}", table);
        }
        println!("{}", format_summary(&res.name, &res.summary, &res.counters));
    }

    println!("Start: Writing summary to disk");
    let summaries: Vec<(String, SkewSummary)> = results
        .iter()
        .map(|res| (res.name.clone(), res.summary.clone()))
        .collect();
    write_summary_csv(&opt.output.output_dir.join("minima.csv"), &summaries, mode)?;

    let mut totals = BaseCounters::default();
    for res in &results {
        totals += res.counters;
    }
    println!(
        "Bases: {} total, {} G, {} C, {} other",
        totals.total, totals.g, totals.c, totals.neutral
    );

    let elapsed = start_time.elapsed();
    println!("Elapsed time: {:.2?}", elapsed);
    Ok(())
}

/* ---------- per-record routine -------------------------------------- */

/// Profile and write one record
fn process_record(name: String, source: SeqSource, opt: &Cli) -> Result<RecordResult> {
    let seq = match source {
        SeqSource::Loaded(seq) => seq,
        SeqSource::TwoBit(path) => read_seq(&path, &name)?,
    };

    let counters = BaseCounters::tally(&seq);
    let skew = compute_skew(&seq);
    let summary =
        SkewSummary::from_skew(&skew).context(format!("summarising skew for {}", name))?;

    let out_dir = &opt.output.output_dir;
    let stem = sanitize_name(&name);
    write_skew_csv(
        &out_dir.join(format!("{}_skew.csv", stem)),
        &seq,
        &skew,
        opt.output.write_mode(),
    )
    .context(format!("writing skew table for {}", name))?;
    if opt.output.save_npz {
        write_skew_npz(&out_dir.join(format!("{}_skew.npz", stem)), &skew, &summary)
            .context(format!("writing skew arrays for {}", name))?;
    }

    let table = if opt.output.show_table {
        Some(format_table(&seq, &skew))
    } else {
        None
    };

    Ok(RecordResult {
        name,
        summary,
        counters,
        table,
    })
}
