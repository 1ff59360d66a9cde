use crate::skew::write::WriteMode;
use clap::Args;
use std::path::PathBuf;

/// Sequence source (select one)
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// FASTA file, one profile per record [path]
    #[clap(short = 'f', long, value_parser, help_heading = "Input (select one)")]
    pub fasta: Option<PathBuf>,

    /// 2bit reference file, one profile per sequence [path]
    /// E.g., "ecoli.2bit"
    #[clap(short = 'r', long, value_parser, help_heading = "Input (select one)")]
    pub ref_2bit: Option<PathBuf>,

    /// Literal sequence given on the command line [string]
    ///
    /// Reported under the record name 'sequence'.
    #[clap(short = 's', long, help_heading = "Input (select one)")]
    pub sequence: Option<String>,
}

#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Names of records to profile (comma-separated or repeated). E.g. 'chr1,plasmid1'.
    ///
    /// When no records are specified, every record in the input is profiled.
    #[clap(long, num_args = 1.., value_parser, value_delimiter = ',', help_heading = "Selection")]
    pub records: Option<Vec<String>>,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output directory for results [path]
    #[clap(
        short = 'o',
        long,
        value_parser,
        required = true,
        help_heading = "Core"
    )]
    pub output_dir: PathBuf,

    /// Number of threads to use (records are profiled in parallel) [integer]
    #[clap(short = 't', long, default_value = "1", help_heading = "Core")]
    pub n_threads: usize,

    /// Append to existing CSV files instead of overwriting them [flag]
    ///
    /// The header is only written when a file is new or empty.
    #[clap(long, help_heading = "Output")]
    pub append: bool,

    /// Also save each profile as a NumPy `.npz` archive [flag]
    ///
    /// Holds the `skew`, `min_positions` and `max_positions` arrays and can be
    /// opened in python via `numpy.load()` for plotting.
    #[clap(long, help_heading = "Output")]
    pub save_npz: bool,

    /// Print the per-base Index | Base | Delta | Skew table [flag]
    #[clap(long, help_heading = "Output")]
    pub show_table: bool,
}

impl OutputArgs {
    pub fn write_mode(&self) -> WriteMode {
        if self.append {
            WriteMode::Append
        } else {
            WriteMode::Truncate
        }
    }
}
