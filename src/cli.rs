// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::config::RawMergeOptions;

/// Command-line arguments for `filemerge`.
///
/// Exactly one of `--year`, `--directory`, `--file`, `--window` or
/// `--lookback` selects the partitions to merge.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "filemerge",
    version,
    about = "Merge small files per partition by rendering and running a Pig script.",
    long_about = None
)]
pub struct CliArgs {
    /// Year for the merge.
    #[arg(short = 'y', long, value_name = "YYYY")]
    pub year: Option<i32>,

    /// Month for the merge (with --year).
    #[arg(short = 'm', long, value_name = "MM")]
    pub month: Option<u32>,

    /// Day for the merge (with --year).
    #[arg(short = 'd', long, value_name = "DD")]
    pub day: Option<u32>,

    /// Directory containing files to merge, relative to the input prefix.
    #[arg(short = 'D', long, value_name = "NAME")]
    pub directory: Option<String>,

    /// File containing a list of input directories, one per line.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Window in days (merge each of the past N days).
    #[arg(short = 'w', long, value_name = "DAYS")]
    pub window: Option<u32>,

    /// Lookback period (merge the single day N days prior).
    #[arg(short = 'l', long, value_name = "DAYS")]
    pub lookback: Option<u32>,

    /// Reference date for --window and --lookback (default: today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Topic for the merge; names the generated scripts.
    #[arg(short = 't', long)]
    pub topic: Option<String>,

    /// Input directory prefix.
    #[arg(short = 'i', long, value_name = "PREFIX")]
    pub input_prefix: Option<String>,

    /// Output directory prefix.
    #[arg(short = 'o', long, value_name = "PREFIX")]
    pub output_prefix: Option<String>,

    /// Number of reducers (default 10).
    #[arg(short = 'n', long, value_name = "N")]
    pub num_reducers: Option<u32>,

    /// Compression codec to use (gzip, bzip, lzo, snappy).
    #[arg(short = 'c', long)]
    pub codec: Option<String>,

    /// MapReduce job queue.
    #[arg(short = 'q', long)]
    pub queue: Option<String>,

    /// Dry run; create, but don't execute the Pig scripts.
    #[arg(short = 'r', long)]
    pub dry_run: bool,

    /// TOML file with default option values.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the rendered scripts are written to (default `scripts`).
    #[arg(long, value_name = "PATH")]
    pub script_dir: Option<PathBuf>,

    /// Batch engine executable, invoked as `<executable> -f <script>`.
    #[arg(long, value_name = "PROGRAM")]
    pub executable: Option<String>,

    /// Script template to use instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FILEMERGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// The merge options given on the command line.
    pub fn to_raw_options(&self) -> RawMergeOptions {
        RawMergeOptions {
            topic: self.topic.clone(),
            input_prefix: self.input_prefix.clone(),
            output_prefix: self.output_prefix.clone(),
            queue: self.queue.clone(),
            num_reducers: self.num_reducers,
            codec: self.codec.clone(),
            script_dir: self.script_dir.clone(),
            executable: self.executable.clone(),
            template: self.template.clone(),
            year: self.year,
            month: self.month,
            day: self.day,
            directory: self.directory.clone(),
            file: self.file.clone(),
            window: self.window,
            lookback: self.lookback,
            as_of: self.as_of,
            dry_run: self.dry_run,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Full help text, shown when the options do not describe a valid run.
pub fn usage() -> String {
    CliArgs::command().render_help().to_string()
}
