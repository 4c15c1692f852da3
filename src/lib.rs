// src/lib.rs

pub mod cli;
pub mod config;
pub mod driver;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod partition;
pub mod render;
pub mod types;

use crate::cli::CliArgs;
use crate::config::{MergeJob, resolve_options};
use crate::driver::{RunSummary, run_job};
use crate::errors::Result;
use crate::exec::PigRunner;
use crate::fs::RealFileSystem;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - option layering (config file, then command line) and validation
/// - partition resolution
/// - the render / write / run loop against the real filesystem and engine
pub async fn run(args: CliArgs) -> Result<RunSummary> {
    let fs = RealFileSystem;
    let job = resolve_options(&fs, args.config.as_deref(), args.to_raw_options())?;

    let mut runner = PigRunner::new(job.executable.clone());
    let summary = run_job(&job, &fs, &mut runner).await?;

    if job.dry_run {
        print_dry_run(&job, &summary);
    }
    Ok(summary)
}

/// Dry-run output: one line per script that would have been executed.
fn print_dry_run(job: &MergeJob, summary: &RunSummary) {
    println!("filemerge dry-run ({} partitions)", summary.partitions);
    for path in &summary.scripts_written {
        println!("  {} -f {}", job.executable, path.display());
    }
}
