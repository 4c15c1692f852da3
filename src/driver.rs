// src/driver.rs

//! Per-partition render / write / run loop.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::MergeJob;
use crate::errors::Result;
use crate::exec::ScriptRunner;
use crate::fs::FileSystem;
use crate::partition::{self, Partition, join_path};
use crate::render::{PIG_TEMPLATE, Substitutions, render, template};
use crate::types::Codec;

/// What a completed (or dry) run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub partitions: usize,
    pub scripts_written: Vec<PathBuf>,
    pub scripts_run: usize,
}

/// The two compression lines of the script: the enabled flag and the codec
/// setting, which is empty when no codec was requested.
pub fn compression_lines(codec: Option<Codec>) -> (String, String) {
    match codec {
        Some(codec) => (
            "set output.compression.enabled true".to_string(),
            format!("set output.compression.codec {}", codec.class_name()),
        ),
        None => (
            "set output.compression.enabled false".to_string(),
            String::new(),
        ),
    }
}

pub fn build_substitutions(job: &MergeJob, partition: &Partition) -> Substitutions {
    let (enabled, codec) = compression_lines(job.codec);
    Substitutions::new()
        .with(
            template::OUTPUT_PATH,
            join_path(&job.output_prefix, partition.identifier()),
        )
        .with(template::INPUT_PATH, partition.source_pattern())
        .with(template::NUM_REDUCERS, job.num_reducers)
        .with(template::SET_COMPRESSION_ENABLED, enabled)
        .with(template::SET_COMPRESSION_CODEC, codec)
        .with(template::QUEUE, &job.queue)
}

/// `<script_dir>/<topic>-<identifier>.pig`.
///
/// Path separators in the identifier become `_` so every script lands
/// directly in the script directory.
pub fn script_path(job: &MergeJob, partition: &Partition) -> PathBuf {
    let identifier = partition.identifier().replace(['/', '\\'], "_");
    job.script_dir
        .join(format!("{}-{}.pig", job.topic, identifier))
}

/// The custom template if one was configured, the built-in one otherwise.
pub fn load_template(fs: &dyn FileSystem, custom: Option<&Path>) -> Result<String> {
    match custom {
        Some(path) => {
            debug!(template = %path.display(), "loading custom script template");
            Ok(fs.read_to_string(path)?)
        }
        None => Ok(PIG_TEMPLATE.to_string()),
    }
}

/// Render, write and (unless dry-run) execute one script per partition.
///
/// Partitions are processed in order. The first failing script stops the
/// loop; scripts already written and partitions already merged are kept.
pub async fn run_job(
    job: &MergeJob,
    fs: &dyn FileSystem,
    runner: &mut dyn ScriptRunner,
) -> Result<RunSummary> {
    let template = load_template(fs, job.template.as_deref())?;
    let partitions = partition::resolve(&job.selection, &job.input_prefix, fs)?;

    info!(
        topic = %job.topic,
        mode = %job.selection.mode(),
        partitions = partitions.len(),
        dry_run = job.dry_run,
        "starting merge"
    );

    let mut summary = RunSummary {
        partitions: partitions.len(),
        ..RunSummary::default()
    };
    if partitions.is_empty() {
        return Ok(summary);
    }

    if !fs.exists(&job.script_dir) {
        fs.create_private_dir(&job.script_dir)?;
    }

    for partition in &partitions {
        let substitutions = build_substitutions(job, partition);
        let script = render(&template, &substitutions)?;
        let path = script_path(job, partition);

        fs.write(&path, script.as_bytes())?;
        debug!(
            partition = partition.identifier(),
            script = %path.display(),
            "wrote script"
        );
        summary.scripts_written.push(path.clone());

        if job.dry_run {
            info!(script = %path.display(), "dry run; not executing");
            continue;
        }

        if let Err(err) = runner.run_script(&path).await {
            error!(
                partition = partition.identifier(),
                script = %path.display(),
                error = %err,
                "merge failed; skipping remaining partitions"
            );
            return Err(err);
        }
        summary.scripts_run += 1;
    }

    info!(
        written = summary.scripts_written.len(),
        executed = summary.scripts_run,
        "merge finished"
    );
    Ok(summary)
}
