// src/config/validate.rs

use std::path::PathBuf;
use std::str::FromStr;

use chrono::Local;
use tracing::{error, warn};

use crate::config::model::{DEFAULT_NUM_REDUCERS, DEFAULT_SCRIPT_DIR, MergeJob, RawMergeOptions};
use crate::errors::{FilemergeError, Result};
use crate::exec::DEFAULT_EXECUTABLE;
use crate::partition::Selection;
use crate::types::Codec;

impl TryFrom<RawMergeOptions> for MergeJob {
    type Error = FilemergeError;

    fn try_from(raw: RawMergeOptions) -> std::result::Result<Self, Self::Error> {
        let topic = required(raw.topic.as_deref(), "topic")?;
        let input_prefix = required(raw.input_prefix.as_deref(), "input_prefix")?;
        let output_prefix = required(raw.output_prefix.as_deref(), "output_prefix")?;
        let queue = required(raw.queue.as_deref(), "queue")?;

        let selection = build_selection(&raw)?;

        let codec = raw.codec.as_deref().map(parse_codec).transpose()?;

        let num_reducers = raw.num_reducers.unwrap_or(DEFAULT_NUM_REDUCERS);
        if num_reducers == 0 {
            error!(parameter = "num_reducers", "reducer count must be positive");
            return Err(FilemergeError::invalid("num_reducers", 0, "must be at least 1"));
        }

        Ok(MergeJob {
            topic,
            input_prefix,
            output_prefix,
            queue,
            num_reducers,
            codec,
            selection,
            script_dir: raw
                .script_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT_DIR)),
            executable: raw
                .executable
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EXECUTABLE.to_string()),
            template: raw.template,
            dry_run: raw.dry_run,
        })
    }
}

/// An absent or blank value counts as missing.
fn required(value: Option<&str>, name: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => {
            error!(parameter = name, "required option missing");
            Err(FilemergeError::MissingRequiredParameter(name))
        }
    }
}

fn parse_codec(name: &str) -> Result<Codec> {
    Codec::from_str(name).inspect_err(|_| {
        error!(codec = name, "unsupported compression codec");
    })
}

/// Turn the five mutually exclusive selectors into exactly one [`Selection`].
fn build_selection(raw: &RawMergeOptions) -> Result<Selection> {
    let directory = raw.directory.as_ref().filter(|d| !d.trim().is_empty());

    let given = [
        raw.year.is_some(),
        directory.is_some(),
        raw.file.is_some(),
        raw.window.is_some(),
        raw.lookback.is_some(),
    ]
    .into_iter()
    .filter(|set| *set)
    .count();

    if given != 1 {
        error!(selectors = given, "exactly one input selection option is required");
        return Err(FilemergeError::InvalidSourceSelection);
    }

    if raw.year.is_none() && (raw.month.is_some() || raw.day.is_some()) {
        warn!("month/day are only used together with year; ignoring them");
    }

    let selection = if let Some(year) = raw.year {
        Selection::Calendar {
            year,
            month: raw.month,
            day: raw.day,
        }
    } else if let Some(name) = directory {
        Selection::Directory { name: name.clone() }
    } else if let Some(path) = &raw.file {
        Selection::FileList { path: path.clone() }
    } else if let Some(days) = raw.window {
        if days == 0 {
            error!(parameter = "window", "window must cover at least one day");
            return Err(FilemergeError::invalid("window", days, "must be at least 1"));
        }
        Selection::TrailingWindow {
            days,
            reference: raw.as_of.unwrap_or_else(|| Local::now().date_naive()),
        }
    } else if let Some(days) = raw.lookback {
        Selection::FixedLookback {
            days,
            reference: raw.as_of,
        }
    } else {
        return Err(FilemergeError::InvalidSourceSelection);
    };

    Ok(selection)
}
