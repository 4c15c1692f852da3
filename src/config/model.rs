// src/config/model.rs

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::partition::Selection;
use crate::types::Codec;

pub const DEFAULT_NUM_REDUCERS: u32 = 10;
pub const DEFAULT_SCRIPT_DIR: &str = "scripts";

/// Unvalidated merge options, as read from a TOML file or the command line.
///
/// A config file uses the same names as the long CLI flags:
///
/// ```toml
/// topic = "clickstream"
/// input_prefix = "/data/raw/clickstream"
/// output_prefix = "/data/merged/clickstream"
/// queue = "etl"
/// num_reducers = 20
/// codec = "snappy"
/// lookback = 2
/// ```
///
/// Every field is optional here; [`MergeJob::try_from`] decides what is
/// required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMergeOptions {
    pub topic: Option<String>,
    pub input_prefix: Option<String>,
    pub output_prefix: Option<String>,
    pub queue: Option<String>,
    pub num_reducers: Option<u32>,
    pub codec: Option<String>,
    pub script_dir: Option<PathBuf>,
    pub executable: Option<String>,
    pub template: Option<PathBuf>,

    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub directory: Option<String>,
    pub file: Option<PathBuf>,
    pub window: Option<u32>,
    pub lookback: Option<u32>,
    /// Reference date for `window` and `lookback`; today if absent.
    pub as_of: Option<NaiveDate>,

    #[serde(default)]
    pub dry_run: bool,
}

impl RawMergeOptions {
    /// Whether any of the five selection options is set.
    pub fn has_selector(&self) -> bool {
        self.year.is_some()
            || self.directory.is_some()
            || self.file.is_some()
            || self.window.is_some()
            || self.lookback.is_some()
    }

    /// Layer `overrides` (usually the command line) on top of `self`.
    ///
    /// Scalar options in `overrides` win. Selection options are taken as a
    /// group: if `overrides` names any selector, none of the selection keys in
    /// `self` are kept, so a file-level default selection never conflicts with
    /// an explicit one. Without a selector in `overrides`, its month and day
    /// still refine the selection from `self`.
    pub fn overlay(self, overrides: RawMergeOptions) -> RawMergeOptions {
        let (year, month, day, directory, file, window, lookback) = if overrides.has_selector() {
            (
                overrides.year,
                overrides.month,
                overrides.day,
                overrides.directory.clone(),
                overrides.file.clone(),
                overrides.window,
                overrides.lookback,
            )
        } else {
            (
                self.year,
                overrides.month.or(self.month),
                overrides.day.or(self.day),
                self.directory.clone(),
                self.file.clone(),
                self.window,
                self.lookback,
            )
        };

        RawMergeOptions {
            topic: overrides.topic.or(self.topic),
            input_prefix: overrides.input_prefix.or(self.input_prefix),
            output_prefix: overrides.output_prefix.or(self.output_prefix),
            queue: overrides.queue.or(self.queue),
            num_reducers: overrides.num_reducers.or(self.num_reducers),
            codec: overrides.codec.or(self.codec),
            script_dir: overrides.script_dir.or(self.script_dir),
            executable: overrides.executable.or(self.executable),
            template: overrides.template.or(self.template),
            year,
            month,
            day,
            directory,
            file,
            window,
            lookback,
            as_of: overrides.as_of.or(self.as_of),
            dry_run: overrides.dry_run || self.dry_run,
        }
    }
}

/// A validated run: everything needed to resolve, render and execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeJob {
    pub topic: String,
    pub input_prefix: String,
    pub output_prefix: String,
    pub queue: String,
    pub num_reducers: u32,
    pub codec: Option<Codec>,
    pub selection: Selection,
    pub script_dir: PathBuf,
    pub executable: String,
    /// Custom template file; the built-in Pig template is used otherwise.
    pub template: Option<PathBuf>,
    pub dry_run: bool,
}
