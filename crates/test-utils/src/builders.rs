#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use filemerge::config::{MergeJob, RawMergeOptions};

/// Builder for `RawMergeOptions` to simplify test setup.
///
/// `new()` fills in the four always-required options; `bare()` starts empty.
pub struct OptionsBuilder {
    options: RawMergeOptions,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::bare()
            .topic("foo1")
            .input_prefix("foo2")
            .output_prefix("foo3")
            .queue("foo4")
    }

    pub fn bare() -> Self {
        Self {
            options: RawMergeOptions::default(),
        }
    }

    pub fn topic(mut self, val: &str) -> Self {
        self.options.topic = Some(val.to_string());
        self
    }

    pub fn without_topic(mut self) -> Self {
        self.options.topic = None;
        self
    }

    pub fn input_prefix(mut self, val: &str) -> Self {
        self.options.input_prefix = Some(val.to_string());
        self
    }

    pub fn output_prefix(mut self, val: &str) -> Self {
        self.options.output_prefix = Some(val.to_string());
        self
    }

    pub fn queue(mut self, val: &str) -> Self {
        self.options.queue = Some(val.to_string());
        self
    }

    pub fn num_reducers(mut self, val: u32) -> Self {
        self.options.num_reducers = Some(val);
        self
    }

    pub fn codec(mut self, val: &str) -> Self {
        self.options.codec = Some(val.to_string());
        self
    }

    pub fn script_dir(mut self, val: impl Into<PathBuf>) -> Self {
        self.options.script_dir = Some(val.into());
        self
    }

    pub fn executable(mut self, val: &str) -> Self {
        self.options.executable = Some(val.to_string());
        self
    }

    pub fn template(mut self, val: impl Into<PathBuf>) -> Self {
        self.options.template = Some(val.into());
        self
    }

    pub fn year(mut self, val: i32) -> Self {
        self.options.year = Some(val);
        self
    }

    pub fn month(mut self, val: u32) -> Self {
        self.options.month = Some(val);
        self
    }

    pub fn day(mut self, val: u32) -> Self {
        self.options.day = Some(val);
        self
    }

    pub fn directory(mut self, val: &str) -> Self {
        self.options.directory = Some(val.to_string());
        self
    }

    pub fn file(mut self, val: impl Into<PathBuf>) -> Self {
        self.options.file = Some(val.into());
        self
    }

    pub fn window(mut self, val: u32) -> Self {
        self.options.window = Some(val);
        self
    }

    pub fn lookback(mut self, val: u32) -> Self {
        self.options.lookback = Some(val);
        self
    }

    pub fn as_of(mut self, val: NaiveDate) -> Self {
        self.options.as_of = Some(val);
        self
    }

    pub fn dry_run(mut self, val: bool) -> Self {
        self.options.dry_run = val;
        self
    }

    pub fn build(self) -> RawMergeOptions {
        self.options
    }

    /// Validate into a job, panicking on invalid options.
    pub fn job(self) -> MergeJob {
        MergeJob::try_from(self.options).expect("Failed to build valid job from builder")
    }
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
