// src/partition/mod.rs

//! Partition resolution.
//!
//! A run works on a list of [`Partition`]s, each one a unit of source data
//! (a calendar day or a named directory) that gets its own rendered script.
//!
//! - [`calendar`] holds the day-count rules and the `d_YYYYMMDD` naming.
//! - [`resolver`] has one flat function per selection mode plus the
//!   [`resolve`] entry point that dispatches on a [`Selection`].

pub mod calendar;
pub mod resolver;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::types::SelectionMode;

pub use resolver::{from_calendar, from_directory, from_lines, from_lookback, from_window, resolve};

/// One unit of source data to merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    identifier: String,
    source_pattern: String,
}

impl Partition {
    pub fn new(identifier: impl Into<String>, source_pattern: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            source_pattern: source_pattern.into(),
        }
    }

    /// Label used as the output sub-path and in the script file name.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Glob-style expression locating the source files.
    pub fn source_pattern(&self) -> &str {
        &self.source_pattern
    }
}

/// The single selection mode of a run, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Calendar {
        year: i32,
        month: Option<u32>,
        day: Option<u32>,
    },
    Directory {
        name: String,
    },
    FileList {
        path: PathBuf,
    },
    TrailingWindow {
        days: u32,
        reference: NaiveDate,
    },
    FixedLookback {
        days: u32,
        /// `None` means "today" at resolution time.
        reference: Option<NaiveDate>,
    },
}

impl Selection {
    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Calendar { .. } => SelectionMode::ByCalendarDate,
            Selection::Directory { .. } => SelectionMode::ByDirectory,
            Selection::FileList { .. } => SelectionMode::ByFileList,
            Selection::TrailingWindow { .. } => SelectionMode::ByTrailingWindow,
            Selection::FixedLookback { .. } => SelectionMode::ByFixedLookback,
        }
    }
}

/// Join a distributed-filesystem prefix and a path component.
///
/// Works on plain strings: an empty prefix or an absolute component yields the
/// component unchanged, and a trailing `/` on the prefix is not doubled.
pub fn join_path(prefix: &str, component: &str) -> String {
    if prefix.is_empty() || component.starts_with('/') {
        component.to_string()
    } else if prefix.ends_with('/') {
        format!("{prefix}{component}")
    } else {
        format!("{prefix}/{component}")
    }
}
