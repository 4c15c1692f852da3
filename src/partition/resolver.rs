// src/partition/resolver.rs

//! One function per selection mode.
//!
//! Each mode has its own parameter shape, so these are kept as independent
//! functions sharing only the naming helpers in [`super::calendar`].

use std::io::{BufRead, BufReader};

use chrono::{Days, Local, NaiveDate};
use tracing::{debug, error, warn};

use super::calendar::{date_partition, day_partition, days_in_month};
use super::{Partition, Selection, join_path};
use crate::errors::{FilemergeError, Result};
use crate::fs::FileSystem;

/// Resolve the partitions for a validated selection.
///
/// Only [`Selection::FileList`] touches the filesystem, to open the list of
/// directories.
pub fn resolve(
    selection: &Selection,
    source_prefix: &str,
    fs: &dyn FileSystem,
) -> Result<Vec<Partition>> {
    let partitions = match selection {
        Selection::Calendar { year, month, day } => {
            from_calendar(source_prefix, *year, *month, *day)?
        }
        Selection::Directory { name } => from_directory(source_prefix, name),
        Selection::FileList { path } => {
            let reader = fs.open_read(path).inspect_err(|err| {
                error!(path = %path.display(), error = %err, "cannot open directory list");
            })?;
            from_lines(source_prefix, BufReader::new(reader))?
        }
        Selection::TrailingWindow { days, reference } => {
            from_window(source_prefix, *days, *reference)?
        }
        Selection::FixedLookback { days, reference } => {
            from_lookback(source_prefix, *days, *reference)?
        }
    };

    debug!(
        mode = %selection.mode(),
        count = partitions.len(),
        "resolved partitions"
    );
    Ok(partitions)
}

/// Partitions for a year, a month of that year, or a single day.
///
/// A day given without a month is emitted for every month that has it.
pub fn from_calendar(
    source_prefix: &str,
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
) -> Result<Vec<Partition>> {
    if !(1..=9999).contains(&year) {
        return Err(invalid("year", year, "expected a 4-digit year"));
    }

    let months = match month {
        Some(m) if (1..=12).contains(&m) => m..=m,
        Some(m) => {
            return Err(invalid("month", m, "expected 1-12"));
        }
        None => 1..=12,
    };

    if let Some(d) = day {
        if !(1..=31).contains(&d) {
            return Err(invalid("day", d, "expected 1-31"));
        }
        if let Some(m) = month {
            if d > days_in_month(year, m) {
                return Err(invalid(
                    "day",
                    d,
                    format!("{year:04}-{m:02} has only {} days", days_in_month(year, m)),
                ));
            }
        }
    }

    let mut partitions = Vec::new();
    for mm in months {
        let last = days_in_month(year, mm);
        match day {
            Some(d) if d > last => {
                debug!(year, month = mm, day = d, "skipping nonexistent date");
            }
            Some(d) => partitions.push(day_partition(source_prefix, year, mm, d)),
            None => {
                for dd in 1..=last {
                    partitions.push(day_partition(source_prefix, year, mm, dd));
                }
            }
        }
    }

    Ok(partitions)
}

/// A single partition covering everything under `directory*`.
pub fn from_directory(source_prefix: &str, directory: &str) -> Vec<Partition> {
    let pattern = join_path(&join_path(source_prefix, &format!("{directory}*")), "*");
    vec![Partition::new(directory, pattern)]
}

/// One partition per non-blank line, in input order.
pub fn from_lines<R: BufRead>(source_prefix: &str, reader: R) -> Result<Vec<Partition>> {
    let mut partitions = Vec::new();
    for line in reader.lines() {
        let line = line.inspect_err(|err| error!(error = %err, "cannot read directory list"))?;
        let dirname = line.trim();
        if dirname.is_empty() {
            continue;
        }
        let pattern = join_path(source_prefix, &format!("{dirname}*"));
        partitions.push(Partition::new(dirname, pattern));
    }

    if partitions.is_empty() {
        warn!("directory list contained no entries");
    }
    Ok(partitions)
}

/// The `days` calendar days before `reference`, most recent first.
pub fn from_window(source_prefix: &str, days: u32, reference: NaiveDate) -> Result<Vec<Partition>> {
    if days == 0 {
        return Err(invalid("window", days, "must be at least 1"));
    }

    let mut partitions = Vec::with_capacity(days as usize);
    for offset in 1..=u64::from(days) {
        let date = days_before(reference, offset, "window")?;
        partitions.push(date_partition(source_prefix, date));
    }
    Ok(partitions)
}

/// The single day `days` before `reference` (today if absent).
pub fn from_lookback(
    source_prefix: &str,
    days: u32,
    reference: Option<NaiveDate>,
) -> Result<Vec<Partition>> {
    let reference = reference.unwrap_or_else(|| Local::now().date_naive());
    let date = days_before(reference, u64::from(days), "lookback")?;
    Ok(vec![date_partition(source_prefix, date)])
}

fn days_before(reference: NaiveDate, offset: u64, name: &'static str) -> Result<NaiveDate> {
    reference
        .checked_sub_days(Days::new(offset))
        .ok_or_else(|| invalid(name, offset, format!("goes before the calendar from {reference}")))
}

fn invalid(
    name: &'static str,
    value: impl ToString,
    reason: impl Into<String>,
) -> FilemergeError {
    let err = FilemergeError::invalid(name, value, reason);
    error!(parameter = name, error = %err, "invalid partition parameter");
    err
}
