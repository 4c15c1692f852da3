// src/partition/calendar.rs

//! Calendar helpers for date-derived partitions.

use chrono::{Datelike, Months, NaiveDate};

use super::{Partition, join_path};

/// Suffix appended to the date directory name to form the identifier.
const IDENTIFIER_SUFFIX: &str = "-0000";

/// Number of days in `month` (1-12) of `year`; 0 for an out-of-range month
/// or year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| {
            let next = first.checked_add_months(Months::new(1))?;
            Some((next - first).num_days() as u32)
        })
        .unwrap_or(0)
}

/// `d_YYYYMMDD`, the directory name the source data is stored under.
pub fn date_dirname(year: i32, month: u32, day: u32) -> String {
    format!("d_{year:04}{month:02}{day:02}")
}

/// Build the partition for one calendar day.
pub fn day_partition(source_prefix: &str, year: i32, month: u32, day: u32) -> Partition {
    let dirname = date_dirname(year, month, day);
    let pattern = join_path(source_prefix, &format!("{dirname}*"));
    Partition::new(format!("{dirname}{IDENTIFIER_SUFFIX}"), pattern)
}

pub fn date_partition(source_prefix: &str, date: NaiveDate) -> Partition {
    day_partition(source_prefix, date.year(), date.month(), date.day())
}
