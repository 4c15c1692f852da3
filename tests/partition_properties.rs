use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use filemerge::partition::calendar::{date_dirname, days_in_month};
use filemerge::partition::{from_calendar, from_lookback, from_window};

fn reference_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn identifier(date: NaiveDate) -> String {
    format!("{}-0000", date_dirname(date.year(), date.month(), date.day()))
}

proptest! {
    #[test]
    fn month_yields_one_partition_per_day(year in 1i32..=9999, month in 1u32..=12) {
        let partitions = from_calendar("p", year, Some(month), None).unwrap();
        prop_assert_eq!(partitions.len() as u32, days_in_month(year, month));

        for (i, p) in partitions.iter().enumerate() {
            let expected = format!("{}-0000", date_dirname(year, month, i as u32 + 1));
            prop_assert_eq!(p.identifier(), expected.as_str());
        }
    }

    #[test]
    fn year_yields_365_or_366(year in 1i32..=9999) {
        let partitions = from_calendar("p", year, None, None).unwrap();
        let total: u32 = (1..=12).map(|m| days_in_month(year, m)).sum();
        prop_assert_eq!(partitions.len() as u32, total);
        prop_assert!(total == 365 || total == 366);
    }

    #[test]
    fn window_is_strictly_preceding_days_newest_first(
        reference in reference_date(),
        window in 1u32..400,
    ) {
        let partitions = from_window("p", window, reference).unwrap();
        prop_assert_eq!(partitions.len(), window as usize);

        for (i, p) in partitions.iter().enumerate() {
            let date = reference.checked_sub_days(Days::new(i as u64 + 1)).unwrap();
            let expected = identifier(date);
            prop_assert_eq!(p.identifier(), expected.as_str());
        }
    }

    #[test]
    fn lookback_is_a_single_day(reference in reference_date(), days in 0u32..2000) {
        let partitions = from_lookback("p", days, Some(reference)).unwrap();
        let date = reference.checked_sub_days(Days::new(u64::from(days))).unwrap();
        prop_assert_eq!(partitions.len(), 1);
        let expected = identifier(date);
        prop_assert_eq!(partitions[0].identifier(), expected.as_str());
    }
}
