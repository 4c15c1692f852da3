use std::io::Write;
use std::path::{Path, PathBuf};

use filemerge::config::{
    DEFAULT_NUM_REDUCERS, MergeJob, RawMergeOptions, load_and_validate, resolve_options,
};
use filemerge::errors::FilemergeError;
use filemerge::fs::RealFileSystem;
use filemerge::fs::mock::MockFileSystem;
use filemerge::partition::Selection;
use filemerge::types::{Codec, SelectionMode};
use filemerge_test_utils::builders::OptionsBuilder;
use filemerge_test_utils::ymd;
use tempfile::NamedTempFile;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn missing_required_option_is_named() {
    let raw = OptionsBuilder::new().without_topic().year(2016).build();
    match MergeJob::try_from(raw) {
        Err(FilemergeError::MissingRequiredParameter(name)) => assert_eq!(name, "topic"),
        other => panic!("expected MissingRequiredParameter, got {other:?}"),
    }
}

#[test]
fn blank_required_option_counts_as_missing() {
    let raw = OptionsBuilder::new().queue("  ").year(2016).build();
    assert!(matches!(
        MergeJob::try_from(raw),
        Err(FilemergeError::MissingRequiredParameter("queue"))
    ));
}

#[test]
fn required_options_are_checked_in_order() {
    let raw = OptionsBuilder::bare().year(2016).build();
    assert!(matches!(
        MergeJob::try_from(raw),
        Err(FilemergeError::MissingRequiredParameter("topic"))
    ));

    let raw = OptionsBuilder::bare().topic("t").queue("q").year(2016).build();
    assert!(matches!(
        MergeJob::try_from(raw),
        Err(FilemergeError::MissingRequiredParameter("input_prefix"))
    ));
}

#[test]
fn no_selector_is_invalid() {
    let raw = OptionsBuilder::new().build();
    assert!(matches!(
        MergeJob::try_from(raw),
        Err(FilemergeError::InvalidSourceSelection)
    ));
}

#[test]
fn every_selector_alone_is_accepted() {
    let cases = [
        (OptionsBuilder::new().year(2016), SelectionMode::ByCalendarDate),
        (OptionsBuilder::new().directory("foo"), SelectionMode::ByDirectory),
        (OptionsBuilder::new().file("foo"), SelectionMode::ByFileList),
        (OptionsBuilder::new().window(3), SelectionMode::ByTrailingWindow),
        (OptionsBuilder::new().lookback(3), SelectionMode::ByFixedLookback),
    ];

    for (builder, mode) in cases {
        let job = builder.job();
        assert_eq!(job.selection.mode(), mode);
    }
}

#[test]
fn two_or_more_selectors_are_invalid() {
    let pairs = [
        OptionsBuilder::new().year(2016).directory("foo"),
        OptionsBuilder::new().file("foo").window(2),
        OptionsBuilder::new().lookback(0).year(2016),
        OptionsBuilder::new()
            .year(2016)
            .directory("d")
            .file("f")
            .window(1)
            .lookback(1),
    ];

    for builder in pairs {
        assert!(matches!(
            MergeJob::try_from(builder.build()),
            Err(FilemergeError::InvalidSourceSelection)
        ));
    }
}

#[test]
fn blank_directory_is_not_a_selector() {
    let raw = OptionsBuilder::new().directory("").lookback(1).build();
    let job = MergeJob::try_from(raw).unwrap();
    assert_eq!(job.selection.mode(), SelectionMode::ByFixedLookback);
}

#[test]
fn calendar_selection_carries_month_and_day() {
    let job = OptionsBuilder::new().year(2016).month(8).day(24).job();
    assert_eq!(
        job.selection,
        Selection::Calendar {
            year: 2016,
            month: Some(8),
            day: Some(24)
        }
    );
}

#[test]
fn window_uses_reference_date() {
    let job = OptionsBuilder::new().window(10).as_of(ymd(2016, 5, 23)).job();
    assert_eq!(
        job.selection,
        Selection::TrailingWindow {
            days: 10,
            reference: ymd(2016, 5, 23)
        }
    );
}

#[test]
fn zero_window_is_rejected_during_validation() {
    let raw = OptionsBuilder::new().window(0).build();
    assert!(matches!(
        MergeJob::try_from(raw),
        Err(FilemergeError::InvalidParameter { name: "window", .. })
    ));
}

#[test]
fn defaults_are_applied() {
    let job = OptionsBuilder::new().lookback(1).job();
    assert_eq!(job.num_reducers, DEFAULT_NUM_REDUCERS);
    assert_eq!(job.codec, None);
    assert_eq!(job.script_dir, PathBuf::from("scripts"));
    assert_eq!(job.executable, "pig");
    assert!(!job.dry_run);
}

#[test]
fn codec_is_parsed_case_insensitively() {
    let job = OptionsBuilder::new().lookback(1).codec("LZO").job();
    assert_eq!(job.codec, Some(Codec::Lzo));
}

#[test]
fn unsupported_codec_is_rejected() {
    let raw = OptionsBuilder::new().lookback(1).codec("brotli").build();
    match MergeJob::try_from(raw) {
        Err(err @ FilemergeError::UnsupportedCodec(_)) => {
            assert!(err.is_usage_error());
            assert!(err.to_string().contains("brotli"));
        }
        other => panic!("expected UnsupportedCodec, got {other:?}"),
    }
}

#[test]
fn zero_reducers_is_rejected() {
    let raw = OptionsBuilder::new().lookback(1).num_reducers(0).build();
    assert!(matches!(
        MergeJob::try_from(raw),
        Err(FilemergeError::InvalidParameter { name: "num_reducers", .. })
    ));
}

#[test]
fn overlay_prefers_command_line_scalars() {
    let file = OptionsBuilder::new().num_reducers(20).codec("gzip").build();
    let cli = OptionsBuilder::bare().topic("override").lookback(1).build();

    let merged = file.overlay(cli);
    assert_eq!(merged.topic.as_deref(), Some("override"));
    assert_eq!(merged.queue.as_deref(), Some("foo4"));
    assert_eq!(merged.num_reducers, Some(20));
    assert_eq!(merged.codec.as_deref(), Some("gzip"));
}

#[test]
fn overlay_replaces_selection_as_a_group() {
    let file = OptionsBuilder::new().lookback(1).month(3).build();
    let cli = OptionsBuilder::bare().year(2016).build();

    let merged = file.overlay(cli);
    assert_eq!(merged.year, Some(2016));
    assert_eq!(merged.lookback, None);
    assert_eq!(merged.month, None);
    assert!(MergeJob::try_from(merged).is_ok());
}

#[test]
fn overlay_keeps_file_selection_without_cli_selector() {
    let file = OptionsBuilder::new().window(7).build();
    let merged = file.overlay(RawMergeOptions::default());
    assert_eq!(merged.window, Some(7));
}

#[test]
fn overlay_month_and_day_refine_file_year() -> TestResult {
    let file = OptionsBuilder::new().year(2016).build();
    let cli = OptionsBuilder::bare().month(8).day(24).build();

    let job = MergeJob::try_from(file.overlay(cli))?;
    assert_eq!(
        job.selection,
        Selection::Calendar {
            year: 2016,
            month: Some(8),
            day: Some(24),
        }
    );
    Ok(())
}

#[test]
fn overlay_month_overrides_file_month() {
    let file = OptionsBuilder::new().year(2016).month(2).build();
    let cli = OptionsBuilder::bare().month(8).build();

    let merged = file.overlay(cli);
    assert_eq!(merged.year, Some(2016));
    assert_eq!(merged.month, Some(8));
}

#[test]
fn config_file_is_loaded_and_validated() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
topic = "clicks"
input_prefix = "/raw/clicks"
output_prefix = "/merged/clicks"
queue = "etl"
num_reducers = 4
codec = "snappy"
year = 2016
month = 2
as_of = "2016-05-23"
"#
    )?;

    let job = load_and_validate(&RealFileSystem, file.path())?;
    assert_eq!(job.topic, "clicks");
    assert_eq!(job.num_reducers, 4);
    assert_eq!(job.codec, Some(Codec::Snappy));
    assert_eq!(
        job.selection,
        Selection::Calendar {
            year: 2016,
            month: Some(2),
            day: None
        }
    );
    Ok(())
}

#[test]
fn unknown_config_key_is_a_toml_error() {
    let fs = MockFileSystem::new();
    fs.add_file("merge.toml", "topic = \"t\"\nreducers = 3\n");

    assert!(matches!(
        load_and_validate(&fs, "merge.toml"),
        Err(FilemergeError::TomlError(_))
    ));
}

#[test]
fn resolve_options_layers_cli_over_file() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file(
        "merge.toml",
        "topic = \"t\"\ninput_prefix = \"/in\"\noutput_prefix = \"/out\"\nqueue = \"q\"\nlookback = 1\n",
    );

    let cli = OptionsBuilder::bare().directory("batch").dry_run(true).build();
    let job = resolve_options(&fs, Some(Path::new("merge.toml")), cli)?;

    assert_eq!(
        job.selection,
        Selection::Directory {
            name: "batch".to_string()
        }
    );
    assert!(job.dry_run);
    assert_eq!(job.queue, "q");
    Ok(())
}

#[test]
fn resolve_options_without_file_uses_cli_only() -> TestResult {
    let fs = MockFileSystem::new();
    let job = resolve_options(&fs, None, OptionsBuilder::new().year(2016).build())?;
    assert_eq!(job.topic, "foo1");
    Ok(())
}
