#![cfg(unix)]

// `sh -f <script>` runs the script with globbing disabled, which makes `sh`
// a stand-in for the batch engine's `<executable> -f <script>` convention.

use std::fs;

use filemerge::driver::run_job;
use filemerge::errors::FilemergeError;
use filemerge::exec::{PigRunner, ScriptRunner};
use filemerge::fs::RealFileSystem;
use filemerge_test_utils::builders::OptionsBuilder;
use filemerge_test_utils::init_tracing;
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::test]
async fn successful_script_returns_ok() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let marker = dir.path().join("ran");
    let script = dir.path().join("ok.sh");
    fs::write(&script, format!("echo merging\ntouch '{}'\n", marker.display()))?;

    let mut runner = PigRunner::new("sh");
    runner.run_script(&script).await?;

    assert!(marker.exists());
    Ok(())
}

#[tokio::test]
async fn nonzero_exit_is_external_tool_error() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let script = dir.path().join("fail.sh");
    fs::write(&script, "echo 'ERROR 2997: boom' >&2\nexit 3\n")?;

    let mut runner = PigRunner::new("sh");
    match runner.run_script(&script).await {
        Err(FilemergeError::ExternalTool { script: s, code }) => {
            assert_eq!(code, 3);
            assert!(s.ends_with("fail.sh"));
        }
        other => panic!("expected ExternalTool, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn missing_executable_is_reported() {
    let mut runner = PigRunner::new("filemerge-no-such-engine");
    let err = runner
        .run_script(std::path::Path::new("x.pig"))
        .await
        .unwrap_err();
    assert!(matches!(err, FilemergeError::Other(_)));
    assert!(err.to_string().contains("filemerge-no-such-engine"));
}

#[test]
fn default_runner_invokes_pig() {
    assert_eq!(PigRunner::default().executable(), "pig");
}

#[tokio::test]
async fn end_to_end_with_real_filesystem() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let script_dir = dir.path().join("scripts");
    let template = dir.path().join("merge.tmpl");
    // The rendered "script" appends its input pattern to a log file.
    let log = dir.path().join("merged.log");
    fs::write(&template, format!("echo '@INPUT_PATH' >> '{}'\n", log.display()))?;

    let job = OptionsBuilder::new()
        .topic("e2e")
        .input_prefix("/in")
        .year(2016)
        .month(2)
        .day(29)
        .template(&template)
        .script_dir(&script_dir)
        .executable("sh")
        .job();

    let mut runner = PigRunner::new(job.executable.clone());
    let summary = run_job(&job, &RealFileSystem, &mut runner).await?;

    assert_eq!(summary.scripts_run, 1);
    assert!(script_dir.join("e2e-d_20160229-0000.pig").is_file());
    assert_eq!(fs::read_to_string(&log)?, "/in/d_20160229*\n");

    use std::os::unix::fs::PermissionsExt;
    let mode = fs::metadata(&script_dir)?.permissions().mode() & 0o777;
    assert_eq!(mode, 0o700);
    Ok(())
}
