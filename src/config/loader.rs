// src/config/loader.rs

use std::path::Path;

use crate::config::model::{MergeJob, RawMergeOptions};
use crate::errors::Result;
use crate::fs::FileSystem;

/// Read a TOML options file without validating it.
///
/// Use [`load_and_validate`] when the file alone describes a complete run,
/// or [`RawMergeOptions::overlay`] to combine it with command-line values
/// first.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawMergeOptions> {
    let contents = fs.read_to_string(path.as_ref())?;

    let options: RawMergeOptions = toml::from_str(&contents)?;

    Ok(options)
}

/// Load an options file and validate it into a [`MergeJob`].
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<MergeJob> {
    let raw = load_from_path(fs, path)?;
    MergeJob::try_from(raw)
}

/// Combine an optional config file with command-line options and validate.
pub fn resolve_options(
    fs: &dyn FileSystem,
    config_path: Option<&Path>,
    cli: RawMergeOptions,
) -> Result<MergeJob> {
    let raw = match config_path {
        Some(path) => load_from_path(fs, path)?.overlay(cli),
        None => cli,
    };
    MergeJob::try_from(raw)
}
