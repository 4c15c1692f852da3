// src/config/mod.rs

//! Merge options: loading, layering and validation.
//!
//! Responsibilities:
//! - Define the raw and validated option types (`model.rs`).
//! - Load an optional TOML options file (`loader.rs`).
//! - Validate raw options into a `MergeJob` (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve_options};
pub use model::{DEFAULT_NUM_REDUCERS, DEFAULT_SCRIPT_DIR, MergeJob, RawMergeOptions};
