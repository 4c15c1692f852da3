// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `ScriptRunner` trait the driver is written
//!   against, and which tests replace with a fake implementation.
//! - [`process`] provides `PigRunner`, which spawns the batch engine with
//!   `tokio::process::Command`.

pub mod backend;
pub mod process;

pub use backend::ScriptRunner;
pub use process::{DEFAULT_EXECUTABLE, PigRunner};
