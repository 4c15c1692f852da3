// src/exec/backend.rs

//! Pluggable script runner abstraction.
//!
//! The driver talks to a `ScriptRunner` instead of spawning processes
//! itself, so tests can swap in a fake that records which scripts were run.
//!
//! - `PigRunner` is the implementation used by `filemerge`; see
//!   [`super::process`].
//! - Tests can provide their own `ScriptRunner` that, for example, fails on
//!   the n-th script.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::errors::Result;

/// Trait abstracting how a rendered script is executed.
pub trait ScriptRunner: Send {
    /// Run the script at `script` to completion.
    ///
    /// A nonzero exit must surface as
    /// [`FilemergeError::ExternalTool`](crate::errors::FilemergeError::ExternalTool).
    fn run_script<'a>(
        &'a mut self,
        script: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}
