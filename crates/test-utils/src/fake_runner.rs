use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use filemerge::errors::{FilemergeError, Result};
use filemerge::exec::ScriptRunner;

/// A fake runner that:
/// - records which scripts were "run"
/// - succeeds, unless told to fail on the n-th call (0-based) with an exit code.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    executed: Arc<Mutex<Vec<PathBuf>>>,
    fail_at: Option<(usize, i32)>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(call: usize, code: i32) -> Self {
        Self {
            fail_at: Some((call, code)),
            ..Self::default()
        }
    }

    /// Scripts passed to `run_script`, in call order, including a failing one.
    pub fn executed(&self) -> Vec<PathBuf> {
        self.executed.lock().unwrap().clone()
    }
}

impl ScriptRunner for FakeRunner {
    fn run_script<'a>(
        &'a mut self,
        script: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let executed = Arc::clone(&self.executed);
        let fail_at = self.fail_at;

        Box::pin(async move {
            let call = {
                let mut guard = executed.lock().unwrap();
                guard.push(script.to_path_buf());
                guard.len() - 1
            };

            match fail_at {
                Some((n, code)) if n == call => Err(FilemergeError::ExternalTool {
                    script: script.display().to_string(),
                    code,
                }),
                _ => Ok(()),
            }
        })
    }
}
