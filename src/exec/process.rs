// src/exec/process.rs

//! External batch engine invocation.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::backend::ScriptRunner;
use crate::errors::{FilemergeError, Result};

pub const DEFAULT_EXECUTABLE: &str = "pig";

/// Runs `<executable> -f <script>` and waits for it to exit.
///
/// No timeout is applied. The child's stdout and stderr are forwarded to the
/// log line by line.
#[derive(Debug, Clone)]
pub struct PigRunner {
    executable: String,
}

impl PigRunner {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    async fn run(&self, script: &Path) -> Result<()> {
        info!(
            executable = %self.executable,
            script = %script.display(),
            "starting external tool"
        );

        let mut cmd = Command::new(&self.executable);
        cmd.arg("-f")
            .arg(script)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd.spawn().with_context(|| {
            format!("spawning '{}' for script {:?}", self.executable, script)
        })?;

        let forwarders = [
            child.stdout.take().map(|out| forward_lines(out, "stdout")),
            child.stderr.take().map(|err| forward_lines(err, "stderr")),
        ];

        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for '{}' on script {:?}", self.executable, script))?;

        for handle in forwarders.into_iter().flatten() {
            if let Err(e) = handle.await {
                warn!(error = %e, "output forwarder ended abnormally");
            }
        }

        // Killed by a signal: no exit code.
        let code = status.code().unwrap_or(-1);
        info!(
            script = %script.display(),
            exit_code = code,
            success = status.success(),
            "external tool exited"
        );

        if status.success() {
            Ok(())
        } else {
            Err(FilemergeError::ExternalTool {
                script: script.display().to_string(),
                code,
            })
        }
    }
}

impl Default for PigRunner {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE)
    }
}

impl ScriptRunner for PigRunner {
    fn run_script<'a>(
        &'a mut self,
        script: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(self.run(script))
    }
}

fn forward_lines<R>(stream: R, name: &'static str) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => info!(stream = name, "{}", line),
                Ok(None) => break,
                Err(e) => {
                    debug!(stream = name, error = %e, "stopped reading child output");
                    break;
                }
            }
        }
    })
}
