//! Taskwarrior process adapter
//!
//! Runs `task ... export` once per invocation and decodes its stdout.
//! No retries and no timeout: the call blocks until taskwarrior returns.

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use tracing::debug;

use super::export::decode_export;
use super::{SourceError, TaskSource};
use crate::domain::Task;

/// Executable used when none is configured
pub const DEFAULT_PROGRAM: &str = "task";

/// rc overrides placed before the filter so taskwarrior applies them first
const RC_OVERRIDES: [&str; 2] = ["rc.verbose=nothing", "rc.json.array=on"];

/// Fetches pending tasks by running the taskwarrior CLI
#[derive(Debug, Clone)]
pub struct TaskwarriorSource {
    program: String,
}

impl TaskwarriorSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for `task`: overrides, the pending filter, the caller's
    /// filter tokens verbatim, then the `export` command.
    pub fn export_args(filters: &[String]) -> Vec<String> {
        RC_OVERRIDES
            .iter()
            .map(|s| s.to_string())
            .chain(std::iter::once("+PENDING".to_string()))
            .chain(filters.iter().cloned())
            .chain(std::iter::once("export".to_string()))
            .collect()
    }
}

impl TaskSource for TaskwarriorSource {
    fn fetch_pending(&self, filters: &[String]) -> Result<Vec<Task>, SourceError> {
        let args = Self::export_args(filters);
        debug!(program = %self.program, ?args, "running task export");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SourceError::ExternalToolMissing {
                    program: self.program.clone(),
                },
                _ => SourceError::ExternalToolFailed {
                    program: self.program.clone(),
                    status: "no status (could not start)".to_string(),
                    stderr: e.to_string(),
                },
            })?;

        if !output.status.success() {
            let status = match output.status.code() {
                Some(code) => format!("status {code}"),
                None => "no status (terminated by signal)".to_string(),
            };
            return Err(SourceError::ExternalToolFailed {
                program: self.program.clone(),
                status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(bytes = output.stdout.len(), "task export finished");
        decode_export(&output.stdout)
    }
}
