//! # Task Sources
//!
//! Where pending tasks come from. The tree command only needs one
//! capability, [`TaskSource::fetch_pending`], so the forest and renderer can
//! be driven by a fixed list in tests and by taskwarrior in production.
//!
//! ## Implementations
//!
//! | Source | Backing |
//! |--------|---------|
//! | [`TaskwarriorSource`] | `task rc.verbose=nothing rc.json.array=on +PENDING <filters> export` |
//! | [`StaticSource`] | An in-memory list, filters ignored |
//!
//! Filter tokens are opaque: they are handed to taskwarrior unchanged and
//! interpreted by its own filter grammar.

mod export;
mod taskwarrior;

use thiserror::Error;

use crate::domain::Task;

pub use export::decode_export;
pub use taskwarrior::{TaskwarriorSource, DEFAULT_PROGRAM};

/// Failure to obtain the pending task list. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("task executable `{program}` not found; is taskwarrior installed?")]
    ExternalToolMissing { program: String },

    /// Non-zero exit or failure to start; `stderr` is taskwarrior's own
    /// diagnostic text
    #[error("`{program}` exited with {status}: {}", diagnostic(.stderr))]
    ExternalToolFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("could not parse `task export` output: {0}")]
    MalformedOutput(String),
}

fn diagnostic(stderr: &str) -> &str {
    if stderr.is_empty() {
        "no diagnostic output"
    } else {
        stderr
    }
}

/// Provider of pending tasks
pub trait TaskSource {
    /// Fetches pending tasks matching `filters`, in the provider's order
    fn fetch_pending(&self, filters: &[String]) -> Result<Vec<Task>, SourceError>;
}

/// A fixed task list
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Vec<Task>);

impl TaskSource for StaticSource {
    fn fetch_pending(&self, _filters: &[String]) -> Result<Vec<Task>, SourceError> {
        Ok(self.0.clone())
    }
}
