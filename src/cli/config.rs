//! Environment settings
//!
//! The tool has no config file and no flags of its own. What little can be
//! tuned is read from the environment once at startup:
//!
//! | Variable | Effect | Default |
//! |----------|--------|---------|
//! | `TWE_TASK_BIN` | taskwarrior executable | `task` |
//! | `TWE_LOG` | `tracing` filter directives | `warn` |
//! | `NO_COLOR` | disable styling when non-empty | unset |
//! | `CLICOLOR_FORCE` | force styling when non-empty and not `0` | unset |

use crate::source::DEFAULT_PROGRAM;

pub const TASK_BIN_VAR: &str = "TWE_TASK_BIN";
pub const LOG_VAR: &str = "TWE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// When to style output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Style only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the terminal check
    pub fn enabled(self, stdout_is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => stdout_is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub task_program: String,
    pub log_filter: String,
    pub color: ColorChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            task_program: DEFAULT_PROGRAM.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            color: ColorChoice::Auto,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // NO_COLOR wins over CLICOLOR_FORCE
        let color = if get("NO_COLOR").is_some() {
            ColorChoice::Never
        } else if get("CLICOLOR_FORCE").is_some_and(|v| v.trim() != "0") {
            ColorChoice::Always
        } else {
            ColorChoice::Auto
        };

        Self {
            task_program: get(TASK_BIN_VAR).unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
            log_filter: get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            color,
        }
    }
}
