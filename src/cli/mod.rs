//! # Command-Line Interface
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `twe tree [filter ...]` | Pending tasks as a dependency tree |
//!
//! Filter tokens go to taskwarrior unchanged, so anything `task` accepts
//! as a filter (`project:home`, `+next`, `-work`, `due.before:eom`) works.
//!
//! ## Streams
//!
//! stdout carries the tree only. Logs and errors go to stderr; see
//! [`Settings`] for the environment variables that tune them.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod config;
mod output;
mod tree;

pub use app::{Cli, Commands, run};
pub use config::{ColorChoice, Settings};
pub use output::Output;
pub use tree::build_lines;
