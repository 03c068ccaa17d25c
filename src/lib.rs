//! taskwarrior-enhanced - companion CLI for taskwarrior
//!
//! Fetches pending tasks from `task export`, links them by their
//! `depends` field into a forest and prints it as a colored tree.

pub mod domain;
pub mod source;
pub mod render;
pub mod cli;

pub use domain::{Forest, Priority, Task, TaskId, TaskIndex};
pub use source::{SourceError, TaskSource};
