//! # Tree Rendering
//!
//! Turns a [`Forest`](crate::domain::Forest) into indented text lines:
//!
//! ```text
//! ├── 1 Plan trip
//! └── [3↑] 4 Launch feature
//!     ├── 5 Code review
//!     ├── 6 Integration tests
//!     └── 7 Docs
//! ```
//!
//! `[N↑]` marks a task that blocks N (two or more) other pending tasks.
//! Low priority text is dimmed, high priority text is bold red, and
//! started tasks are bold green. All styling is dropped when color is off.

mod style;
mod tree;

pub use style::LineStyle;
pub use tree::{layout, render, TreeLine};
