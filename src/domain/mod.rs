//! Domain models for taskwarrior-enhanced
//!
//! Contains the task model and the dependency forest, without any I/O.

mod id;
mod task;
mod forest;

pub use id::TaskId;
pub use task::{Priority, Task, TaskIndex};
pub use forest::Forest;
