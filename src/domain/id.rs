//! Task identifiers
//!
//! Taskwarrior numbers pending tasks `1..n`. The numbers are only stable
//! while the set of pending tasks does not change, so they are never
//! persisted; they exist to link records within one export.

use std::fmt;

/// Working-set identifier of a pending task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task ID, rejecting zero (taskwarrior's "no working-set id")
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_task_id() {
        assert_eq!(TaskId::new(0), None);
        assert_eq!(TaskId::new(7).map(|id| id.to_string()), Some("7".to_string()));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(TaskId::new(42).unwrap().to_string(), "42");
    }
}
