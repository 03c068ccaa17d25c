//! Task domain model
//!
//! A [`Task`] is the slice of a taskwarrior record this tool cares about:
//! its working-set id, description, priority, the tasks that block it and
//! whether it has been started.

use std::collections::HashMap;

use tracing::warn;

use super::id::TaskId;

/// Taskwarrior priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    /// No priority set (or an unrecognized value)
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parses a taskwarrior priority value.
    ///
    /// Accepts the stock codes `H`, `M`, `L` and the spelled-out names in
    /// any case. Anything else degrades to [`Priority::None`].
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "h" | "high" => Priority::High,
            "m" | "medium" => Priority::Medium,
            "l" | "low" => Priority::Low,
            _ => Priority::None,
        }
    }
}

/// A pending task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub priority: Priority,

    /// Tasks that must be completed before this one
    pub depends: Vec<TaskId>,

    /// Whether the task has been started
    pub active: bool,
}

impl Task {
    /// Creates a task with no priority and no dependencies
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            priority: Priority::None,
            depends: Vec::new(),
            active: false,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Adds dependencies, skipping ones already present
    pub fn with_depends(mut self, depends: impl IntoIterator<Item = TaskId>) -> Self {
        for dep in depends {
            self.add_dependency(dep);
        }
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Adds a dependency. Returns false if it was already present.
    pub fn add_dependency(&mut self, dep: TaskId) -> bool {
        if self.depends.contains(&dep) {
            false
        } else {
            self.depends.push(dep);
            true
        }
    }
}

/// Id lookup over one export, preserving the export's order
#[derive(Debug, Default)]
pub struct TaskIndex {
    tasks: Vec<Task>,
    positions: HashMap<TaskId, usize>,
}

impl TaskIndex {
    /// Builds the index. IDs are unique within one export; should a
    /// duplicate appear anyway, the first record wins.
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut index = Self::default();
        for task in tasks {
            if index.positions.contains_key(&task.id) {
                warn!(id = %task.id, "duplicate task id in export, keeping the first record");
                continue;
            }
            index.positions.insert(task.id, index.tasks.len());
            index.tasks.push(task);
        }
        index
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.positions.get(&id).map(|&pos| &self.tasks[pos])
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Iterates tasks in export order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
