//! Tree layout and line formatting
//!
//! Depth-first walk from the forest's entry points: the roots, then one
//! member of each cycle nothing else leads into. A task blocked by several
//! tasks is walked again under each of them. The set of tasks on the
//! current path guards against cycles: a task that is already an ancestor
//! is printed where it recurs but not expanded again.
//!
//! The walk keeps its own stack, so chain length is bounded by memory
//! rather than by the thread's call stack.

use std::collections::HashSet;

use crate::domain::{Forest, Task, TaskId, TaskIndex};

use super::style::LineStyle;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// One positioned task in the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Ancestor connectors plus this line's branch glyph
    pub branch: String,
    pub depth: usize,
    pub id: TaskId,
    /// Number of tasks this one blocks
    pub dependents: usize,
    /// Task recurs on its own ancestor path and is not expanded here
    pub cycle: bool,
}

impl TreeLine {
    /// `[N↑]` marker for tasks blocking two or more others
    pub fn marker(&self) -> Option<String> {
        (self.dependents >= 2).then(|| format!("[{}↑]", self.dependents))
    }

    /// Formats the line: branch glyphs, marker, id, description.
    /// Only the text after the glyphs is styled.
    pub fn format(&self, task: Option<&Task>, color: bool) -> String {
        let mut label = String::new();
        if let Some(marker) = self.marker() {
            label.push_str(&marker);
            label.push(' ');
        }
        label.push_str(&self.id.to_string());

        let line_style = match task {
            Some(task) => {
                if !task.description.is_empty() {
                    label.push(' ');
                    label.push_str(&task.description);
                }
                LineStyle::for_task(task)
            }
            None => LineStyle::Plain,
        };

        format!("{}{}", self.branch, line_style.apply(&label, color))
    }
}

/// Lays out the forest as positioned lines, in output order
pub fn layout(forest: &Forest) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    let mut ancestors = HashSet::new();
    let mut stack = Vec::new();
    push_siblings(&mut stack, &forest.entry_points(), "", 0);

    while let Some(step) = stack.pop() {
        let (id, prefix, is_last, depth) = match step {
            Step::Leave(id) => {
                ancestors.remove(&id);
                continue;
            }
            Step::Visit {
                id,
                prefix,
                is_last,
                depth,
            } => (id, prefix, is_last, depth),
        };

        let cycle = ancestors.contains(&id);
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(TreeLine {
            branch: format!("{prefix}{connector}"),
            depth,
            id,
            dependents: forest.dependent_count(id),
            cycle,
        });

        if cycle {
            continue;
        }

        ancestors.insert(id);
        stack.push(Step::Leave(id));

        let child_prefix = format!("{prefix}{}", if is_last { BLANK } else { PIPE });
        push_siblings(&mut stack, forest.children(id), &child_prefix, depth + 1);
    }

    lines
}

/// Renders the forest as display lines
pub fn render(forest: &Forest, tasks: &TaskIndex, color: bool) -> Vec<String> {
    layout(forest)
        .iter()
        .map(|line| line.format(tasks.get(line.id), color))
        .collect()
}

enum Step {
    Visit {
        id: TaskId,
        prefix: String,
        is_last: bool,
        depth: usize,
    },
    /// Children of `id` are done; it is no longer on the path
    Leave(TaskId),
}

/// Pushes in reverse so the first sibling is popped first
fn push_siblings(stack: &mut Vec<Step>, ids: &[TaskId], prefix: &str, depth: usize) {
    for (i, &id) in ids.iter().enumerate().rev() {
        stack.push(Step::Visit {
            id,
            prefix: prefix.to_string(),
            is_last: i + 1 == ids.len(),
            depth,
        });
    }
}
