//! Priority styling
//!
//! Pure mapping from (priority, active, color flag) to decorated text.
//! Whether color is wanted is decided by the CLI shell.

use crossterm::style::{style, Attribute, Color, Stylize};

use crate::domain::{Priority, Task};

/// Visual treatment of one task line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Medium or no priority
    Plain,
    /// Low priority: grey and dim
    Muted,
    /// High priority: bright red and bold
    Urgent,
    /// Started task: bright green and bold, regardless of priority
    Active,
}

impl LineStyle {
    pub fn for_task(task: &Task) -> Self {
        Self::from_parts(task.priority, task.active)
    }

    pub fn from_parts(priority: Priority, active: bool) -> Self {
        if active {
            return LineStyle::Active;
        }
        match priority {
            Priority::Low => LineStyle::Muted,
            Priority::High => LineStyle::Urgent,
            Priority::Medium | Priority::None => LineStyle::Plain,
        }
    }

    /// Decorates `text`. Returns it unchanged when `color` is false.
    pub fn apply(self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        match self {
            LineStyle::Plain => text.to_string(),
            LineStyle::Muted => style(text)
                .with(Color::DarkGrey)
                .attribute(Attribute::Dim)
                .to_string(),
            LineStyle::Urgent => style(text)
                .with(Color::Red)
                .attribute(Attribute::Bold)
                .to_string(),
            LineStyle::Active => style(text)
                .with(Color::Green)
                .attribute(Attribute::Bold)
                .to_string(),
        }
    }
}
