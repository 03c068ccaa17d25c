//! Tree command
//!
//! fetch -> index -> forest -> render -> stdout. Nothing is printed until
//! the whole tree is rendered, so a failed fetch leaves stdout empty.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::output::Output;
use crate::domain::{Forest, TaskIndex};
use crate::render;
use crate::source::TaskSource;

/// Renders the pending-task tree as lines without printing it
pub fn build_lines(source: &dyn TaskSource, filters: &[String], color: bool) -> Result<Vec<String>> {
    debug!(?filters, "fetching pending tasks");
    let tasks = source
        .fetch_pending(filters)
        .context("Failed to load pending tasks")?;

    let index = TaskIndex::new(tasks);
    if index.is_empty() {
        info!("No pending tasks found.");
        return Ok(Vec::new());
    }

    let forest = Forest::build(&index);
    debug!(
        tasks = index.len(),
        roots = forest.roots().len(),
        "built dependency forest"
    );

    for cycle in forest.cycles() {
        let members: Vec<String> = cycle.iter().map(ToString::to_string).collect();
        warn!(tasks = %members.join(","), "dependency cycle between pending tasks");
    }

    Ok(render::render(&forest, &index, color))
}

/// Prints the pending-task tree
pub fn run(source: &dyn TaskSource, filters: &[String], output: &Output) -> Result<()> {
    let lines = build_lines(source, filters, output.is_color())?;
    output
        .lines(&lines)
        .context("Failed to write tree to stdout")?;
    Ok(())
}
