//! Dependency forest for pending tasks
//!
//! Tasks that are not blocked by anything in the current set become roots.
//! Every task is a child of each in-set task it depends on, so a task with
//! several blockers appears under each of them. Ordering of roots and of
//! each child list follows the export order; nothing is sorted.
//!
//! The forest does not reject cycles. [`Forest::cycles`] reports them
//! (via petgraph) and the renderer bounds recursion on its own. A cycle
//! with no root above it is entered through [`Forest::entry_points`].

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use super::id::TaskId;
use super::task::TaskIndex;

/// Roots and blocker -> dependents edges for one export
#[derive(Debug, Default)]
pub struct Forest {
    roots: Vec<TaskId>,

    /// Blocker -> tasks that depend on it, in export order
    children: HashMap<TaskId, Vec<TaskId>>,

    /// Same edges (blocker -> dependent), used for cycle analysis
    graph: DiGraph<TaskId, ()>,

    /// Map from TaskId to node index
    node_map: HashMap<TaskId, NodeIndex>,
}

impl Forest {
    /// Builds the forest from an index of pending tasks.
    ///
    /// Dependencies on tasks outside the index are non-blocking and
    /// self-dependencies are ignored, so such tasks may still be roots.
    pub fn build(tasks: &TaskIndex) -> Self {
        let mut forest = Self::default();

        // First pass: add all nodes
        for task in tasks.iter() {
            let idx = forest.graph.add_node(task.id);
            forest.node_map.insert(task.id, idx);
        }

        // Second pass: add all edges
        for task in tasks.iter() {
            let mut blocked = false;

            for &dep in &task.depends {
                if dep == task.id || !tasks.contains(dep) {
                    continue;
                }
                blocked = true;

                let dependents = forest.children.entry(dep).or_default();
                if dependents.contains(&task.id) {
                    continue;
                }
                dependents.push(task.id);

                if let (Some(&from), Some(&to)) =
                    (forest.node_map.get(&dep), forest.node_map.get(&task.id))
                {
                    forest.graph.add_edge(from, to, ());
                }
            }

            if !blocked {
                forest.roots.push(task.id);
            }
        }

        forest
    }

    /// Tasks with no blocker in the current set, in export order
    pub fn roots(&self) -> &[TaskId] {
        &self.roots
    }

    /// Tasks that depend on `id`, in export order
    pub fn children(&self, id: TaskId) -> &[TaskId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct in-set tasks blocked by `id`
    pub fn dependent_count(&self, id: TaskId) -> usize {
        self.children(id).len()
    }

    /// Top-level tasks of the rendered tree: the roots, then one member of
    /// every cycle that no task outside the cycle blocks.
    ///
    /// Each such cycle is entered at its member exported first, and the
    /// cycles are listed in that order. Every task is reachable from some
    /// entry point, since walking blockers backwards from any task ends at
    /// either a root or one of these cycles.
    pub fn entry_points(&self) -> Vec<TaskId> {
        // Node indices follow export order, so the smallest index in a
        // component is its first exported member
        let mut heads: Vec<NodeIndex> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| component.len() > 1)
            .filter(|component| {
                component.iter().all(|&node| {
                    self.graph
                        .neighbors_directed(node, Direction::Incoming)
                        .all(|blocker| component.contains(&blocker))
                })
            })
            .filter_map(|component| component.into_iter().min())
            .collect();
        heads.sort();

        self.roots
            .iter()
            .copied()
            .chain(heads.into_iter().filter_map(|node| self.graph.node_weight(node).copied()))
            .collect()
    }

    /// Dependency cycles among the tasks, each listed in ascending id order.
    ///
    /// Only components with at least two members are reported, since
    /// self-dependencies never become edges.
    pub fn cycles(&self) -> Vec<Vec<TaskId>> {
        let mut cycles: Vec<Vec<TaskId>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| component.len() > 1)
            .map(|component| {
                let mut ids: Vec<TaskId> = component
                    .into_iter()
                    .filter_map(|idx| self.graph.node_weight(idx).copied())
                    .collect();
                ids.sort();
                ids
            })
            .collect();
        cycles.sort();
        cycles
    }
}
