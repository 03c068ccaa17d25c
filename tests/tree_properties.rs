//! Property tests for forest building and tree layout

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use taskwarrior_enhanced::render::{layout, TreeLine};
use taskwarrior_enhanced::{Forest, Task, TaskId, TaskIndex};

fn id(n: u64) -> TaskId {
    TaskId::new(n).unwrap()
}

/// Tasks `1..=n` where task `i` may only depend on lower ids, on itself,
/// or on ids that are not in the set. Always acyclic.
fn acyclic_tasks(max: usize) -> impl Strategy<Value = Vec<Task>> {
    (1..=max).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(any::<prop::sample::Index>(), 0..4), n).prop_map(
            move |picks| {
                picks
                    .into_iter()
                    .enumerate()
                    .map(|(i, deps)| {
                        let own = i as u64 + 1;
                        let deps = deps.into_iter().map(|pick| match pick.index(i + 3) {
                            k if k < i => id(k as u64 + 1),
                            k if k == i => id(own),
                            k => id(1000 + k as u64),
                        });
                        Task::new(id(own), format!("task {own}")).with_depends(deps)
                    })
                    .collect()
            },
        )
    })
}

/// Tasks `1..=n` with arbitrary in-set dependencies, cycles included
fn cyclic_tasks(max: usize) -> impl Strategy<Value = Vec<Task>> {
    (1..=max).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(1..=n as u64, 0..3), n).prop_map(|all_deps| {
            all_deps
                .into_iter()
                .enumerate()
                .map(|(i, deps)| {
                    Task::new(id(i as u64 + 1), "t").with_depends(deps.into_iter().map(id))
                })
                .collect()
        })
    })
}

fn in_set_deps(task: &Task, index: &TaskIndex) -> Vec<TaskId> {
    task.depends
        .iter()
        .copied()
        .filter(|&d| d != task.id && index.contains(d))
        .collect()
}

/// Longest chain of in-set `depends` edges ending at each task
fn longest_chains(index: &TaskIndex) -> HashMap<TaskId, usize> {
    // Dependencies only point at lower ids, so ascending id order works
    let mut ids: Vec<TaskId> = index.iter().map(|t| t.id).collect();
    ids.sort();

    let mut longest = HashMap::new();
    for task_id in ids {
        let task = index.get(task_id).unwrap();
        let depth = in_set_deps(task, index)
            .iter()
            .map(|d| longest[d] + 1)
            .max()
            .unwrap_or(0);
        longest.insert(task_id, depth);
    }
    longest
}

/// Parent of each line, recovered from depths
fn parents(lines: &[TreeLine]) -> Vec<Option<TaskId>> {
    let mut stack: Vec<TaskId> = Vec::new();
    lines
        .iter()
        .map(|line| {
            stack.truncate(line.depth);
            let parent = stack.last().copied();
            stack.push(line.id);
            parent
        })
        .collect()
}

proptest! {
    #[test]
    fn every_task_appears_at_its_longest_chain_depth(tasks in acyclic_tasks(10)) {
        let index = TaskIndex::new(tasks);
        let forest = Forest::build(&index);
        let lines = layout(&forest);
        let longest = longest_chains(&index);

        let mut max_depth: HashMap<TaskId, usize> = HashMap::new();
        for line in &lines {
            prop_assert!(line.depth <= longest[&line.id]);
            prop_assert!(!line.cycle);
            let entry = max_depth.entry(line.id).or_insert(0);
            *entry = (*entry).max(line.depth);
        }

        for task in index.iter() {
            prop_assert_eq!(max_depth.get(&task.id).copied(), Some(longest[&task.id]));
        }
    }

    #[test]
    fn single_blocker_sets_render_each_task_once(tasks in acyclic_tasks(10)) {
        let tasks: Vec<Task> = tasks
            .into_iter()
            .map(|mut task| {
                task.depends.truncate(1);
                task
            })
            .collect();
        let index = TaskIndex::new(tasks);
        let forest = Forest::build(&index);
        let lines = layout(&forest);

        prop_assert_eq!(lines.len(), index.len());
        let seen: HashSet<TaskId> = lines.iter().map(|l| l.id).collect();
        prop_assert_eq!(seen.len(), index.len());
    }

    #[test]
    fn children_sit_under_a_task_they_depend_on(tasks in acyclic_tasks(10)) {
        let index = TaskIndex::new(tasks);
        let forest = Forest::build(&index);
        let lines = layout(&forest);

        for (line, parent) in lines.iter().zip(parents(&lines)) {
            let task = index.get(line.id).unwrap();
            match parent {
                None => prop_assert!(in_set_deps(task, &index).is_empty()),
                Some(parent) => prop_assert!(task.depends.contains(&parent)),
            }
        }
    }

    #[test]
    fn marker_matches_dependent_count(tasks in acyclic_tasks(10)) {
        let index = TaskIndex::new(tasks);
        let forest = Forest::build(&index);

        for line in layout(&forest) {
            let dependents = index
                .iter()
                .filter(|t| t.id != line.id && t.depends.contains(&line.id))
                .count();
            prop_assert_eq!(line.dependents, dependents);
            if dependents >= 2 {
                prop_assert_eq!(line.marker(), Some(format!("[{dependents}↑]")));
            } else {
                prop_assert_eq!(line.marker(), None);
            }
        }
    }

    #[test]
    fn cycles_terminate_without_re_expanding(tasks in cyclic_tasks(6)) {
        let index = TaskIndex::new(tasks);
        let forest = Forest::build(&index);
        let lines = layout(&forest);

        for (i, (line, parent)) in lines.iter().zip(parents(&lines)).enumerate() {
            // Never its own child
            prop_assert_ne!(parent, Some(line.id));

            // A repeated ancestor is a leaf at that position
            if line.cycle {
                if let Some(next) = lines.get(i + 1) {
                    prop_assert!(next.depth <= line.depth);
                }
            }
        }

        // Along any path, no task is expanded twice
        let mut path: Vec<TaskId> = Vec::new();
        for line in &lines {
            path.truncate(line.depth);
            if !line.cycle {
                prop_assert!(!path.contains(&line.id));
            }
            path.push(line.id);
        }

        // Every task shows up, even when no root leads to it
        let seen: HashSet<TaskId> = lines.iter().map(|l| l.id).collect();
        for task in index.iter() {
            prop_assert!(seen.contains(&task.id), "task {} missing", task.id);
        }

        // Top-level lines are roots or members of a dependency cycle
        let in_cycle: HashSet<TaskId> = forest.cycles().into_iter().flatten().collect();
        for line in lines.iter().filter(|l| l.depth == 0) {
            let task = index.get(line.id).unwrap();
            prop_assert!(in_set_deps(task, &index).is_empty() || in_cycle.contains(&line.id));
        }
    }
}
