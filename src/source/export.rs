//! Decoding of `task export` JSON
//!
//! The export is a JSON array of task objects. Only a handful of fields
//! matter here; the rest are ignored. Records are decoded one at a time so
//! a single odd record is dropped instead of failing the whole export.
//!
//! `depends` has changed shape across taskwarrior releases:
//! - 2.6+: `["<uuid>", "<uuid>"]`
//! - 2.5: `"<uuid>,<uuid>"`
//!
//! Integer ids are accepted as well. UUIDs are resolved to working-set ids
//! through the export itself, so a blocker outside the export (completed,
//! deleted or filtered out) drops out as non-blocking.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::SourceError;
use crate::domain::{Priority, Task, TaskId};

/// The subset of a taskwarrior record that is decoded
#[derive(Debug, Deserialize)]
struct ExportRecord {
    #[serde(default)]
    id: Option<u64>,

    #[serde(default)]
    uuid: Option<String>,

    #[serde(default)]
    description: Option<String>,

    /// Kept loose so an unexpected type degrades to no priority
    #[serde(default)]
    priority: Option<Value>,

    #[serde(default)]
    depends: DependsField,

    #[serde(default)]
    start: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum DependsField {
    #[default]
    Absent,
    List(Vec<DependencyRef>),
    Joined(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DependencyRef {
    Id(u64),
    Uuid(String),
}

impl DependsField {
    fn refs(self) -> Vec<DependencyRef> {
        match self {
            DependsField::Absent => Vec::new(),
            DependsField::List(refs) => refs,
            DependsField::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| DependencyRef::Uuid(s.to_string()))
                .collect(),
        }
    }
}

/// Decodes `task export` output into tasks, preserving export order.
///
/// Whitespace-only output is an empty export. Anything that is not a JSON
/// array is [`SourceError::MalformedOutput`].
pub fn decode_export(stdout: &[u8]) -> Result<Vec<Task>, SourceError> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let values: Vec<Value> = serde_json::from_slice(stdout)
        .map_err(|e| SourceError::MalformedOutput(e.to_string()))?;

    let mut records = Vec::with_capacity(values.len());
    for (position, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<ExportRecord>(value) {
            Ok(record) => match record.id.and_then(TaskId::new) {
                Some(id) => records.push((id, record)),
                None => warn!(position, "skipping export record without a working-set id"),
            },
            Err(e) => warn!(position, error = %e, "skipping unreadable export record"),
        }
    }

    let by_uuid: HashMap<String, TaskId> = records
        .iter()
        .filter_map(|(id, record)| Some((record.uuid.clone()?.to_ascii_lowercase(), *id)))
        .collect();

    let tasks: Vec<Task> = records
        .into_iter()
        .map(|(id, record)| {
            let priority = match &record.priority {
                Some(Value::String(code)) => Priority::from_code(code),
                _ => Priority::None,
            };
            let active = record.start.as_ref().is_some_and(|start| !start.is_null());

            let depends = record.depends.refs().into_iter().filter_map(|dep| match dep {
                DependencyRef::Id(n) => TaskId::new(n),
                DependencyRef::Uuid(uuid) => {
                    let resolved = by_uuid.get(&uuid.to_ascii_lowercase()).copied();
                    if resolved.is_none() {
                        debug!(task = %id, %uuid, "dependency is not pending, treating as non-blocking");
                    }
                    resolved
                }
            });

            Task::new(id, record.description.unwrap_or_default())
                .with_priority(priority)
                .with_depends(depends)
                .with_active(active)
        })
        .collect();

    debug!(count = tasks.len(), "decoded task export");
    Ok(tasks)
}
