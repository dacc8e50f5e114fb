//! Task store
//!
//! Owns the two persisted state cells: the ordered task list (newest
//! first) and the monotonic id counter. Every mutation writes the new
//! state back to storage before the next user intent is processed.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::model::Task;
use crate::storage::KeyValueStorage;
use crate::Result;

/// Storage key for the serialized task list
pub const TASKS_KEY: &str = "tasks";
/// Storage key for the decimal id counter
pub const COUNTER_KEY: &str = "counter";

/// Schema version written into the task-list envelope
const TASKS_SCHEMA: u32 = 1;

/// Persisted form of the task list
#[derive(Debug, Deserialize)]
struct TasksEnvelope {
    schema: u32,
    tasks: Vec<Task>,
}

/// Owner of the task list and id counter
///
/// All mutation goes through the store; the view only dispatches intents.
/// Unknown ids and blank input are no-ops, never errors — the only `Err`
/// path is a storage failure.
pub struct TaskStore<S: KeyValueStorage> {
    /// Insertion order, newest first
    tasks: Vec<Task>,
    /// Strictly greater than every id ever assigned; never decreases
    next_id: u64,
    storage: S,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// Restore the store from persisted state
    ///
    /// Missing or malformed entries fall back to defaults (empty list,
    /// counter 1). The counter is raised above the highest stored task id
    /// so ids are never reused after a corrupted counter entry.
    pub fn load(storage: S) -> Result<Self> {
        let tasks = match storage.get(TASKS_KEY)? {
            Some(raw) => parse_tasks(&raw),
            None => Vec::new(),
        };
        let next_id = match storage.get(COUNTER_KEY)? {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Malformed counter entry, falling back to default");
                1
            }),
            None => 1,
        };
        let floor = tasks.iter().map(|t| t.id + 1).max().unwrap_or(1);

        Ok(Self {
            tasks,
            next_id: next_id.max(floor),
            storage,
        })
    }

    /// Tasks in insertion order, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The id the next add will assign
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Add a task from raw input text
    ///
    /// The text is trimmed first; blank input is a silent no-op returning
    /// `None`. Otherwise the new task is prepended, the counter advances,
    /// and both cells are persisted. Returns the assigned id.
    pub fn add(&mut self, raw_text: &str) -> Result<Option<u64>> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let id = self.next_id;
        self.tasks.insert(0, Task::new(id, text));
        self.next_id += 1;
        debug!(id, "Added task");

        self.persist_tasks()?;
        self.persist_counter()?;
        Ok(Some(id))
    }

    /// Flip the completion flag of the task with the given id
    ///
    /// Unknown ids are ignored. Returns whether a task was toggled.
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "Toggled task");

        self.persist_tasks()?;
        Ok(true)
    }

    /// Remove the task with the given id, preserving the order of the rest
    ///
    /// Unknown ids are ignored. Returns whether a task was removed.
    pub fn remove(&mut self, id: u64) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        debug!(id, "Removed task");

        self.persist_tasks()?;
        Ok(true)
    }

    /// Remove every completed task, preserving the order of the rest
    ///
    /// Always writes the list back, even when nothing was removed. Returns
    /// the number of tasks purged.
    pub fn purge_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        debug!(removed, "Purged completed tasks");

        self.persist_tasks()?;
        Ok(removed)
    }

    /// Number of tasks not yet completed
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Consume the store and return the underlying storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Write the task list back under its envelope
    fn persist_tasks(&mut self) -> Result<()> {
        #[derive(Serialize)]
        struct EnvelopeRef<'a> {
            schema: u32,
            tasks: &'a [Task],
        }

        let content = serde_json::to_string(&EnvelopeRef {
            schema: TASKS_SCHEMA,
            tasks: &self.tasks,
        })?;
        self.storage.set(TASKS_KEY, &content)
    }

    /// Write the counter back as its decimal string form
    fn persist_counter(&mut self) -> Result<()> {
        self.storage.set(COUNTER_KEY, &self.next_id.to_string())
    }
}

/// Parse the persisted task list
///
/// Accepts the current envelope and the bare-array form older versions
/// wrote. Anything else (including an unknown schema version) falls back
/// to an empty list rather than guessing at the data.
fn parse_tasks(raw: &str) -> Vec<Task> {
    if let Ok(envelope) = serde_json::from_str::<TasksEnvelope>(raw) {
        if envelope.schema == TASKS_SCHEMA {
            return envelope.tasks;
        }
        warn!(
            schema = envelope.schema,
            "Unknown task list schema, falling back to empty"
        );
        return Vec::new();
    }
    match serde_json::from_str::<Vec<Task>>(raw) {
        Ok(tasks) => {
            debug!(count = tasks.len(), "Loaded legacy task list");
            tasks
        }
        Err(e) => {
            warn!(error = %e, "Malformed task list, falling back to empty");
            Vec::new()
        }
    }
}
