//! Task list view model
//!
//! A pure function of the store state plus the one piece of ephemeral view
//! state: the input-field text. The view never mutates the task list
//! directly; it dispatches intents to the store it owns.

use crate::storage::KeyValueStorage;
use crate::task::{Task, TaskStore};
use crate::Result;

/// A user intent dispatched from the view to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIntent {
    /// Add a task with the given raw text
    Add(String),
    /// Flip the completion flag of the task with this id
    Toggle(u64),
    /// Delete the task with this id
    Delete(u64),
    /// Remove every completed task
    PurgeCompleted,
}

/// One rendered task row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: u64,
    /// Zero-padded id marker, e.g. `#003`
    pub label: String,
    pub text: String,
    pub completed: bool,
}

/// View model over a task store
pub struct TaskListView<S: KeyValueStorage> {
    store: TaskStore<S>,
    input: String,
}

impl<S: KeyValueStorage> TaskListView<S> {
    /// Create a view over the given store with an empty input field
    pub fn new(store: TaskStore<S>) -> Self {
        Self {
            store,
            input: String::new(),
        }
    }

    /// Current input-field text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input-field text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Dispatch a user intent to the store
    ///
    /// Returns whether the task list changed.
    pub fn dispatch(&mut self, intent: TaskIntent) -> Result<bool> {
        match intent {
            TaskIntent::Add(text) => Ok(self.store.add(&text)?.is_some()),
            TaskIntent::Toggle(id) => self.store.toggle(id),
            TaskIntent::Delete(id) => self.store.remove(id),
            TaskIntent::PurgeCompleted => Ok(self.store.purge_completed()? > 0),
        }
    }

    /// Submit the current input as an add intent
    ///
    /// The input field is cleared only when a task was actually added;
    /// blank input stays in the field as typed.
    pub fn submit(&mut self) -> Result<bool> {
        let added = self.store.add(&self.input)?.is_some();
        if added {
            self.input.clear();
        }
        Ok(added)
    }

    /// Flip the completion flag of the task with the given id
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        self.store.toggle(id)
    }

    /// Delete the task with the given id
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        self.store.remove(id)
    }

    /// Remove every completed task, returning the number purged
    pub fn purge_completed(&mut self) -> Result<usize> {
        self.store.purge_completed()
    }

    /// Tasks in insertion order, newest first
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Whether the list has no tasks (empty-state panel)
    pub fn is_empty(&self) -> bool {
        self.store.tasks().is_empty()
    }

    /// Number of tasks not yet completed
    pub fn active_count(&self) -> usize {
        self.store.active_count()
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.store.completed_count()
    }

    /// Whether the purge control should be shown
    pub fn purge_bar_visible(&self) -> bool {
        self.store.completed_count() > 0
    }

    /// Render rows for the current task list
    pub fn rows(&self) -> Vec<TaskRow> {
        self.store
            .tasks()
            .iter()
            .map(|t| TaskRow {
                id: t.id,
                label: format!("#{:03}", t.id),
                text: t.text.clone(),
                completed: t.completed,
            })
            .collect()
    }

    /// Zero-padded preview of the id the next add will assign
    pub fn next_id_label(&self) -> String {
        format!("{:03}", self.store.next_id())
    }
}
