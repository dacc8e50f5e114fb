//! Task module
//!
//! This module contains the task record and the store that owns the task
//! list and its id counter.

mod model;
mod store;

pub use model::Task;
pub use store::{TaskStore, COUNTER_KEY, TASKS_KEY};
