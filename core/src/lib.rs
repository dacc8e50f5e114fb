//! Core library for Brutal Todo
//!
//! This crate contains the core business logic, including:
//! - The task list and its id counter (TaskStore)
//! - Key-value persistence adapters
//! - The view model that dispatches user intents back to the store

pub mod error;
pub mod storage;
pub mod task;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
