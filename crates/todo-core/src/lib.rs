//! To-Do Core
//!
//! Layered architecture:
//! - domain: task entity, validated text, errors
//! - repository: key-value storage abstraction and the task codec
//! - manager: list state and command dispatch
//! - view: render projection for the UI

pub mod config;
pub mod domain;
pub mod manager;
pub mod repository;
pub mod view;

pub use config::Config;
pub use domain::{DomainError, DomainResult, Task, TaskId, TaskText};
pub use manager::{Command, TaskList, TodoManager};
pub use repository::{KeyValueStore, MemoryStore, TaskStore};
pub use view::{render, Summary, TaskRow};
