//! Task Entity
//!
//! Represents a single to-do item.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::DomainError;

/// Task identifier, assigned by the manager and never reused
pub type TaskId = u32;

/// Trimmed, non-empty task text
///
/// Deserializing goes through the same validation, so a stored task with
/// blank text is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskText(String);

impl TaskText {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("task text is empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskText {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TaskText::parse(&value)
    }
}

impl From<TaskText> for String {
    fn from(text: TaskText) -> Self {
        text.0
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A to-do item
///
/// Unknown fields in stored JSON are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Display text, immutable after creation
    pub text: TaskText,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, text: TaskText) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Copy of this task with completion inverted
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
