//! Render Projection
//!
//! Turns the task list into display rows. Pure function of in-memory
//! state; the UI layer owns the actual DOM.

use crate::domain::{Task, TaskId};
use crate::manager::TaskList;

pub const COMPLETED_TEXT_STYLE: &str = "text-decoration: line-through; color: #888;";

/// One display row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl TaskRow {
    pub fn text_style(&self) -> &'static str {
        if self.completed { COMPLETED_TEXT_STYLE } else { "" }
    }

    pub fn class(&self) -> &'static str {
        if self.completed { "task-row completed" } else { "task-row" }
    }
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.to_string(),
            completed: task.completed,
        }
    }
}

/// Counts shown alongside the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
}

impl Summary {
    pub fn of(rows: &[TaskRow]) -> Self {
        Self {
            total: rows.len(),
            completed: rows.iter().filter(|r| r.completed).count(),
        }
    }

    pub fn label(&self) -> String {
        let noun = if self.total == 1 { "task" } else { "tasks" };
        format!("{} {}, {} done", self.total, noun, self.completed)
    }
}

/// Rows in list order
pub fn render(list: &TaskList) -> Vec<TaskRow> {
    list.tasks().iter().map(TaskRow::from).collect()
}
