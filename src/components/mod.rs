//! UI Components
//!
//! Leptos components rendered into the host page's list container.

mod task_item;
mod task_list;

pub use task_item::TaskItem;
pub use task_list::TaskList;
