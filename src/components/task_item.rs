//! Task Item Component
//!
//! A single row in the task list.

use leptos::prelude::*;
use todo_core::{Command, TaskRow};

use crate::context::AppContext;

/// Text that toggles on click, plus a delete button
#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = row.id;
    let class = row.class();
    let style = row.text_style();

    view! {
        <li class=class>
            <span
                class="task-text"
                style=style
                on:click=move |_| ctx.dispatch(Command::Toggle(id))
            >
                {row.text}
            </span>
            <button class="delete-btn" on:click=move |_| ctx.dispatch(Command::Delete(id))>
                "Delete"
            </button>
        </li>
    }
}
