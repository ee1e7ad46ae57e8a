//! Task List Component
//!
//! Renders every row of the view store, in list order.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::AppContext;
use crate::store::store_rows;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();

    view! {
        <For
            each=move || store_rows(&store)
            // completion changes the row's style, so it is part of the key
            key=|row| (row.id, row.completed)
            children=move |row| view! { <TaskItem row=row /> }
        />
    }
}
