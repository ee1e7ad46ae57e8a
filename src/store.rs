//! View State Store
//!
//! Uses Leptos reactive_stores for the rendered rows.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TaskRow;

/// Rendered state, rewritten in full after every mutation
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Rows in list order
    pub rows: Vec<TaskRow>,
}

/// Type alias for the store
pub type AppStore = Store<ViewState>;

/// Current rows (tracked when read inside a reactive closure)
pub fn store_rows(store: &AppStore) -> Vec<TaskRow> {
    store.rows().get()
}

/// Replace all rows
pub fn store_set_rows(store: &AppStore, rows: Vec<TaskRow>) {
    store.rows().set(rows);
}
