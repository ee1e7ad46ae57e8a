//! To-Do Frontend Entry Point

mod config;
mod storage;
mod store;
mod context;
mod components;
mod app;

use std::cell::Cell;
use wasm_bindgen::prelude::*;

use config::Settings;
use context::AppContext;

thread_local! {
    static APP: Cell<Option<AppContext>> = const { Cell::new(None) };
}

fn main() {
    console_error_panic_hook::set_once();

    let settings = Settings::from_location();
    if let Err(e) = rolling_logger::init_logger("Todo", settings.log_level, settings.log_capacity) {
        web_sys::console::warn_1(&format!("[MAIN] Logger already set: {}", e).into());
    }

    let ctx = app::start(settings);
    APP.with(|app| app.set(ctx));
}

/// Recent log lines, for inspection from the devtools console
#[wasm_bindgen]
pub fn todo_recent_logs() -> String {
    rolling_logger::recent_lines().join("\n")
}

/// Remove the stored tasks and counter, then show an empty list
///
/// Recovery path for a corrupted store, called from the devtools console.
#[wasm_bindgen]
pub fn todo_clear_storage() {
    match APP.with(|app| app.get()) {
        Some(ctx) => ctx.reset(),
        None => log::warn!("[MAIN] App not started, nothing to clear"),
    }
}
