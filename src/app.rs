//! To-Do Frontend App
//!
//! Binds the host page's input, button and list container to the manager.
//! Any of the three may be missing; the matching feature is then skipped.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use todo_core::{Summary, TodoManager};

use crate::components::TaskList;
use crate::config::{self, Settings, ADD_BUTTON_ID, TASK_INPUT_ID, TASK_LIST_ID};
use crate::context::AppContext;
use crate::storage::BrowserStore;
use crate::store::store_rows;

/// Which add triggers can be bound for the elements the page provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddTriggers {
    pub click: bool,
    pub enter: bool,
}

impl AddTriggers {
    /// Both triggers read the input, so without it neither is bound
    pub fn for_elements(has_input: bool, has_button: bool) -> Self {
        Self {
            click: has_input && has_button,
            enter: has_input,
        }
    }
}

pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Returns the context so it can be reached from exported functions
pub fn start(settings: Settings) -> Option<AppContext> {
    log::info!("[APP] Starting (log level {})", settings.log_level);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[APP] No document, nothing to bind");
        return None;
    };

    let config = config::core_config(&document);
    let manager = TodoManager::open(BrowserStore::open(), &config);
    let ctx = AppContext::new(manager);

    mount_list(&document, ctx);
    bind_add(&document, ctx);
    Some(ctx)
}

/// Mount the list into the host container, replacing its content
fn mount_list(document: &Document, ctx: AppContext) {
    let Some(container) = document
        .get_element_by_id(TASK_LIST_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("[APP] #{} missing, tasks will not be shown", TASK_LIST_ID);
        return;
    };
    container.set_inner_html("");

    let summary_target = container.clone();
    leptos::mount::mount_to(container, move || {
        provide_context(ctx);

        let store = ctx.store();
        Effect::new(move |_| {
            let label = Summary::of(&store_rows(&store)).label();
            let _ = summary_target.set_attribute("title", &label);
        });

        view! { <TaskList /> }
    })
    .forget();
}

/// Read the input, add a task, clear the field on success
fn submit_input(ctx: AppContext, input: &HtmlInputElement) {
    if ctx.submit(&input.value()) {
        input.set_value("");
    }
}

fn bind_add(document: &Document, ctx: AppContext) {
    let input = document
        .get_element_by_id(TASK_INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let button = document.get_element_by_id(ADD_BUTTON_ID);
    let triggers = AddTriggers::for_elements(input.is_some(), button.is_some());

    let Some(input) = input else {
        log::warn!("[APP] #{} missing, adding tasks is disabled", TASK_INPUT_ID);
        return;
    };

    match button {
        Some(button) if triggers.click => {
            let button_input = input.clone();
            let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_ev: MouseEvent| {
                submit_input(ctx, &button_input);
            });
            let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }
        _ => log::warn!("[APP] #{} missing, only Enter adds tasks", ADD_BUTTON_ID),
    }

    if triggers.enter {
        let key_input = input.clone();
        let on_keypress = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            if is_submit_key(&ev.key()) {
                submit_input(ctx, &key_input);
            }
        });
        let _ = input.add_event_listener_with_callback("keypress", on_keypress.as_ref().unchecked_ref());
        on_keypress.forget();
    }
}
