//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Command, DomainError, DomainResult, TodoManager};

use crate::storage::BrowserStore;
use crate::store::{store_set_rows, AppStore, ViewState};

/// The manager plus its rendered view
#[derive(Clone, Copy)]
pub struct AppContext {
    manager: StoredValue<TodoManager<BrowserStore>, LocalStorage>,
    store: AppStore,
}

impl AppContext {
    /// Wrap a loaded manager and render it once
    pub fn new(manager: TodoManager<BrowserStore>) -> Self {
        let ctx = Self {
            manager: StoredValue::new_local(manager),
            store: Store::new(ViewState::default()),
        };
        ctx.render();
        ctx
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    /// Mutate and persist, then render
    pub fn dispatch(&self, command: Command) {
        log::debug!("[APP] Dispatch {:?}", command);
        self.manager.update_value(|manager| {
            if let Err(e) = manager.dispatch(command) {
                log::error!("[APP] Command failed: {}", e);
            }
        });
        self.render();
    }

    /// Add pathway shared by the button and the Enter key
    ///
    /// Returns whether a task was added, i.e. whether the field should be
    /// cleared.
    pub fn submit(&self, raw: &str) -> bool {
        let added = self
            .manager
            .try_update_value(|manager| task_added(&manager.submit(raw)))
            .unwrap_or(false);
        if added {
            self.render();
        }
        added
    }

    /// Drop every stored task and show the empty list
    pub fn reset(&self) {
        self.manager.update_value(|manager| {
            if let Err(e) = manager.reset() {
                log::error!("[APP] Clearing storage failed: {}", e);
            }
        });
        self.render();
    }

    /// Project the manager's list into the view store
    pub fn render(&self) {
        let rows = self.manager.with_value(|manager| todo_core::render(manager.list()));
        store_set_rows(&self.store, rows);
    }
}

/// Whether a submit left a new task in the list
///
/// A failed persist still keeps the task in memory; any other error means
/// nothing was added.
pub fn task_added(result: &DomainResult<bool>) -> bool {
    match result {
        Ok(added) => *added,
        Err(DomainError::Storage(e)) => {
            log::error!("[APP] Task added but not saved: {}", e);
            true
        }
        Err(e) => {
            log::error!("[APP] Add failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{Config, KeyValueStore, MemoryStore};

    /// Store whose writes always fail
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> DomainResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> DomainResult<()> {
            Err(DomainError::Storage("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> DomainResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_added_task_clears_input() {
        let mut manager = TodoManager::open(MemoryStore::new(), &Config::default());
        assert!(task_added(&manager.submit("buy milk")));
        assert_eq!(manager.list().len(), 1);
    }

    #[test]
    fn test_blank_input_is_kept() {
        let mut manager = TodoManager::open(MemoryStore::new(), &Config::default());
        assert!(!task_added(&manager.submit("")));
        assert!(!task_added(&manager.submit("   ")));
        assert!(manager.list().is_empty());
    }

    #[test]
    fn test_exhausted_counter_keeps_input() {
        let backend = MemoryStore::with_entries([("taskIdCounter", u32::MAX.to_string())]);
        let mut manager = TodoManager::open(backend, &Config::default());
        assert!(!task_added(&manager.submit("keep me")));
        assert!(manager.list().is_empty());
    }

    #[test]
    fn test_unsaved_task_still_clears_input() {
        let mut manager = TodoManager::open(FullStore, &Config::default());
        assert!(task_added(&manager.submit("offline")));
        assert_eq!(manager.list().len(), 1);
    }
}
