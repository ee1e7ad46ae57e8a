//! Task List Manager
//!
//! Owns the ordered task list and the id counter. Mutations arrive as
//! `Command`s through `dispatch`, which applies the change and then
//! persists the whole state. Rendering is left to the caller.

use crate::config::Config;
use crate::domain::{DomainError, DomainResult, Task, TaskId, TaskText};
use crate::repository::{KeyValueStore, TaskStore};

/// A mutation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(TaskText),
    Toggle(TaskId),
    Delete(TaskId),
}

/// In-memory list state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskList {
    pub fn new(first_id: TaskId) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: first_id,
        }
    }

    /// Rebuild from stored parts, keeping the counter ahead of every id
    pub fn from_parts(tasks: Vec<Task>, next_id: TaskId) -> Self {
        let floor = tasks
            .iter()
            .map(|t| t.id.saturating_add(1))
            .max()
            .unwrap_or(next_id);
        if floor > next_id {
            log::warn!("[MANAGER] Counter {} behind stored ids, advancing to {}", next_id, floor);
        }
        Self {
            tasks,
            next_id: next_id.max(floor),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a task with a fresh id and return that id
    pub fn add(&mut self, text: TaskText) -> DomainResult<TaskId> {
        let id = self.next_id;
        let next = id
            .checked_add(1)
            .ok_or_else(|| DomainError::Conflict("task id counter exhausted".to_string()))?;
        self.tasks.push(Task::new(id, text));
        self.next_id = next;
        Ok(id)
    }

    /// Invert completion of the matching task; returns whether one matched
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let mut matched = false;
        for task in self.tasks.iter_mut().filter(|t| t.id == id) {
            *task = task.toggled();
            matched = true;
        }
        matched
    }

    /// Remove every task with this id; returns how many were removed
    pub fn delete(&mut self, id: TaskId) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        before - self.tasks.len()
    }

    /// Apply a command to the in-memory state only
    pub fn apply(&mut self, command: Command) -> DomainResult<()> {
        match command {
            Command::Add(text) => {
                let id = self.add(text)?;
                log::info!("[MANAGER] Added task {}", id);
            }
            Command::Toggle(id) => {
                if !self.toggle(id) {
                    log::debug!("[MANAGER] Toggle ignored, no task {}", id);
                }
            }
            Command::Delete(id) => {
                let removed = self.delete(id);
                log::info!("[MANAGER] Deleted {} task(s) with id {}", removed, id);
            }
        }
        Ok(())
    }
}

/// Task list bound to a persistent store
pub struct TodoManager<S> {
    list: TaskList,
    store: TaskStore<S>,
    first_id: TaskId,
}

impl<S: KeyValueStore> TodoManager<S> {
    /// Empty manager that has not read storage yet
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            list: TaskList::new(config.first_id),
            store: TaskStore::new(store, config),
            first_id: config.first_id,
        }
    }

    /// Create a manager and load whatever the store holds
    ///
    /// Malformed values fall back to defaults per key; stored content is
    /// left as is until the next mutation overwrites it.
    pub fn open(store: S, config: &Config) -> Self {
        let mut manager = Self::new(store, config);
        let tasks = match manager.store.load_tasks() {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("[MANAGER] Ignoring stored tasks: {}", e);
                if let Ok(Some(raw)) = manager.store.raw_tasks() {
                    log::warn!("[MANAGER] Discarded tasks value: {}", raw);
                }
                None
            }
        };
        let counter = match manager.store.load_counter() {
            Ok(counter) => counter,
            Err(e) => {
                log::warn!("[MANAGER] Ignoring stored counter: {}", e);
                None
            }
        };
        manager.restore(tasks, counter);
        manager
    }

    fn restore(&mut self, tasks: Option<Vec<Task>>, counter: Option<TaskId>) {
        let tasks = tasks.unwrap_or_else(|| self.list.tasks.clone());
        let counter = counter.unwrap_or(self.list.next_id);
        self.list = TaskList::from_parts(tasks, counter);
        log::info!(
            "[MANAGER] Loaded {} tasks, next id {}",
            self.list.len(),
            self.list.next_id()
        );
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    /// Write the full state to the store
    pub fn persist(&self) -> DomainResult<()> {
        self.store.save(self.list.tasks(), self.list.next_id())
    }

    /// Remove both stored keys and start over from an empty list
    ///
    /// The in-memory reset happens even if the store refuses the removal.
    pub fn reset(&mut self) -> DomainResult<()> {
        self.list = TaskList::new(self.first_id);
        log::info!("[MANAGER] Reset to an empty list");
        self.store.clear()
    }

    /// Apply a command, then persist
    ///
    /// A failed persist leaves the in-memory change in place.
    pub fn dispatch(&mut self, command: Command) -> DomainResult<()> {
        self.list.apply(command)?;
        self.persist()
    }

    /// Add pathway for raw user input
    ///
    /// Blank input is dropped without touching the list; returns whether a
    /// task was added.
    pub fn submit(&mut self, raw: &str) -> DomainResult<bool> {
        match TaskText::parse(raw) {
            Ok(text) => self.dispatch(Command::Add(text)).map(|_| true),
            Err(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    fn text(s: &str) -> TaskText {
        TaskText::parse(s).unwrap()
    }

    fn manager() -> TodoManager<MemoryStore> {
        TodoManager::open(MemoryStore::new(), &Config::default())
    }

    #[test]
    fn test_first_run_defaults() {
        let m = manager();
        assert!(m.list().is_empty());
        assert_eq!(m.list().next_id(), 1);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut m = manager();
        m.dispatch(Command::Add(text("buy milk"))).unwrap();
        assert_eq!(m.list().tasks(), &[Task::new(1, text("buy milk"))]);
        assert_eq!(m.list().next_id(), 2);

        m.dispatch(Command::Toggle(1)).unwrap();
        assert!(m.list().get(1).unwrap().completed);

        m.dispatch(Command::Delete(1)).unwrap();
        assert!(m.list().is_empty());
        assert_eq!(m.list().next_id(), 2);
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut list = TaskList::new(1);
        let mut last = 0;
        for s in ["a", "b", "c"] {
            let before = list.len();
            let id = list.add(text(s)).unwrap();
            assert_eq!(list.len(), before + 1);
            assert!(id > last);
            assert!(!list.get(id).unwrap().completed);
            last = id;
        }
        assert_eq!(list.tasks().last().unwrap().text.as_str(), "c");
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut list = TaskList::new(1);
        list.add(text("a")).unwrap();
        list.add(text("b")).unwrap();
        list.delete(2);
        assert_eq!(list.add(text("c")).unwrap(), 3);
    }

    #[test]
    fn test_submit_rejects_blank() {
        let mut m = manager();
        assert!(!m.submit("").unwrap());
        assert!(!m.submit("   ").unwrap());
        assert!(m.list().is_empty());
        assert_eq!(m.store().backend().len(), 0);

        assert!(m.submit("  water plants ").unwrap());
        assert_eq!(m.list().tasks()[0].text.as_str(), "water plants");
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut list = TaskList::new(1);
        list.add(text("a")).unwrap();
        list.add(text("b")).unwrap();
        list.toggle(2);
        let snapshot = list.clone();

        for id in [1, 2, 99] {
            list.toggle(id);
            list.toggle(id);
            assert_eq!(list, snapshot);
        }
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = TaskList::new(1);
        list.add(text("a")).unwrap();
        let snapshot = list.clone();
        assert!(!list.toggle(42));
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut list = TaskList::new(1);
        for s in ["a", "b", "c", "d"] {
            list.add(text(s)).unwrap();
        }
        assert_eq!(list.delete(2), 1);
        assert_eq!(list.delete(2), 0);
        let ids: Vec<_> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_counter_exhaustion() {
        let mut list = TaskList::new(u32::MAX);
        assert!(matches!(list.add(text("last")), Err(DomainError::Conflict(_))));
        assert!(list.is_empty());
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut m = manager();
        m.dispatch(Command::Add(text("a"))).unwrap();
        m.dispatch(Command::Add(text("b"))).unwrap();
        m.dispatch(Command::Toggle(1)).unwrap();
        m.dispatch(Command::Delete(2)).unwrap();

        let stored = m.store().load_tasks().unwrap().unwrap();
        assert_eq!(stored, m.list().tasks());
        assert_eq!(m.store().load_counter().unwrap(), Some(3));
    }

    #[test]
    fn test_noop_mutation_still_persists() {
        let mut m = manager();
        m.dispatch(Command::Delete(5)).unwrap();
        assert_eq!(m.store().load_tasks().unwrap(), Some(vec![]));
        assert_eq!(m.store().load_counter().unwrap(), Some(1));
    }

    #[test]
    fn test_reopen_round_trip() {
        let mut m = manager();
        m.submit("a").unwrap();
        m.submit("b").unwrap();
        m.submit("c").unwrap();
        m.dispatch(Command::Toggle(3)).unwrap();
        m.dispatch(Command::Delete(1)).unwrap();
        let expected = m.list().clone();

        let backend = MemoryStore::with_entries([
            ("tasks", m.store().backend().get("tasks").unwrap().unwrap()),
            ("taskIdCounter", m.store().backend().get("taskIdCounter").unwrap().unwrap()),
        ]);
        let reopened = TodoManager::open(backend, &Config::default());
        assert_eq!(reopened.list(), &expected);
    }

    #[test]
    fn test_open_falls_back_on_malformed() {
        let backend = MemoryStore::with_entries([("tasks", "oops"), ("taskIdCounter", "7")]);
        let m = TodoManager::open(backend, &Config::default());
        assert!(m.list().is_empty());
        assert_eq!(m.list().next_id(), 7);
        // stored value untouched until the next mutation
        assert_eq!(m.store().backend().get("tasks").unwrap().as_deref(), Some("oops"));
    }

    #[test]
    fn test_open_keeps_tasks_when_counter_malformed() {
        let backend = MemoryStore::with_entries([
            ("tasks", r#"[{"id":4,"text":"a","completed":true}]"#),
            ("taskIdCounter", "NaN"),
        ]);
        let m = TodoManager::open(backend, &Config::default());
        assert_eq!(m.list().len(), 1);
        assert_eq!(m.list().next_id(), 5);
    }

    #[test]
    fn test_reset_clears_storage_and_list() {
        let backend = MemoryStore::with_entries([("tasks", "oops"), ("taskIdCounter", "7")]);
        let mut m = TodoManager::open(backend, &Config::default());
        m.submit("a").unwrap();

        m.reset().unwrap();
        assert!(m.list().is_empty());
        assert_eq!(m.list().next_id(), 1);
        assert!(m.store().backend().is_empty());

        m.submit("b").unwrap();
        assert_eq!(m.list().tasks()[0].id, 1);
    }

    #[test]
    fn test_submit_on_exhausted_counter() {
        let backend = MemoryStore::with_entries([("taskIdCounter", u32::MAX.to_string())]);
        let mut m = TodoManager::open(backend, &Config::default());
        assert!(matches!(m.submit("keep me"), Err(DomainError::Conflict(_))));
        assert!(m.list().is_empty());
    }

    #[test]
    fn test_counter_behind_ids_is_advanced() {
        let backend = MemoryStore::with_entries([
            ("tasks", r#"[{"id":1,"text":"a","completed":false},{"id":9,"text":"b","completed":false}]"#),
            ("taskIdCounter", "3"),
        ]);
        let mut m = TodoManager::open(backend, &Config::default());
        assert_eq!(m.list().next_id(), 10);
        m.submit("c").unwrap();
        assert_eq!(m.list().tasks()[2].id, 10);
    }

    #[test]
    fn test_counter_only_is_kept() {
        let backend = MemoryStore::with_entries([("taskIdCounter", "12")]);
        let m = TodoManager::open(backend, &Config::default());
        assert!(m.list().is_empty());
        assert_eq!(m.list().next_id(), 12);
    }
}
