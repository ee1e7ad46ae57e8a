//! Task Store
//!
//! Encodes the task list and id counter into two string keys of a
//! `KeyValueStore`, and decodes them back with validation.

use std::collections::HashSet;

use crate::config::Config;
use crate::domain::{DomainError, DomainResult, Task, TaskId};
use super::traits::KeyValueStore;

pub struct TaskStore<S> {
    store: S,
    tasks_key: String,
    counter_key: String,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            tasks_key: config.tasks_key.clone(),
            counter_key: config.counter_key.clone(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Overwrite both keys with the given state
    pub fn save(&self, tasks: &[Task], next_id: TaskId) -> DomainResult<()> {
        let json = serde_json::to_string(tasks)
            .map_err(|e| DomainError::Storage(format!("encode tasks: {}", e)))?;
        self.store.set(&self.tasks_key, &json)?;
        self.store.set(&self.counter_key, &next_id.to_string())?;
        log::debug!("[STORE] Saved {} tasks, next id {}", tasks.len(), next_id);
        Ok(())
    }

    /// Decode the stored task array; `None` when the key is absent
    pub fn load_tasks(&self) -> DomainResult<Option<Vec<Task>>> {
        let Some(raw) = self.store.get(&self.tasks_key)? else {
            return Ok(None);
        };
        let tasks: Vec<Task> = serde_json::from_str(&raw)
            .map_err(|e| DomainError::malformed(&self.tasks_key, e.to_string()))?;

        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(DomainError::malformed(
                    &self.tasks_key,
                    format!("duplicate task id {}", task.id),
                ));
            }
        }
        Ok(Some(tasks))
    }

    /// Stored task array as raw text, without decoding
    pub fn raw_tasks(&self) -> DomainResult<Option<String>> {
        self.store.get(&self.tasks_key)
    }

    /// Parse the stored counter; `None` when the key is absent
    pub fn load_counter(&self) -> DomainResult<Option<TaskId>> {
        let Some(raw) = self.store.get(&self.counter_key)? else {
            return Ok(None);
        };
        let counter: TaskId = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::malformed(&self.counter_key, format!("not a decimal id: {:?}", raw)))?;
        if counter == 0 {
            return Err(DomainError::malformed(&self.counter_key, "counter must be at least 1"));
        }
        Ok(Some(counter))
    }

    /// Remove both keys
    pub fn clear(&self) -> DomainResult<()> {
        self.store.remove(&self.tasks_key)?;
        self.store.remove(&self.counter_key)
    }
}
