//! Manager Configuration
//!
//! Storage keys and id numbering. Every field has a default, so an empty
//! JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, TaskId};

pub const DEFAULT_TASKS_KEY: &str = "tasks";
pub const DEFAULT_COUNTER_KEY: &str = "taskIdCounter";
pub const DEFAULT_FIRST_ID: TaskId = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Key holding the JSON task array
    pub tasks_key: String,
    /// Key holding the decimal id counter
    pub counter_key: String,
    /// Id handed to the first task of a fresh list
    pub first_id: TaskId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            counter_key: DEFAULT_COUNTER_KEY.to_string(),
            first_id: DEFAULT_FIRST_ID,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidInput(format!("config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.tasks_key.is_empty() || self.counter_key.is_empty() {
            return Err(DomainError::InvalidInput("storage keys must not be empty".to_string()));
        }
        if self.tasks_key == self.counter_key {
            return Err(DomainError::InvalidInput("storage keys must differ".to_string()));
        }
        if self.first_id == 0 {
            return Err(DomainError::InvalidInput("first id must be at least 1".to_string()));
        }
        Ok(())
    }
}
