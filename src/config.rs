//! Frontend Settings
//!
//! Host element ids, logging options from the page URL, and the core
//! configuration embedded in the page.

use log::LevelFilter;
use std::str::FromStr;
use todo_core::Config;
use url::form_urlencoded;

/// Text input for new task text
pub const TASK_INPUT_ID: &str = "taskInput";
/// Button that submits the input
pub const ADD_BUTTON_ID: &str = "addTaskBtn";
/// Container the task list is rendered into
pub const TASK_LIST_ID: &str = "taskList";
/// `<script type="application/json">` holding `Config` overrides
pub const CONFIG_ELEMENT_ID: &str = "todoConfig";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_level: LevelFilter,
    pub log_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl Settings {
    /// Parse `?log=debug&logCapacity=500`; unknown keys and bad values are ignored
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let pairs = form_urlencoded::parse(query.trim_start_matches('?').as_bytes());
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "log" => {
                    if let Ok(level) = LevelFilter::from_str(value) {
                        settings.log_level = level;
                    }
                }
                "logCapacity" => {
                    if let Ok(capacity) = value.parse::<usize>() {
                        settings.log_capacity = capacity.max(1);
                    }
                }
                _ => {}
            }
        }
        settings
    }

    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|query| Self::from_query(&query))
            .unwrap_or_default()
    }
}

/// Read `Config` from the page, falling back to defaults
pub fn core_config(document: &web_sys::Document) -> Config {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Config::default();
    };
    if json.trim().is_empty() {
        return Config::default();
    }
    match Config::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[CONFIG] Using defaults: {}", e);
            Config::default()
        }
    }
}
