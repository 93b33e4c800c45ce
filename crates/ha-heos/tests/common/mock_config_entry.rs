//! Mock config entry for testing
//!
//! A configurable builder for config entries used in tests.

use std::collections::HashMap;

use ha_config_entries::{ConfigEntry, ConfigEntrySource};
use serde_json::Value;
use ulid::Ulid;

use super::TestHomeAssistant;

/// A mock config entry for testing
#[derive(Debug, Clone)]
pub struct MockConfigEntry {
    /// Unique identifier for this entry
    pub entry_id: String,
    /// Integration domain
    pub domain: String,
    /// Display title
    pub title: String,
    /// Configuration data
    pub data: HashMap<String, Value>,
    /// User-configurable options
    pub options: HashMap<String, Value>,
    /// Unique ID for identifying the same config
    pub unique_id: Option<String>,
    /// Source of the config entry
    pub source: ConfigEntrySource,
}

impl MockConfigEntry {
    /// Create a new mock config entry for a domain
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            entry_id: Ulid::new().to_string(),
            domain: domain.into(),
            title: "Mock Title".to_string(),
            data: HashMap::new(),
            options: HashMap::new(),
            unique_id: None,
            source: ConfigEntrySource::User,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a single data value
    pub fn with_data_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Set a single option value
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    /// Build the real config entry
    pub fn to_config_entry(&self) -> ConfigEntry {
        let mut entry = ConfigEntry::new(self.domain.clone(), self.title.clone())
            .with_data(self.data.clone())
            .with_options(self.options.clone())
            .with_source(self.source.clone());
        entry.entry_id = self.entry_id.clone();
        entry.unique_id = self.unique_id.clone();
        entry
    }

    /// Add this entry to the test instance without setting it up
    pub fn add_to_hass(&self, hass: &TestHomeAssistant) {
        hass.config_entries
            .add(self.to_config_entry())
            .expect("Failed to add mock config entry");
    }
}
