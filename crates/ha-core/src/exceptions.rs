//! User-facing errors raised by integrations
//!
//! A `HomeAssistantError` is what a service handler raises when the caller
//! should see the failure. Integrations that ship translations attach a
//! translation domain and key so frontends can localize the message; the
//! English message is always carried as well.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error surfaced to the caller of a service
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct HomeAssistantError {
    /// Rendered message
    pub message: String,

    /// Integration owning the translation (e.g., "heos")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_domain: Option<String>,

    /// Key under the integration's `exceptions` translations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_key: Option<String>,

    /// Placeholder values substituted into the translated message
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub translation_placeholders: HashMap<String, String>,
}

impl HomeAssistantError {
    /// Create an untranslated error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            translation_domain: None,
            translation_key: None,
            translation_placeholders: HashMap::new(),
        }
    }

    /// Create an error backed by an integration translation
    pub fn translated(
        domain: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            translation_domain: Some(domain.into()),
            translation_key: Some(key.into()),
            translation_placeholders: HashMap::new(),
        }
    }

    /// Attach a translation placeholder
    pub fn with_placeholder(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.translation_placeholders
            .insert(name.into(), value.into());
        self
    }
}
