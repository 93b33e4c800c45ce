//! Test Home Assistant instance
//!
//! Provides an isolated instance with a service registry, config entries
//! and captured logs.

use std::sync::Arc;

use ha_config_entries::ConfigEntries;
use ha_core::Context;
use ha_service_registry::{ServiceRegistry, ServiceResult};
use tracing::subscriber::DefaultGuard;

use super::LogCapture;

/// A test instance of Home Assistant
pub struct TestHomeAssistant {
    /// Service registry for service calls
    pub services: Arc<ServiceRegistry>,
    /// Config entries of all integrations
    pub config_entries: Arc<ConfigEntries>,
    /// Logs emitted on this test's thread
    pub caplog: LogCapture,
    _log_guard: DefaultGuard,
}

impl TestHomeAssistant {
    /// Create a new test Home Assistant instance
    pub fn new() -> Self {
        let caplog = LogCapture::default();
        let _log_guard = caplog.install();

        Self {
            services: Arc::new(ServiceRegistry::new()),
            config_entries: Arc::new(ConfigEntries::new()),
            caplog,
            _log_guard,
        }
    }

    /// Call a service and wait for its handler to finish
    pub async fn call_service(
        &self,
        domain: &str,
        service: &str,
        service_data: serde_json::Value,
    ) -> ServiceResult {
        self.services
            .call(domain, service, service_data, Context::new(), false)
            .await
    }

    /// Assert that the captured logs contain a message
    pub fn assert_logged(&self, expected: &str) {
        let text = self.caplog.text();
        assert!(
            text.contains(expected),
            "Expected log to contain '{}', got:\n{}",
            expected,
            text
        );
    }
}

impl Default for TestHomeAssistant {
    fn default() -> Self {
        Self::new()
    }
}
