//! Shared HEOS fixtures

use std::sync::Arc;

use ha_heos::constants::{CONF_HOST, DOMAIN};
use serde_json::json;

use super::{MockConfigEntry, MockHeosController, TestHomeAssistant};

/// The single HEOS entry, pointing at a local controller
pub fn config_entry() -> MockConfigEntry {
    MockConfigEntry::new(DOMAIN)
        .with_title("HEOS System (via 127.0.0.1)")
        .with_data_value(CONF_HOST, json!("127.0.0.1"))
        .with_unique_id(DOMAIN)
}

/// Add the entry and set up the component against the mock controller
pub async fn setup_component(
    hass: &TestHomeAssistant,
    config_entry: &MockConfigEntry,
    controller: &Arc<MockHeosController>,
) {
    config_entry.add_to_hass(hass);
    ha_heos::async_setup(
        &hass.services,
        hass.config_entries.clone(),
        MockHeosController::factory(controller),
    )
    .await;
}
