//! HEOS account services
//!
//! `heos.sign_in` and `heos.sign_out` act on the controller of the loaded
//! HEOS entry. Calling either while the entry is not loaded raises a
//! user-facing error. Controller failures are logged and the call still
//! succeeds.

use std::sync::Arc;

use ha_config_entries::ConfigEntries;
use ha_core::{HomeAssistantError, ServiceCall};
use ha_service_registry::{ServiceDescription, ServiceError, ServiceRegistry, ServiceResult};
use serde_json::json;
use tracing::{debug, error, info};

use crate::constants::{
    ATTR_PASSWORD, ATTR_USERNAME, DOMAIN, MESSAGE_INTEGRATION_NOT_LOADED, SERVICE_SIGN_IN,
    SERVICE_SIGN_OUT, TRANSLATION_INTEGRATION_NOT_LOADED,
};
use crate::controller::{HeosController, HeosError};
use crate::HeosRuntimeData;

fn sign_in_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            ATTR_USERNAME: {"type": "string"},
            ATTR_PASSWORD: {"type": "string"}
        },
        "required": [ATTR_USERNAME, ATTR_PASSWORD]
    })
}

fn sign_out_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "additionalProperties": false
    })
}

/// Register the HEOS services
pub fn register_services(services: &ServiceRegistry, config_entries: Arc<ConfigEntries>) {
    let entries = config_entries.clone();
    services.register_with_description(
        ServiceDescription {
            name: Some("Sign in".to_string()),
            description: Some("Signs in to a HEOS account.".to_string()),
            schema: Some(sign_in_schema()),
            ..ServiceDescription::new(DOMAIN, SERVICE_SIGN_IN)
        },
        move |call: ServiceCall| {
            let entries = entries.clone();
            async move { sign_in(&entries, call).await }
        },
    );

    let entries = config_entries;
    services.register_with_description(
        ServiceDescription {
            name: Some("Sign out".to_string()),
            description: Some("Signs out of the HEOS account.".to_string()),
            schema: Some(sign_out_schema()),
            ..ServiceDescription::new(DOMAIN, SERVICE_SIGN_OUT)
        },
        move |_call: ServiceCall| {
            let entries = entries.clone();
            async move { sign_out(&entries).await }
        },
    );

    info!("HEOS services registered");
}

/// Controller of the loaded HEOS entry
fn get_controller(
    config_entries: &ConfigEntries,
) -> Result<Arc<dyn HeosController>, HomeAssistantError> {
    config_entries
        .get_by_unique_id(DOMAIN, DOMAIN)
        .and_then(|entry| config_entries.runtime_data::<HeosRuntimeData>(&entry.entry_id))
        .map(|runtime| runtime.controller.clone())
        .ok_or_else(|| {
            HomeAssistantError::translated(
                DOMAIN,
                TRANSLATION_INTEGRATION_NOT_LOADED,
                MESSAGE_INTEGRATION_NOT_LOADED,
            )
        })
}

fn required_string(call: &ServiceCall, key: &str) -> Result<String, ServiceError> {
    call.get::<String>(key)
        .ok_or_else(|| ServiceError::InvalidData(format!("'{}' is required", key)))
}

async fn sign_in(config_entries: &ConfigEntries, call: ServiceCall) -> ServiceResult {
    let controller = get_controller(config_entries)?;
    let username = required_string(&call, ATTR_USERNAME)?;
    let password = required_string(&call, ATTR_PASSWORD)?;

    match controller.sign_in(&username, &password).await {
        Ok(()) => debug!("Signed in to HEOS account {}", username),
        Err(err @ HeosError::CommandAuthentication { .. }) => {
            error!("Sign in failed: {}", err);
        }
        Err(err) => error!("Unable to sign in: {}", err),
    }

    Ok(None)
}

async fn sign_out(config_entries: &ConfigEntries) -> ServiceResult {
    let controller = get_controller(config_entries)?;

    match controller.sign_out().await {
        Ok(()) => debug!("Signed out of HEOS account"),
        Err(err) => error!("Unable to sign out: {}", err),
    }

    Ok(None)
}
