//! HEOS Integration
//!
//! Connects a HEOS system (Denon/Marantz audio devices) through its
//! controller and exposes account services:
//!
//! ## Services
//! - `heos.sign_in`: Sign in to a HEOS account (`username`, `password`)
//! - `heos.sign_out`: Sign out of the HEOS account
//!
//! The integration is single-instance: its config entry uses the domain as
//! unique id. While that entry is loaded its runtime data holds the
//! controller the services act on.

pub mod constants;
pub mod controller;
mod services;

use std::sync::Arc;

use async_trait::async_trait;
use ha_config_entries::{ConfigEntries, ConfigEntry, EntryHandler, RuntimeData, SetupError};
use ha_service_registry::ServiceRegistry;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use constants::DOMAIN;
pub use controller::{ControllerFactory, HeosController, HeosError};
pub use services::register_services;

/// Connection settings stored in the entry data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeosEntryData {
    /// Address of the HEOS device acting as controller
    pub host: String,
}

/// Account credentials optionally stored in the entry options
#[derive(Debug, Clone, Deserialize)]
pub struct HeosCredentials {
    pub username: String,
    pub password: String,
}

/// Runtime data of a loaded HEOS entry
pub struct HeosRuntimeData {
    pub host: String,
    pub controller: Arc<dyn HeosController>,
}

/// Sets up and unloads HEOS config entries
pub struct HeosEntryHandler {
    factory: ControllerFactory,
}

impl HeosEntryHandler {
    pub fn new(factory: ControllerFactory) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl EntryHandler for HeosEntryHandler {
    async fn setup_entry(&self, entry: &ConfigEntry) -> Result<RuntimeData, SetupError> {
        let data: HeosEntryData = entry
            .typed_data()
            .map_err(|e| SetupError::Failed(format!("Invalid HEOS entry data: {}", e)))?;

        let controller = (self.factory)(&data);
        controller.connect().await.map_err(|e| {
            SetupError::NotReady(format!("Unable to connect to {}: {}", data.host, e))
        })?;
        debug!("Connected to HEOS controller at {}", data.host);

        if let Ok(credentials) = entry.typed_options::<HeosCredentials>() {
            match controller
                .sign_in(&credentials.username, &credentials.password)
                .await
            {
                Ok(()) => debug!("Signed in to HEOS account {}", credentials.username),
                Err(err) if err.is_authentication() => {
                    warn!("Stored HEOS credentials were rejected: {}", err);
                }
                Err(err) => warn!("Unable to sign in with stored credentials: {}", err),
            }
        }

        info!("HEOS controller {} ready", data.host);
        Ok(RuntimeData::new(HeosRuntimeData {
            host: data.host,
            controller,
        }))
    }

    async fn unload_entry(&self, entry: &ConfigEntry) -> bool {
        let runtime = entry
            .runtime_data
            .as_ref()
            .and_then(|data| data.downcast::<HeosRuntimeData>());

        if let Some(runtime) = runtime {
            if let Err(err) = runtime.controller.disconnect().await {
                warn!("Error disconnecting from HEOS controller {}: {}", runtime.host, err);
            }
        }
        true
    }
}

/// Set up the HEOS component
///
/// Registers the entry handler and the services, then sets up every HEOS
/// entry. An entry that fails to set up stays unloaded; the services are
/// registered regardless and report that the integration is not loaded.
pub async fn async_setup(
    services: &ServiceRegistry,
    config_entries: Arc<ConfigEntries>,
    factory: ControllerFactory,
) {
    config_entries.register_handler(DOMAIN, Arc::new(HeosEntryHandler::new(factory)));
    register_services(services, config_entries.clone());

    for result in config_entries.setup_domain(DOMAIN).await {
        if let Err(err) = result {
            warn!("HEOS entry was not set up: {}", err);
        }
    }
}
