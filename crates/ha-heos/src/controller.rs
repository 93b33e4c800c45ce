//! HEOS controller client interface
//!
//! The network client that speaks the HEOS CLI protocol lives outside this
//! crate. The integration only depends on the [`HeosController`] trait, and
//! the host injects a [`ControllerFactory`] that builds a client for a
//! configured entry.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::HeosEntryData;

/// Error ids the HEOS CLI uses for account failures
const AUTHENTICATION_ERROR_IDS: [u32; 3] = [
    6,  // Invalid credentials
    8,  // User not logged in
    10, // User not found
];

/// Errors reported by a HEOS controller
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HeosError {
    /// The controller rejected a command because of account credentials
    #[error("{message} ({error_id})")]
    CommandAuthentication {
        command: String,
        message: String,
        error_id: u32,
    },

    /// The controller rejected a command for any other reason
    #[error("{message} ({error_id})")]
    CommandFailed {
        command: String,
        message: String,
        error_id: u32,
    },

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("{0}")]
    Generic(String),
}

impl HeosError {
    /// Build the error for a failed command response, classifying account
    /// failures as [`HeosError::CommandAuthentication`]
    pub fn command_failure(
        command: impl Into<String>,
        message: impl Into<String>,
        error_id: u32,
    ) -> Self {
        let command = command.into();
        let message = message.into();
        if AUTHENTICATION_ERROR_IDS.contains(&error_id) {
            HeosError::CommandAuthentication {
                command,
                message,
                error_id,
            }
        } else {
            HeosError::CommandFailed {
                command,
                message,
                error_id,
            }
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, HeosError::CommandAuthentication { .. })
    }
}

/// Live connection to a HEOS system
#[async_trait]
pub trait HeosController: Send + Sync {
    /// Open the connection to the controller
    async fn connect(&self) -> Result<(), HeosError>;

    /// Close the connection
    async fn disconnect(&self) -> Result<(), HeosError>;

    /// Sign in to a HEOS account
    async fn sign_in(&self, username: &str, password: &str) -> Result<(), HeosError>;

    /// Sign out of the current HEOS account
    async fn sign_out(&self) -> Result<(), HeosError>;

    /// Account currently signed in, if any
    fn signed_in_username(&self) -> Option<String>;
}

/// Builds a controller for a configured entry
pub type ControllerFactory =
    Arc<dyn Fn(&HeosEntryData) -> Arc<dyn HeosController> + Send + Sync + 'static>;
