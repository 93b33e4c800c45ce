//! Integration hooks for entry setup and unload
//!
//! Each integration domain registers one [`EntryHandler`]. The manager calls
//! it when an entry of that domain is set up or unloaded and keeps whatever
//! [`RuntimeData`] the setup produced until the entry leaves `Loaded`.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::entry::ConfigEntry;

/// Why an integration could not set up an entry
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SetupError {
    /// The device or service is temporarily unavailable; the entry is
    /// left in `SetupRetry`
    #[error("not ready: {0}")]
    NotReady(String),

    /// Setup failed and will not succeed without user action
    #[error("{0}")]
    Failed(String),
}

/// Type-erased value an integration attaches to a loaded entry
#[derive(Clone)]
pub struct RuntimeData(Arc<dyn Any + Send + Sync>);

impl RuntimeData {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Get the value back as its concrete type
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.0).downcast::<T>().ok()
    }
}

impl fmt::Debug for RuntimeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RuntimeData(..)")
    }
}

/// Setup/unload hooks an integration provides for its config entries
#[async_trait]
pub trait EntryHandler: Send + Sync {
    /// Set up an entry, returning the data to keep while it is loaded
    async fn setup_entry(&self, entry: &ConfigEntry) -> Result<RuntimeData, SetupError>;

    /// Tear down a loaded entry. Returning false marks the entry `FailedUnload`.
    async fn unload_entry(&self, _entry: &ConfigEntry) -> bool {
        true
    }
}
