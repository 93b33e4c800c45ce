//! Config Entries
//!
//! This crate provides the configuration entry system. Config entries
//! represent individual integration instances and manage their lifecycle
//! (setup, unload, reload).
//!
//! # Key Types
//!
//! - [`ConfigEntry`] - A single integration configuration
//! - [`ConfigEntryState`] - Lifecycle state of an entry
//! - [`ConfigEntries`] - Manager for all config entries
//! - [`EntryHandler`] - Integration setup/unload hooks

pub mod entry;
pub mod handler;
pub mod manager;
pub mod state_machine;

pub use entry::{ConfigEntry, ConfigEntryDisabledBy, ConfigEntrySource, ConfigEntryState};
pub use handler::{EntryHandler, RuntimeData, SetupError};
pub use manager::{ConfigEntries, ConfigEntriesError, ConfigEntriesResult};
pub use state_machine::InvalidTransition;
