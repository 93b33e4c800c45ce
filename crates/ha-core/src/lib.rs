//! Core types for Home Assistant
//!
//! This crate provides the fundamental types shared by the service registry,
//! the config entry manager and integrations: Context, ServiceCall and
//! HomeAssistantError.

mod context;
mod exceptions;
mod service_call;

pub use context::Context;
pub use exceptions::HomeAssistantError;
pub use service_call::{ServiceCall, SupportsResponse};
