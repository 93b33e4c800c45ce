//! Common test utilities for the HEOS integration
//!
//! Test harness, mocks and fixtures: a host (`TestHomeAssistant`), a HEOS
//! config entry, a mock controller and captured log output.
#![allow(dead_code)]

mod fixtures;
mod log_capture;
mod mock_config_entry;
mod mock_controller;
mod test_hass;

pub use fixtures::*;
pub use log_capture::*;
pub use mock_config_entry::*;
pub use mock_controller::*;
pub use test_hass::*;
