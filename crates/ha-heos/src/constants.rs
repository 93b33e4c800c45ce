//! HEOS integration constants

/// Integration domain
pub const DOMAIN: &str = "heos";

/// Entry data key holding the controller's address
pub const CONF_HOST: &str = "host";

pub const ATTR_USERNAME: &str = "username";
pub const ATTR_PASSWORD: &str = "password";

pub const SERVICE_SIGN_IN: &str = "sign_in";
pub const SERVICE_SIGN_OUT: &str = "sign_out";

/// Translation key for the error raised when no entry is loaded
pub const TRANSLATION_INTEGRATION_NOT_LOADED: &str = "integration_not_loaded";

/// English rendering of [`TRANSLATION_INTEGRATION_NOT_LOADED`]
pub const MESSAGE_INTEGRATION_NOT_LOADED: &str = "The HEOS integration is not loaded";
