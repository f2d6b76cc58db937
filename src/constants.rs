//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Virtual Keyboard";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "vkbd";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "VKBD_CONFIG_DIR";

/// Default hold time before a key's accent menu opens, in milliseconds.
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;
