//! Default values for configuration options.

/// Default API base URL, including the version segment.
pub const API_BASE: &str = crate::api::DEFAULT_API_BASE;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default output path for `init`.
pub const CONFIG_FILE: &str = "discord-webhook.toml";
