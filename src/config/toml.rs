//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API endpoint configuration section
    #[serde(default)]
    pub api: ApiSection,

    /// Credentials section
    #[serde(default)]
    pub auth: AuthSection,

    /// Webhook identity section
    #[serde(default)]
    pub webhook: WebhookSection,
}

/// API endpoint configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// API base URL including the version segment
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// User-Agent header value
    pub user_agent: Option<String>,
}

/// Credentials section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    /// Bot token, including the "Bot " prefix
    pub bot_token: Option<String>,
}

/// Webhook identity section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook id
    pub id: Option<String>,

    /// Webhook token
    pub token: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# discord-webhook configuration file

[api]
# API base URL including the version segment (default: https://discord.com/api/v9)
# base_url = "https://discord.com/api/v9"

# Request timeout in seconds (default: 30)
# timeout = 30

# User-Agent header value (default: DiscordBot (discord-webhook, <version>))
# user_agent = "DiscordBot (https://example.com, 1.0)"

[auth]
# Bot token, needed by get/update/delete when no webhook token is set
# bot_token = "Bot your-token-here"

[webhook]
# Webhook id (required)
# id = "123456789012345678"

# Webhook token, needed by execute and the message commands
# token = "your-webhook-token"
"#
    .to_string()
}
