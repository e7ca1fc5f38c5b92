//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::HeaderValue;
use serde_json::Value;
use url::Url;

use crate::api::WebhookIdentity;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// API base URL
    pub api_base: Url,

    /// Webhook id and optional token
    pub webhook: WebhookIdentity,

    /// Bot token for bot-authorized calls
    pub bot_token: Option<String>,

    /// Request timeout
    pub timeout: Duration,

    /// User-Agent override
    pub user_agent: Option<HeaderValue>,

    /// Dry-run mode (log requests without sending them)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let present = |set: bool| if set { "set" } else { "none" };

        write!(
            f,
            "Config {{ api_base: {}, webhook_id: {}, webhook_token: {}, bot_token: {}, \
             timeout: {}s, dry_run: {} }}",
            self.api_base,
            self.webhook.webhook_id,
            present(self.webhook.uses_token()),
            present(self.bot_token.is_some()),
            self.timeout.as_secs(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook id is missing
    /// - The API base URL is invalid
    /// - The timeout is zero
    /// - The user agent is not a valid header value
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let api_base = Self::resolve_api_base(cli, toml)?;
        let webhook = Self::resolve_webhook(cli, toml)?;

        let bot_token = cli
            .bot_token
            .clone()
            .or_else(|| toml.and_then(|t| t.auth.bot_token.clone()));

        let timeout = Self::resolve_timeout(cli, toml)?;
        let user_agent = Self::resolve_user_agent(cli, toml)?;

        Ok(Self {
            api_base,
            webhook,
            bot_token,
            timeout,
            user_agent,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns the webhook token if one is configured.
    #[must_use]
    pub fn webhook_token(&self) -> Option<&str> {
        self.webhook.webhook_token.as_deref()
    }

    fn resolve_api_base(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let base_str = cli
            .api_base
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.base_url.as_deref()))
            .unwrap_or(defaults::API_BASE);

        let url = Url::parse(base_str).map_err(|e| ConfigError::InvalidUrl {
            url: base_str.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: base_str.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_webhook(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<WebhookIdentity, ConfigError> {
        // CLI takes precedence
        let id = cli
            .webhook_id
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.id.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK_ID,
                    "Use --webhook-id or set webhook.id in config file",
                )
            })?;

        let token = cli
            .webhook_token
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.token.as_deref()));

        Ok(match token {
            Some(token) => WebhookIdentity::with_token(id, token),
            None => WebhookIdentity::new(id),
        })
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.api.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_user_agent(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<HeaderValue>, ConfigError> {
        let user_agent = cli
            .user_agent
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.user_agent.as_deref()));

        user_agent
            .map(|value| {
                HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
                    name: "User-Agent".to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parses JSON-valued arguments such as `--embed`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidJson`] for the first value that does not parse.
pub fn parse_json_values(values: &[String]) -> Result<Vec<Value>, ConfigError> {
    values
        .iter()
        .map(|value| {
            serde_json::from_str(value).map_err(|source| ConfigError::InvalidJson {
                value: value.clone(),
                source,
            })
        })
        .collect()
}
