//! Configuration layer for the `discord-webhook` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The webhook id has no default and must come from CLI or TOML. Tokens are
//! optional at this layer; whether a command can run without one is decided
//! when the command is dispatched.
//!
//! # Credentials
//!
//! A webhook token and a bot token may both be configured. Commands that
//! have a token variant (`get`, `update`, `delete`) prefer the webhook
//! token and fall back to the bot token.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, EditMessageArgs, ExecuteArgs, UpdateArgs};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, parse_json_values, write_default_config};
