//! Tests for validated configuration.

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::ValidatedConfig;

/// Helper to create CLI args from a slice; `get` is appended as the subcommand
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["discord-webhook"];
    full_args.extend(args);
    full_args.push("get");
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod json_tests;
mod loading_tests;
mod precedence_tests;
