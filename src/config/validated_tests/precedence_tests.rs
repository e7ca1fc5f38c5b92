//! Tests for CLI > TOML > default precedence.

use std::time::Duration;

use super::*;

const FULL_TOML: &str = r#"
    [api]
    base_url = "https://toml.example.com/api/v9"
    timeout = 10
    user_agent = "TomlBot (toml, 1)"

    [auth]
    bot_token = "Bot toml"

    [webhook]
    id = "toml-id"
    token = "toml-token"
"#;

#[test]
fn toml_values_are_used_without_cli() {
    let toml = toml(FULL_TOML);

    let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

    assert_eq!(config.api_base.as_str(), "https://toml.example.com/api/v9");
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.user_agent.as_ref().unwrap(), "TomlBot (toml, 1)");
    assert_eq!(config.bot_token.as_deref(), Some("Bot toml"));
    assert_eq!(config.webhook.webhook_id, "toml-id");
    assert_eq!(config.webhook_token(), Some("toml-token"));
}

#[test]
fn cli_values_override_toml() {
    let toml = toml(FULL_TOML);
    let cli = cli(&[
        "--api-base",
        "https://cli.example.com/api/v10",
        "--timeout",
        "3",
        "--user-agent",
        "CliBot (cli, 2)",
        "--bot-token",
        "Bot cli",
        "--webhook-id",
        "cli-id",
        "--webhook-token",
        "cli-token",
    ]);

    let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

    assert_eq!(config.api_base.as_str(), "https://cli.example.com/api/v10");
    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.user_agent.as_ref().unwrap(), "CliBot (cli, 2)");
    assert_eq!(config.bot_token.as_deref(), Some("Bot cli"));
    assert_eq!(config.webhook.webhook_id, "cli-id");
    assert_eq!(config.webhook_token(), Some("cli-token"));
}

#[test]
fn cli_id_combines_with_toml_token() {
    let toml = toml(
        r#"
        [webhook]
        id = "toml-id"
        token = "toml-token"
    "#,
    );

    let config = ValidatedConfig::from_raw(&cli(&["--webhook-id", "cli-id"]), Some(&toml)).unwrap();

    assert_eq!(config.webhook.webhook_id, "cli-id");
    assert_eq!(config.webhook_token(), Some("toml-token"));
}

#[test]
fn flags_come_from_cli_only() {
    let toml = toml(FULL_TOML);

    let config =
        ValidatedConfig::from_raw(&cli(&["--dry-run", "--verbose"]), Some(&toml)).unwrap();

    assert!(config.dry_run);
    assert!(config.verbose);
}
