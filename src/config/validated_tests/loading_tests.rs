//! Tests for configuration loading and required fields.

use std::fs;
use std::io::Write;
use std::time::Duration;

use tempfile::{NamedTempFile, tempdir};

use super::super::validated::write_default_config;
use super::*;

mod required_fields {
    use super::*;

    #[test]
    fn missing_webhook_id_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired {
                field: "webhook_id",
                ..
            })
        ));
    }

    #[test]
    fn webhook_id_from_cli_is_enough() {
        let config = ValidatedConfig::from_raw(&cli(&["--webhook-id", "123"]), None).unwrap();

        assert_eq!(config.webhook.webhook_id, "123");
        assert!(config.webhook_token().is_none());
        assert!(config.bot_token.is_none());
        assert_eq!(config.api_base.as_str(), "https://discord.com/api/v9");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn webhook_id_from_toml() {
        let toml = toml(
            r#"
            [webhook]
            id = "123"
            token = "tkn"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.webhook.webhook_id, "123");
        assert_eq!(config.webhook_token(), Some("tkn"));
    }
}

mod validation {
    use super::*;

    #[test]
    fn invalid_api_base_returns_error() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--webhook-id", "1", "--api-base", "not a url"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn opaque_api_base_returns_error() {
        let result = ValidatedConfig::from_raw(
            &cli(&["--webhook-id", "1", "--api-base", "mailto:a@example.com"]),
            None,
        );

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn zero_timeout_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&["--webhook-id", "1", "--timeout", "0"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "timeout",
                ..
            })
        ));
    }

    #[test]
    fn invalid_user_agent_returns_error() {
        let result = ValidatedConfig::from_raw(
            &cli(&["--webhook-id", "1", "--user-agent", "bad\nagent"]),
            None,
        );

        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeaderValue { .. })
        ));
    }

    #[test]
    fn display_redacts_tokens() {
        let config = ValidatedConfig::from_raw(
            &cli(&[
                "--webhook-id",
                "123",
                "--webhook-token",
                "secret-webhook-token",
                "--bot-token",
                "Bot secret-bot-token",
            ]),
            None,
        )
        .unwrap();

        let display = config.to_string();

        assert!(display.contains("webhook_id: 123"));
        assert!(!display.contains("secret-webhook-token"));
        assert!(!display.contains("secret-bot-token"));
        assert!(display.contains("webhook_token: set"));
    }
}

mod file_loading {
    use super::*;

    #[test]
    fn load_reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook]\nid = \"123\"\ntoken = \"tkn\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::parse_from_iter(["discord-webhook", "--config", &path, "get"]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.webhook.webhook_id, "123");
        assert_eq!(config.webhook_token(), Some("tkn"));
    }

    #[test]
    fn load_missing_file_returns_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let path = path.to_str().unwrap();

        let cli = Cli::parse_from_iter(["discord-webhook", "--config", path, "get"]);
        let result = ValidatedConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook\nid = ").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::parse_from_iter(["discord-webhook", "--config", &path, "get"]);
        let result = ValidatedConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn load_without_config_uses_cli_only() {
        let cli = Cli::parse_from_iter(["discord-webhook", "--webhook-id", "9", "get"]);

        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.webhook.webhook_id, "9");
    }

    #[test]
    fn write_default_config_creates_parseable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("discord-webhook.toml");

        write_default_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(TomlConfig::parse(&content).is_ok());
    }

    #[test]
    fn write_default_config_to_missing_dir_returns_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("config.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
