//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::defaults;

/// Discord webhook client
///
/// Gets, executes, updates and deletes webhooks, and manages messages
/// the webhook has sent.
#[derive(Debug, Parser)]
#[command(name = "discord-webhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL including the version segment
    #[arg(long = "api-base", global = true)]
    pub api_base: Option<String>,

    /// Bot token sent as the Authorization header (include the "Bot " prefix)
    #[arg(long = "bot-token", global = true)]
    pub bot_token: Option<String>,

    /// Webhook id
    #[arg(long = "webhook-id", global = true)]
    pub webhook_id: Option<String>,

    /// Webhook token
    #[arg(long = "webhook-token", global = true)]
    pub webhook_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// User-Agent header value
    #[arg(long = "user-agent", global = true)]
    pub user_agent: Option<String>,

    /// Log requests instead of sending them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for discord-webhook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Get the webhook
    Get,

    /// Post a message through the webhook
    Execute(ExecuteArgs),

    /// Change the webhook's name, avatar or channel
    Update(UpdateArgs),

    /// Delete the webhook
    Delete {
        /// Audit log reason
        #[arg(long)]
        reason: Option<String>,
    },

    /// Get a message sent by the webhook
    GetMessage {
        /// Message id
        #[arg(long = "message-id")]
        message_id: String,
    },

    /// Edit a message sent by the webhook
    EditMessage(EditMessageArgs),

    /// Delete a message sent by the webhook
    DeleteMessage {
        /// Message id
        #[arg(long = "message-id")]
        message_id: String,
    },
}

/// Arguments for `execute`.
#[derive(Debug, Args)]
pub struct ExecuteArgs {
    /// Message text
    #[arg(long)]
    pub content: Option<String>,

    /// Override the webhook's username
    #[arg(long)]
    pub username: Option<String>,

    /// Override the webhook's avatar
    #[arg(long = "avatar-url")]
    pub avatar_url: Option<String>,

    /// Send as text-to-speech
    #[arg(long)]
    pub tts: bool,

    /// Message flags bitfield
    #[arg(long)]
    pub flags: Option<u64>,

    /// Embed object as JSON (can be specified multiple times)
    #[arg(long = "embed", value_name = "JSON")]
    pub embeds: Vec<String>,

    /// File to attach (can be specified multiple times)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Wait for the created message and print it
    #[arg(long)]
    pub wait: bool,
}

/// Arguments for `update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// New default name
    #[arg(long)]
    pub name: Option<String>,

    /// New default avatar as a data URI
    #[arg(long)]
    pub avatar: Option<String>,

    /// Channel to move the webhook to (bot token only)
    #[arg(long = "channel-id")]
    pub channel_id: Option<String>,

    /// Audit log reason
    #[arg(long)]
    pub reason: Option<String>,
}

/// Arguments for `edit-message`.
#[derive(Debug, Args)]
pub struct EditMessageArgs {
    /// Message id
    #[arg(long = "message-id")]
    pub message_id: String,

    /// New message text
    #[arg(long)]
    pub content: Option<String>,

    /// New embed object as JSON (can be specified multiple times)
    #[arg(long = "embed", value_name = "JSON")]
    pub embeds: Vec<String>,

    /// File to attach (can be specified multiple times)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
