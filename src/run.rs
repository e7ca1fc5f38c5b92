//! Application execution logic.
//!
//! This module turns a parsed [`Command`] into one webhook API call,
//! sends it (or logs it in dry-run mode), and prints the response.

use std::io::Write;
use std::path::{Path, PathBuf};

use http::{HeaderMap, StatusCode};
use thiserror::Error;
use url::Url;

use discord_webhook::api::{
    ApiError, ExecuteWebhook, MessageEdit, MessagePayload, WebhookClient, WebhookUpdate,
};
use discord_webhook::config::{
    Command, ConfigError, EditMessageArgs, ExecuteArgs, UpdateArgs, ValidatedConfig, field,
    parse_json_values,
};
use discord_webhook::transport::{
    Attachment, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestClient, RequestBody,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call could not be built or sent.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] HttpError),

    /// The server answered with a non-2xx status.
    #[error("Request failed with status {status}")]
    Unsuccessful {
        /// Response status
        status: StatusCode,
    },

    /// Failed to read a file given with `--file`.
    #[error("Failed to read attachment '{}': {source}", path.display())]
    Attachment {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The command needs a credential that is not configured.
    #[error("Missing credential: {field}. {hint}")]
    MissingCredential {
        /// Name of the missing credential
        field: &'static str,
        /// Hint for how to provide it
        hint: &'static str,
    },

    /// A command argument is invalid.
    #[error(transparent)]
    InvalidArgument(#[from] ConfigError),

    /// Failed to write the response body.
    #[error("Failed to write response: {0}")]
    Output(#[source] std::io::Error),

    /// The command does not call the API.
    #[error("'{0}' does not call the API")]
    NotAnApiCommand(&'static str),
}

impl RunError {
    /// Returns true if the error stems from how the command was invoked
    /// rather than from the exchange with the server.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. } | Self::InvalidArgument(_) | Self::NotAnApiCommand(_)
        )
    }
}

/// Credential chosen for commands that have a token and a bot variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Credential<'a> {
    WebhookToken(&'a str),
    BotToken(&'a str),
}

/// Picks the webhook token if configured, otherwise the bot token.
fn credential(config: &ValidatedConfig) -> Result<Credential<'_>, RunError> {
    if let Some(token) = config.webhook_token() {
        return Ok(Credential::WebhookToken(token));
    }

    config
        .bot_token
        .as_deref()
        .map(Credential::BotToken)
        .ok_or(RunError::MissingCredential {
            field: field::BOT_TOKEN,
            hint: "Use --webhook-token or --bot-token, or set one in the config file",
        })
}

fn require_webhook_token(config: &ValidatedConfig) -> Result<&str, RunError> {
    config
        .webhook_token()
        .ok_or(RunError::MissingCredential {
            field: field::WEBHOOK_TOKEN,
            hint: "Use --webhook-token or set webhook.token in config file",
        })
}

/// Transport used by the binary: the real client, or one that only logs.
#[derive(Debug)]
pub enum AppClient {
    /// Sends requests over HTTP
    Live(ReqwestClient),
    /// Logs requests without sending them
    DryRun(DryRunClient),
}

impl HttpClient for AppClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        match self {
            Self::Live(client) => client.request(req).await,
            Self::DryRun(client) => client.request(req).await,
        }
    }
}

/// Transport that logs each request and answers `204 No Content`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunClient;

impl HttpClient for DryRunClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        tracing::info!(
            method = %req.method,
            bucket = %req.bucket(),
            url = %redact_url(&req.url),
            body = %describe_body(req.body.as_ref()),
            "Dry-run: request not sent"
        );
        Ok(HttpResponse::new(
            StatusCode::NO_CONTENT,
            HeaderMap::new(),
            Vec::new(),
        ))
    }
}

/// Replaces the webhook token segment of `url` with `***`.
///
/// The token is the second segment after `webhooks`; URLs without one
/// are returned unchanged.
fn redact_url(url: &Url) -> String {
    let Some(segments) = url.path_segments() else {
        return url.to_string();
    };
    let segments: Vec<&str> = segments.collect();

    let Some(token_index) = segments
        .iter()
        .position(|segment| *segment == "webhooks")
        .map(|index| index + 2)
        .filter(|index| *index < segments.len())
    else {
        return url.to_string();
    };

    let path: Vec<&str> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| if index == token_index { "***" } else { *segment })
        .collect();

    let mut redacted = url.clone();
    redacted.set_path(&format!("/{}", path.join("/")));
    redacted.to_string()
}

fn describe_body(body: Option<&RequestBody>) -> String {
    match body {
        None => "none".to_string(),
        Some(RequestBody::Json(bytes)) => format!("json ({} bytes)", bytes.len()),
        Some(RequestBody::Multipart(form)) => format!("multipart ({} files)", form.file_count()),
    }
}

/// Executes one command against the webhook API.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be created
/// - The command lacks a credential or has an invalid argument
/// - The request cannot be built or sent
/// - The server answers with a non-2xx status
///
/// Excluded from coverage - requires network access.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, command: Command) -> Result<(), RunError> {
    let client = create_client(&config)?;

    if config.dry_run {
        tracing::info!("Dry-run mode enabled - requests will be logged but not sent");
    }

    let response = dispatch(&client, &config, command).await?;
    report(&response, &mut std::io::stdout().lock())
}

/// Creates the webhook client from configuration.
fn create_client(config: &ValidatedConfig) -> Result<WebhookClient<AppClient>, RunError> {
    let transport = if config.dry_run {
        AppClient::DryRun(DryRunClient)
    } else {
        let mut client =
            ReqwestClient::with_timeout(config.timeout).map_err(RunError::ClientBuild)?;
        if let Some(ref user_agent) = config.user_agent {
            client = client.with_user_agent(user_agent.clone());
        }
        AppClient::Live(client)
    };

    Ok(WebhookClient::with_api_base(
        transport,
        config.api_base.clone(),
    ))
}

/// Maps a command to its API call.
async fn dispatch<H: HttpClient>(
    client: &WebhookClient<H>,
    config: &ValidatedConfig,
    command: Command,
) -> Result<HttpResponse, RunError> {
    let id = config.webhook.webhook_id.as_str();

    match command {
        Command::Init { .. } => Err(RunError::NotAnApiCommand("init")),
        Command::Get => get(client, config).await,
        Command::Execute(args) => {
            let token = require_webhook_token(config)?;
            let params = execute_params(args)?;
            Ok(client.execute_webhook(token, id, params).await?)
        }
        Command::Update(args) => update(client, config, args).await,
        Command::Delete { reason } => delete(client, config, reason.as_deref()).await,
        Command::GetMessage { message_id } => {
            let token = require_webhook_token(config)?;
            Ok(client.get_webhook_message(token, id, &message_id).await?)
        }
        Command::EditMessage(args) => edit_message(client, config, args).await,
        Command::DeleteMessage { message_id } => {
            let token = require_webhook_token(config)?;
            Ok(client
                .delete_webhook_message(token, id, &message_id)
                .await?)
        }
    }
}

async fn get<H: HttpClient>(
    client: &WebhookClient<H>,
    config: &ValidatedConfig,
) -> Result<HttpResponse, RunError> {
    let id = config.webhook.webhook_id.as_str();

    let response = match credential(config)? {
        Credential::WebhookToken(token) => client.get_webhook_with_token(token, id).await?,
        Credential::BotToken(token) => client.get_webhook(token, id).await?,
    };
    Ok(response)
}

async fn update<H: HttpClient>(
    client: &WebhookClient<H>,
    config: &ValidatedConfig,
    args: UpdateArgs,
) -> Result<HttpResponse, RunError> {
    let id = config.webhook.webhook_id.as_str();
    let reason = args.reason.as_deref();
    let data = update_data(&args);

    let response = match credential(config)? {
        Credential::WebhookToken(token) => {
            client
                .update_webhook_with_token(token, id, &data, reason)
                .await?
        }
        Credential::BotToken(token) => client.update_webhook(token, id, &data, reason).await?,
    };
    Ok(response)
}

async fn delete<H: HttpClient>(
    client: &WebhookClient<H>,
    config: &ValidatedConfig,
    reason: Option<&str>,
) -> Result<HttpResponse, RunError> {
    let id = config.webhook.webhook_id.as_str();

    let response = match credential(config)? {
        Credential::WebhookToken(token) => {
            client.delete_webhook_with_token(token, id, reason).await?
        }
        Credential::BotToken(token) => client.delete_webhook(token, id, reason).await?,
    };
    Ok(response)
}

async fn edit_message<H: HttpClient>(
    client: &WebhookClient<H>,
    config: &ValidatedConfig,
    args: EditMessageArgs,
) -> Result<HttpResponse, RunError> {
    let token = require_webhook_token(config)?;
    let id = config.webhook.webhook_id.as_str();

    let mut edit = MessageEdit::new();
    if let Some(content) = args.content {
        edit = edit.with_content(content);
    }
    let embeds = parse_json_values(&args.embeds)?;
    if !embeds.is_empty() {
        edit = edit.with_embeds(embeds);
    }
    let attachments = load_attachments(&args.files)?;

    Ok(client
        .edit_webhook_message(token, id, &args.message_id, &edit, attachments)
        .await?)
}

/// Builds execute parameters from command arguments.
///
/// Unset flags stay absent from the payload.
fn execute_params(args: ExecuteArgs) -> Result<ExecuteWebhook, RunError> {
    let mut message = MessagePayload::new();
    if let Some(content) = args.content {
        message = message.with_content(content);
    }
    if let Some(username) = args.username {
        message = message.with_username(username);
    }
    if let Some(avatar_url) = args.avatar_url {
        message = message.with_avatar_url(avatar_url);
    }
    if args.tts {
        message = message.with_tts(true);
    }
    if let Some(flags) = args.flags {
        message = message.with_flags(flags);
    }
    let embeds = parse_json_values(&args.embeds)?;
    if !embeds.is_empty() {
        message = message.with_embeds(embeds);
    }

    Ok(ExecuteWebhook::new(message)
        .with_wait(args.wait)
        .with_attachments(load_attachments(&args.files)?))
}

fn update_data(args: &UpdateArgs) -> WebhookUpdate {
    let mut data = WebhookUpdate::new();
    if let Some(ref name) = args.name {
        data = data.with_name(name);
    }
    if let Some(ref avatar) = args.avatar {
        data = data.with_avatar(avatar);
    }
    if let Some(ref channel_id) = args.channel_id {
        data = data.with_channel_id(channel_id);
    }
    data
}

/// Reads each file into an attachment named after its final path component.
fn load_attachments(paths: &[PathBuf]) -> Result<Vec<Attachment>, RunError> {
    paths
        .iter()
        .map(PathBuf::as_path)
        .map(load_attachment)
        .collect()
}

fn load_attachment(path: &Path) -> Result<Attachment, RunError> {
    let data = std::fs::read(path).map_err(|source| RunError::Attachment {
        path: path.to_path_buf(),
        source,
    })?;

    let filename = path
        .file_name()
        .map_or_else(|| "file".to_string(), |name| name.to_string_lossy().into_owned());

    Ok(Attachment::new(filename, data))
}

/// Logs the status, writes the body to `out`, and fails on non-2xx statuses.
fn report(response: &HttpResponse, out: &mut impl Write) -> Result<(), RunError> {
    tracing::info!(status = %response.status, "Response received");

    if !response.body.is_empty() {
        out.write_all(&response.body)
            .and_then(|()| writeln!(out))
            .and_then(|()| out.flush())
            .map_err(RunError::Output)?;
    }

    if response.is_success() {
        Ok(())
    } else {
        Err(RunError::Unsuccessful {
            status: response.status,
        })
    }
}
