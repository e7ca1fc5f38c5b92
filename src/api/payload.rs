//! Message and webhook payloads, and how they are shaped into request bodies.

use serde::Serialize;
use serde_json::Value;

use crate::transport::{Attachment, HttpRequest, MultipartForm};

use super::ApiError;

/// Content of a message sent through a webhook.
///
/// Every field is optional. Absent fields are left out of the encoded
/// JSON rather than sent as defaults. Embeds, components and allowed
/// mentions are carried as JSON values; convert domain types with
/// [`serde_json::to_value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessagePayload {
    /// Message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Overrides the webhook's default username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Overrides the webhook's default avatar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Text-to-speech message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    /// Rich embeds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Value>>,
    /// Allowed mentions object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<Value>,
    /// Message flags bitfield
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    /// Message components (action rows)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Value>>,
}

impl MessagePayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the username override.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the avatar URL override.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Sets the text-to-speech flag.
    #[must_use]
    pub const fn with_tts(mut self, tts: bool) -> Self {
        self.tts = Some(tts);
        self
    }

    /// Sets the embeds.
    #[must_use]
    pub fn with_embeds(mut self, embeds: Vec<Value>) -> Self {
        self.embeds = Some(embeds);
        self
    }

    /// Sets the allowed mentions object.
    #[must_use]
    pub fn with_allowed_mentions(mut self, allowed_mentions: Value) -> Self {
        self.allowed_mentions = Some(allowed_mentions);
        self
    }

    /// Sets the message flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: u64) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Sets the components.
    #[must_use]
    pub fn with_components(mut self, components: Vec<Value>) -> Self {
        self.components = Some(components);
        self
    }
}

/// Fields accepted when editing a webhook message.
///
/// Same omission rule as [`MessagePayload`]. There is no way to clear a
/// message's existing attachments through this type: sending
/// `"attachments": null` is not supported.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageEdit {
    /// New message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New embeds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Value>>,
    /// New allowed mentions object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<Value>,
    /// New components
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Value>>,
}

impl MessageEdit {
    /// Creates an edit that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new message text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the new embeds.
    #[must_use]
    pub fn with_embeds(mut self, embeds: Vec<Value>) -> Self {
        self.embeds = Some(embeds);
        self
    }

    /// Sets the new allowed mentions object.
    #[must_use]
    pub fn with_allowed_mentions(mut self, allowed_mentions: Value) -> Self {
        self.allowed_mentions = Some(allowed_mentions);
        self
    }

    /// Sets the new components.
    #[must_use]
    pub fn with_components(mut self, components: Vec<Value>) -> Self {
        self.components = Some(components);
        self
    }
}

/// Changes to a webhook's settings.
///
/// `channel_id` is only honored on bot-authorized updates; the token
/// variant passes it through and leaves the decision to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookUpdate {
    /// New default name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New default avatar as a data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Channel to move the webhook to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl WebhookUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new avatar.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Sets the target channel.
    #[must_use]
    pub fn with_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }
}

/// Parameters of an execute-webhook call.
///
/// Attachments are always held as one ordered list. The single-file
/// calling convention is accepted through [`ExecuteWebhook::with_legacy_file`],
/// which folds the file into that list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecuteWebhook {
    /// Message content
    pub message: MessagePayload,
    /// Whether the server should respond with the created message
    pub wait: bool,
    /// Files to upload, in field order
    pub attachments: Vec<Attachment>,
}

impl ExecuteWebhook {
    /// Creates execute parameters for `message` with no attachments and `wait=false`.
    #[must_use]
    pub fn new(message: MessagePayload) -> Self {
        Self {
            message,
            wait: false,
            attachments: Vec::new(),
        }
    }

    /// Sets whether to wait for the created message.
    #[must_use]
    pub const fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    /// Sets the files to upload.
    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    /// Sets the files to upload using the single-file calling convention.
    ///
    /// A `file` takes precedence: when both are given, `attachments` is
    /// ignored and the file becomes the only upload.
    #[must_use]
    pub fn with_legacy_file(
        mut self,
        file: Option<Attachment>,
        attachments: Option<Vec<Attachment>>,
    ) -> Self {
        self.attachments = match (file, attachments) {
            (Some(file), _) => vec![file],
            (None, Some(attachments)) => attachments,
            (None, None) => Vec::new(),
        };
        self
    }
}

/// Attaches `payload` to `request` as JSON or as a multipart upload.
///
/// Without attachments the body is the JSON document and the request
/// declares `application/json`. With attachments, each file is a field
/// keyed by its position and the JSON travels in `payload_json`; the
/// content type is left to the transport.
pub(crate) fn with_message_body<P: Serialize>(
    request: HttpRequest,
    payload: &P,
    attachments: Vec<Attachment>,
) -> Result<HttpRequest, ApiError> {
    if attachments.is_empty() {
        let json = serde_json::to_vec(payload)?;
        return Ok(request.with_json_body(json));
    }

    let json = serde_json::to_string(payload)?;
    Ok(request.with_multipart_body(MultipartForm::with_attachments(attachments, json)))
}
