//! Webhook addressing.

use url::Url;

use super::ApiError;

/// Default API base, including the version segment.
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v9";

/// Identifies a webhook and how requests against it authenticate.
///
/// With a token, requests address `/webhooks/{id}/{token}` and need no
/// authorization header. Without one, requests address `/webhooks/{id}`
/// and must carry a bot `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookIdentity {
    /// Webhook id (snowflake)
    pub webhook_id: String,
    /// Webhook secret token
    pub webhook_token: Option<String>,
}

impl WebhookIdentity {
    /// Identifies a webhook by id alone (bot-authorized access).
    #[must_use]
    pub fn new(webhook_id: impl Into<String>) -> Self {
        Self {
            webhook_id: webhook_id.into(),
            webhook_token: None,
        }
    }

    /// Identifies a webhook by id and secret token.
    #[must_use]
    pub fn with_token(webhook_id: impl Into<String>, webhook_token: impl Into<String>) -> Self {
        Self {
            webhook_id: webhook_id.into(),
            webhook_token: Some(webhook_token.into()),
        }
    }

    /// Returns true if requests authenticate through the token in the URL.
    #[must_use]
    pub const fn uses_token(&self) -> bool {
        self.webhook_token.is_some()
    }

    /// Builds `{base}/webhooks/{id}[/{token}]`.
    ///
    /// Ids and tokens are percent-encoded as path segments; they are not
    /// otherwise validated.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidApiBase`] if `base` cannot carry a path.
    pub fn url(&self, base: &Url) -> Result<Url, ApiError> {
        self.url_with(base, &[])
    }

    /// Builds `{base}/webhooks/{id}[/{token}]/messages/{message_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidApiBase`] if `base` cannot carry a path.
    pub fn message_url(&self, base: &Url, message_id: &str) -> Result<Url, ApiError> {
        self.url_with(base, &["messages", message_id])
    }

    fn url_with(&self, base: &Url, tail: &[&str]) -> Result<Url, ApiError> {
        let mut url = base.clone();
        url.set_query(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidApiBase {
                    base: base.to_string(),
                })?;
            segments
                .pop_if_empty()
                .extend(["webhooks", self.webhook_id.as_str()]);
            if let Some(token) = &self.webhook_token {
                segments.push(token);
            }
            segments.extend(tail);
        }
        Ok(url)
    }
}
