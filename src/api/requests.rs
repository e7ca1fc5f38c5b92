//! Request builders for the webhook endpoints.
//!
//! Each function maps its arguments to exactly one [`HttpRequest`] and has
//! no side effects. [`WebhookClient`](super::WebhookClient) sends what these
//! return; they are public so callers can inspect or log a request
//! without dispatching it.

use http::Method;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use url::Url;

use crate::transport::{Attachment, HttpRequest, RouteKey};

use super::payload::with_message_body;
use super::{ApiError, ExecuteWebhook, MessageEdit, WebhookIdentity, WebhookUpdate};

/// Header carrying the audit log reason for moderation actions.
pub const AUDIT_LOG_REASON: &str = "x-audit-log-reason";

/// Get a webhook, authorized by bot token.
///
/// # Errors
///
/// Returns an error if the token is not a valid header value or the base is unusable.
pub fn get_webhook(
    base: &Url,
    bot_token: &str,
    webhook_id: &str,
) -> Result<HttpRequest, ApiError> {
    let url = WebhookIdentity::new(webhook_id).url(base)?;
    let request = HttpRequest::new(RouteKey::WebhooksWid, Method::GET, url);
    with_authorization(request, bot_token)
}

/// Get a webhook through its token.
///
/// # Errors
///
/// Returns an error if the base is unusable.
pub fn get_webhook_with_token(
    base: &Url,
    webhook_token: &str,
    webhook_id: &str,
) -> Result<HttpRequest, ApiError> {
    let url = WebhookIdentity::with_token(webhook_id, webhook_token).url(base)?;
    Ok(HttpRequest::new(RouteKey::WebhooksWid, Method::GET, url))
}

/// Execute a webhook, posting a message.
///
/// # Errors
///
/// Returns an error if the message cannot be encoded or the base is unusable.
pub fn execute_webhook(
    base: &Url,
    webhook_token: &str,
    webhook_id: &str,
    params: ExecuteWebhook,
) -> Result<HttpRequest, ApiError> {
    let mut url = WebhookIdentity::with_token(webhook_id, webhook_token).url(base)?;
    url.query_pairs_mut()
        .append_pair("wait", if params.wait { "true" } else { "false" });

    let request =
        HttpRequest::new(RouteKey::WebhooksWid, Method::POST, url).with_major_param(webhook_id);
    with_message_body(request, &params.message, params.attachments)
}

/// Update a webhook, authorized by bot token.
///
/// # Errors
///
/// Returns an error if the data cannot be encoded, a header value is
/// invalid, or the base is unusable.
pub fn update_webhook(
    base: &Url,
    bot_token: &str,
    webhook_id: &str,
    data: &WebhookUpdate,
    reason: Option<&str>,
) -> Result<HttpRequest, ApiError> {
    let identity = WebhookIdentity::new(webhook_id);
    let request = update_request(base, &identity, data, reason)?;
    with_authorization(request, bot_token)
}

/// Update a webhook through its token.
///
/// # Errors
///
/// Returns an error if the data cannot be encoded, the reason is not a
/// valid header value, or the base is unusable.
pub fn update_webhook_with_token(
    base: &Url,
    webhook_token: &str,
    webhook_id: &str,
    data: &WebhookUpdate,
    reason: Option<&str>,
) -> Result<HttpRequest, ApiError> {
    let identity = WebhookIdentity::with_token(webhook_id, webhook_token);
    update_request(base, &identity, data, reason)
}

/// Delete a webhook, authorized by bot token.
///
/// # Errors
///
/// Returns an error if a header value is invalid or the base is unusable.
pub fn delete_webhook(
    base: &Url,
    bot_token: &str,
    webhook_id: &str,
    reason: Option<&str>,
) -> Result<HttpRequest, ApiError> {
    let identity = WebhookIdentity::new(webhook_id);
    let request = delete_request(base, &identity, reason)?;
    with_authorization(request, bot_token)
}

/// Delete a webhook through its token.
///
/// # Errors
///
/// Returns an error if the reason is not a valid header value or the base is unusable.
pub fn delete_webhook_with_token(
    base: &Url,
    webhook_token: &str,
    webhook_id: &str,
    reason: Option<&str>,
) -> Result<HttpRequest, ApiError> {
    let identity = WebhookIdentity::with_token(webhook_id, webhook_token);
    delete_request(base, &identity, reason)
}

/// Get a message previously sent by the webhook.
///
/// # Errors
///
/// Returns an error if the base is unusable.
pub fn get_webhook_message(
    base: &Url,
    webhook_token: &str,
    webhook_id: &str,
    message_id: &str,
) -> Result<HttpRequest, ApiError> {
    let url = message_url(base, webhook_token, webhook_id, message_id)?;
    Ok(
        HttpRequest::new(RouteKey::WebhooksWidMessagesMid, Method::GET, url)
            .with_major_param(webhook_id),
    )
}

/// Edit a message previously sent by the webhook.
///
/// # Errors
///
/// Returns an error if the edit cannot be encoded or the base is unusable.
pub fn edit_webhook_message(
    base: &Url,
    webhook_token: &str,
    webhook_id: &str,
    message_id: &str,
    edit: &MessageEdit,
    attachments: Vec<Attachment>,
) -> Result<HttpRequest, ApiError> {
    let url = message_url(base, webhook_token, webhook_id, message_id)?;
    let request = HttpRequest::new(RouteKey::WebhooksWidMessages, Method::PATCH, url)
        .with_major_param(webhook_id);
    with_message_body(request, edit, attachments)
}

/// Delete a message previously sent by the webhook.
///
/// # Errors
///
/// Returns an error if the base is unusable.
pub fn delete_webhook_message(
    base: &Url,
    webhook_token: &str,
    webhook_id: &str,
    message_id: &str,
) -> Result<HttpRequest, ApiError> {
    let url = message_url(base, webhook_token, webhook_id, message_id)?;
    Ok(
        HttpRequest::new(RouteKey::WebhooksWidMessages, Method::DELETE, url)
            .with_major_param(webhook_id),
    )
}

fn message_url(
    base: &Url,
    webhook_token: &str,
    webhook_id: &str,
    message_id: &str,
) -> Result<Url, ApiError> {
    WebhookIdentity::with_token(webhook_id, webhook_token).message_url(base, message_id)
}

fn update_request(
    base: &Url,
    identity: &WebhookIdentity,
    data: &WebhookUpdate,
    reason: Option<&str>,
) -> Result<HttpRequest, ApiError> {
    let json = serde_json::to_vec(data)?;
    let request = HttpRequest::new(RouteKey::WebhooksWid, Method::PATCH, identity.url(base)?)
        .with_major_param(identity.webhook_id.as_str())
        .with_json_body(json);
    with_reason(request, reason)
}

fn delete_request(
    base: &Url,
    identity: &WebhookIdentity,
    reason: Option<&str>,
) -> Result<HttpRequest, ApiError> {
    let request = HttpRequest::new(RouteKey::WebhooksWid, Method::DELETE, identity.url(base)?)
        .with_major_param(identity.webhook_id.as_str());
    with_reason(request, reason)
}

fn with_authorization(request: HttpRequest, token: &str) -> Result<HttpRequest, ApiError> {
    let mut value = header_value("authorization", token)?;
    value.set_sensitive(true);
    Ok(request.with_header(AUTHORIZATION, value))
}

fn with_reason(request: HttpRequest, reason: Option<&str>) -> Result<HttpRequest, ApiError> {
    let Some(reason) = reason else {
        return Ok(request);
    };
    let value = header_value(AUDIT_LOG_REASON, reason)?;
    Ok(request.with_header(HeaderName::from_static(AUDIT_LOG_REASON), value))
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|source| ApiError::InvalidHeader { name, source })
}
