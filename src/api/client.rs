//! Webhook API client.

use url::Url;

use crate::transport::{Attachment, HttpClient, HttpRequest, HttpResponse};

use super::identity::DEFAULT_API_BASE;
use super::{ApiError, ExecuteWebhook, MessageEdit, WebhookUpdate, requests};

/// Client for the webhook endpoints.
///
/// Holds the transport and the API base URL, nothing else: every method
/// builds one request with [`requests`] and hands it to the transport
/// exactly once. Methods take `&self` and may run concurrently.
///
/// Responses come back as-is, including non-2xx statuses. Transport
/// failures are returned unchanged inside [`ApiError::Http`].
///
/// # Type Parameters
///
/// - `H`: The transport implementation
///
/// # Example
///
/// ```no_run
/// use discord_webhook::api::{ExecuteWebhook, MessagePayload, WebhookClient};
/// use discord_webhook::transport::ReqwestClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WebhookClient::new(ReqwestClient::new());
/// let params = ExecuteWebhook::new(MessagePayload::new().with_content("hi")).with_wait(true);
/// let response = client.execute_webhook("token", "123", params).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebhookClient<H> {
    transport: H,
    api_base: Url,
}

impl<H> WebhookClient<H> {
    /// Creates a client targeting [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn new(transport: H) -> Self {
        let api_base = Url::parse(DEFAULT_API_BASE)
            .unwrap_or_else(|e| unreachable!("default API base is valid: {e}"));
        Self::with_api_base(transport, api_base)
    }

    /// Creates a client targeting `api_base` (e.g. a proxy or another API version).
    #[must_use]
    pub const fn with_api_base(transport: H, api_base: Url) -> Self {
        Self {
            transport,
            api_base,
        }
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.transport
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Gets a webhook using a bot token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built or the transport fails.
    pub async fn get_webhook(
        &self,
        bot_token: &str,
        webhook_id: &str,
    ) -> Result<HttpResponse, ApiError> {
        let request = requests::get_webhook(&self.api_base, bot_token, webhook_id)?;
        self.dispatch(request).await
    }

    /// Gets a webhook using its token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built or the transport fails.
    pub async fn get_webhook_with_token(
        &self,
        webhook_token: &str,
        webhook_id: &str,
    ) -> Result<HttpResponse, ApiError> {
        let request = requests::get_webhook_with_token(&self.api_base, webhook_token, webhook_id)?;
        self.dispatch(request).await
    }

    /// Executes a webhook, posting a message with optional attachments.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built or the transport fails.
    pub async fn execute_webhook(
        &self,
        webhook_token: &str,
        webhook_id: &str,
        params: ExecuteWebhook,
    ) -> Result<HttpResponse, ApiError> {
        let request =
            requests::execute_webhook(&self.api_base, webhook_token, webhook_id, params)?;
        self.dispatch(request).await
    }

    /// Updates a webhook using a bot token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built or the transport fails.
    pub async fn update_webhook(
        &self,
        bot_token: &str,
        webhook_id: &str,
        data: &WebhookUpdate,
        reason: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let request =
            requests::update_webhook(&self.api_base, bot_token, webhook_id, data, reason)?;
        self.dispatch(request).await
    }

    /// Updates a webhook using its token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built or the transport fails.
    pub async fn update_webhook_with_token(
        &self,
        webhook_token: &str,
        webhook_id: &str,
        data: &WebhookUpdate,
        reason: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let request = requests::update_webhook_with_token(
            &self.api_base,
            webhook_token,
            webhook_id,
            data,
            reason,
        )?;
        self.dispatch(request).await
    }

    /// Deletes a webhook using a bot token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built or the transport fails.
    pub async fn delete_webhook(
        &self,
        bot_token: &str,
        webhook_id: &str,
        reason: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let request = requests::delete_webhook(&self.api_base, bot_token, webhook_id, reason)?;
        self.dispatch(request).await
    }

    /// Deletes a webhook using its token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built or the transport fails.
    pub async fn delete_webhook_with_token(
        &self,
        webhook_token: &str,
        webhook_id: &str,
        reason: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let request = requests::delete_webhook_with_token(
            &self.api_base,
            webhook_token,
            webhook_id,
            reason,
        )?;
        self.dispatch(request).await
    }

    /// Gets a message sent by the webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built or the transport fails.
    pub async fn get_webhook_message(
        &self,
        webhook_token: &str,
        webhook_id: &str,
        message_id: &str,
    ) -> Result<HttpResponse, ApiError> {
        let request = requests::get_webhook_message(
            &self.api_base,
            webhook_token,
            webhook_id,
            message_id,
        )?;
        self.dispatch(request).await
    }

    /// Edits a message sent by the webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built or the transport fails.
    pub async fn edit_webhook_message(
        &self,
        webhook_token: &str,
        webhook_id: &str,
        message_id: &str,
        edit: &MessageEdit,
        attachments: Vec<Attachment>,
    ) -> Result<HttpResponse, ApiError> {
        let request = requests::edit_webhook_message(
            &self.api_base,
            webhook_token,
            webhook_id,
            message_id,
            edit,
            attachments,
        )?;
        self.dispatch(request).await
    }

    /// Deletes a message sent by the webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built or the transport fails.
    pub async fn delete_webhook_message(
        &self,
        webhook_token: &str,
        webhook_id: &str,
        message_id: &str,
    ) -> Result<HttpResponse, ApiError> {
        let request = requests::delete_webhook_message(
            &self.api_base,
            webhook_token,
            webhook_id,
            message_id,
        )?;
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        // URLs carry webhook tokens; log routing metadata only
        tracing::debug!(
            route = %request.route,
            major = request.major_param.as_deref().unwrap_or("-"),
            method = %request.method,
            "Dispatching webhook request"
        );
        Ok(self.transport.request(request).await?)
    }
}
