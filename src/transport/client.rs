//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use http::HeaderValue;
use http::header::USER_AGENT;
use reqwest::multipart::{Form, Part};

use super::{
    FieldValue, HttpClient, HttpError, HttpRequest, HttpResponse, MultipartForm, RequestBody,
};

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`HttpClient`] trait. It performs exactly one exchange per request:
/// no retries and no rate limiting. Every request carries a `User-Agent`
/// unless one was set explicitly on the request.
///
/// # Example
///
/// ```no_run
/// use discord_webhook::transport::{HttpClient, HttpRequest, ReqwestClient, RouteKey};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://discord.com/api/v9/webhooks/123/token")?;
/// let request = HttpRequest::new(RouteKey::WebhooksWid, http::Method::GET, url);
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    user_agent: HeaderValue,
}

impl ReqwestClient {
    /// User agent sent when none is configured.
    pub const DEFAULT_USER_AGENT: &'static str = concat!(
        "DiscordBot (",
        env!("CARGO_PKG_NAME"),
        ", ",
        env!("CARGO_PKG_VERSION"),
        ")"
    );

    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_client(reqwest::Client::new())
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, TLS, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self {
            inner: client,
            user_agent: HeaderValue::from_static(Self::DEFAULT_USER_AGENT),
        }
    }

    /// Creates an HTTP client whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Connection(Box::new(e)))?;
        Ok(Self::from_client(client))
    }

    /// Replaces the default `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: HeaderValue) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Returns the `User-Agent` header value sent with each request.
    #[must_use]
    pub const fn user_agent(&self) -> &HeaderValue {
        &self.user_agent
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts the transport-neutral form into a reqwest form.
fn to_reqwest_form(form: MultipartForm) -> Result<Form, HttpError> {
    form.into_fields()
        .into_iter()
        .try_fold(Form::new(), |acc, field| match field.value {
            FieldValue::Text(text) => Ok(acc.text(field.name, text)),
            FieldValue::File(attachment) => {
                let mut part = Part::bytes(attachment.data).file_name(attachment.filename);
                if let Some(mime) = attachment.content_type {
                    part = part
                        .mime_str(&mime)
                        .map_err(|e| HttpError::InvalidBody(e.to_string()))?;
                }
                Ok(acc.part(field.name, part))
            }
        })
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Build the reqwest request
        let mut builder = self.inner.request(req.method, req.url.as_str());

        if !req.headers.contains_key(USER_AGENT) {
            builder = builder.header(USER_AGENT, &self.user_agent);
        }

        // Add headers
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        // Add body if present
        builder = match req.body {
            Some(RequestBody::Json(bytes)) => builder.body(bytes),
            Some(RequestBody::Multipart(form)) => builder.multipart(to_reqwest_form(form)?),
            None => builder,
        };

        // Send the request
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        // Extract response parts
        let status = response.status();
        tracing::trace!(route = %req.route, %status, "Received response");
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
