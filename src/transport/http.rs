//! HTTP request/response types and client trait.

use super::{HttpError, MultipartForm, RouteKey};

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// A JSON document, already encoded
    Json(Vec<u8>),
    /// Multipart form; the client generates the boundary and `Content-Type`
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Returns the encoded JSON bytes, if this is a JSON body.
    #[must_use]
    pub fn as_json(&self) -> Option<&[u8]> {
        match self {
            Self::Json(bytes) => Some(bytes),
            Self::Multipart(_) => None,
        }
    }

    /// Returns the multipart form, if this is a multipart body.
    #[must_use]
    pub const fn as_multipart(&self) -> Option<&MultipartForm> {
        match self {
            Self::Json(_) => None,
            Self::Multipart(form) => Some(form),
        }
    }
}

/// A request to be dispatched.
///
/// This is a value type that fully describes one API call: the routing
/// metadata a dispatcher needs for rate-limit bucketing, plus the HTTP
/// method, URL, headers and body. It uses standard `http` crate types
/// for method and headers, ensuring compatibility with the broader ecosystem.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Symbolic endpoint shape
    pub route: RouteKey,
    /// Resource id grouping the request into a rate-limit bucket
    pub major_param: Option<String>,
    /// HTTP method (GET, POST, PATCH, DELETE, etc.)
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Creates a new request for the given route, method and URL.
    ///
    /// Headers are initialized to an empty map, body and major parameter are `None`.
    #[must_use]
    pub fn new(route: RouteKey, method: http::Method, url: url::Url) -> Self {
        Self {
            route,
            major_param: None,
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the major parameter used for rate-limit bucketing.
    #[must_use]
    pub fn with_major_param(mut self, major_param: impl Into<String>) -> Self {
        self.major_param = Some(major_param.into());
        self
    }

    /// Sets a JSON body and declares the JSON content type.
    #[must_use]
    pub fn with_json_body(mut self, body: Vec<u8>) -> Self {
        self.headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Sets a multipart body.
    ///
    /// No `Content-Type` header is added; the client derives it from the
    /// boundary it generates.
    #[must_use]
    pub fn with_multipart_body(mut self, form: MultipartForm) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended
    /// (HTTP headers can have multiple values).
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Returns the rate-limit bucket this request belongs to.
    #[must_use]
    pub fn bucket(&self) -> String {
        self.route.bucket(self.major_param.as_deref())
    }
}

/// An HTTP response received from a server.
///
/// Contains the status code, headers, and body of the response.
/// The body is fully buffered into memory.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for dispatching requests.
///
/// # Design
///
/// This trait is the seam between request construction and transport.
/// Implementations own connection handling and any rate-limit or retry
/// policy; the webhook API layer only describes requests. It enables:
/// - Dependency injection for testing with mock clients
/// - Swapping HTTP libraries without changing calling code
/// - Adding cross-cutting concerns (logging, bucketing) via decorators
///
/// # Example
///
/// ```ignore
/// use discord_webhook::transport::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct MockClient {
///     response: HttpResponse,
/// }
///
/// impl HttpClient for MockClient {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends a request and returns the response.
    ///
    /// Non-2xx statuses are returned as `Ok`; interpreting them is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    /// - The body cannot be encoded ([`HttpError::InvalidBody`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
