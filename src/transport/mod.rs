//! Transport layer for dispatching REST requests.
//!
//! This module provides types and traits for:
//! - Describing a request to dispatch ([`HttpRequest`], [`RequestBody`])
//! - Rate-limit routing metadata ([`RouteKey`])
//! - Multipart payloads with file attachments ([`MultipartForm`], [`Attachment`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting the dispatcher ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod http;
mod multipart;
mod route;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse, RequestBody};
pub use multipart::{Attachment, FieldValue, FormField, MultipartForm};
pub use route::RouteKey;
