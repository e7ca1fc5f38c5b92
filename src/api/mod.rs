//! Webhook resource of the Discord REST API.
//!
//! This module provides:
//! - Webhook addressing and endpoint URLs ([`WebhookIdentity`])
//! - Message and webhook payloads ([`MessagePayload`], [`MessageEdit`], [`WebhookUpdate`])
//! - Execute parameters with attachment normalization ([`ExecuteWebhook`])
//! - Pure request builders, one per operation ([`requests`])
//! - The client issuing one transport call per operation ([`WebhookClient`])
//!
//! Request construction never retries, validates ids, or interprets
//! response statuses; transport failures surface unchanged as [`ApiError::Http`].

mod client;
mod error;
mod identity;
mod payload;
pub mod requests;


pub use client::WebhookClient;
pub use error::ApiError;
pub use identity::{DEFAULT_API_BASE, WebhookIdentity};
pub use payload::{ExecuteWebhook, MessageEdit, MessagePayload, WebhookUpdate};
