//! Discord webhook client
//!
//! A library for calling the webhook endpoints of the Discord REST API:
//! getting, executing, updating and deleting webhooks, and managing the
//! messages a webhook has sent.

pub mod api;
pub mod config;
pub mod transport;
