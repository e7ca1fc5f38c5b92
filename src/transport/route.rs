//! Symbolic route keys used for rate-limit bucketing.

use std::fmt;

/// Identifies an endpoint shape independent of the concrete resource ids.
///
/// The dispatcher combines the key with the request's major parameter
/// to pick a rate-limit bucket (see [`RouteKey::bucket`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKey {
    /// `/webhooks/{webhook.id}` and `/webhooks/{webhook.id}/{webhook.token}`
    WebhooksWid,
    /// `/webhooks/{webhook.id}/{webhook.token}/messages/{message.id}` (edit, delete)
    WebhooksWidMessages,
    /// `/webhooks/{webhook.id}/{webhook.token}/messages/{message.id}` (get)
    WebhooksWidMessagesMid,
}

impl RouteKey {
    /// Returns the key's canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WebhooksWid => "webhooks_wid",
            Self::WebhooksWidMessages => "webhooks_wid_messages",
            Self::WebhooksWidMessagesMid => "webhooks_wid_messages_mid",
        }
    }

    /// Returns the bucket identifier for this route and major parameter.
    ///
    /// Requests without a major parameter share the route-wide bucket.
    #[must_use]
    pub fn bucket(self, major_param: Option<&str>) -> String {
        match major_param {
            Some(major) => format!("{}:{major}", self.as_str()),
            None => self.as_str().to_string(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
