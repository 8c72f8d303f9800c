use reqwest::Method;

use crate::domain::MessageId;

/// A logical MessageBird REST endpoint: a path under the base URL plus an HTTP verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /messages`
    SendMessage,
    /// `GET /messages`
    ListMessages,
    /// `GET /messages/{id}`
    GetMessage(MessageId),
    /// `DELETE /messages{id}`
    ///
    /// The id is appended without a separating slash. This mirrors the URL the endpoint has
    /// always been built with; it has not been confirmed against the live API.
    DeleteMessage(MessageId),
}

impl Endpoint {
    /// Full URL of this endpoint under `base_url` (no trailing slash expected).
    pub fn url(&self, base_url: &str) -> String {
        match self {
            Self::SendMessage | Self::ListMessages => format!("{base_url}/messages"),
            Self::GetMessage(id) => format!("{base_url}/messages/{}", id.as_str()),
            Self::DeleteMessage(id) => format!("{base_url}/messages{}", id.as_str()),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::SendMessage => Method::POST,
            Self::ListMessages | Self::GetMessage(_) => Method::GET,
            Self::DeleteMessage(_) => Method::DELETE,
        }
    }
}
