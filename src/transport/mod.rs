//! Transport layer: HTTP wire-format details (form/query encoding, JSON decoding).

mod api_error;
mod list_messages;
mod message;
mod money;
mod send_message;

pub use api_error::decode_api_error_json;
pub use list_messages::encode_list_messages_query;
pub use send_message::encode_send_message_form;

use crate::domain::{DateFormat, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains unknown {field} value: {value:?}")]
    UnknownVariant { field: &'static str, value: String },

    #[error("response contains unknown error code: {code}")]
    UnknownErrorCode { code: i64 },

    #[error("response contains invalid {field} value: {source}")]
    InvalidValue {
        field: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("response contains invalid {field} datetime {value:?}: {source}")]
    InvalidDatetime {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// A domain type that can be decoded from a successful (HTTP 200) JSON body.
pub trait DecodeResponse: Sized {
    fn decode_json(body: &[u8], dates: &DateFormat) -> Result<Self, TransportError>;
}
