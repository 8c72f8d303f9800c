//! Typed async Rust client for the MessageBird SMS REST API.
//!
//! The crate is layered the same way throughout: a domain layer of strong types, a transport
//! layer for wire-format quirks (form bodies, bracketed `typeDetails[key]` fields, RFC3339 dates
//! with numeric offsets), and a small client layer that executes one request per call.
//!
//! ```rust,no_run
//! use messagebird::{
//!     AccessKey, MessageBirdClient, MessageBody, Msisdn, Originator, SendMessage, SendOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), messagebird::MessageBirdError> {
//!     let client = MessageBirdClient::new(AccessKey::new("...")?);
//!     let request = SendMessage::new(
//!         Originator::new("YourName")?,
//!         MessageBody::new("This is a test message")?,
//!         vec![Msisdn::new("31612345678")?],
//!         SendOptions::default(),
//!     )?;
//!     let message = client.sms().send(request).await?;
//!     println!("created {}", message.id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Endpoint, MessageBirdClient, MessageBirdClientBuilder, MessageBirdError, SmsRoutes,
};
pub use domain::{
    AccessKey, ApiError, ApiErrorCode, DateFormat, Datacoding, GroupId, ListMessages, Message,
    MessageBody, MessageClass, MessageDirection, MessageId, MessageList, MessageListLinks,
    MessageType, Msisdn, Originator, PhoneNumber, Price, RecipientItem, RecipientStatus,
    RecipientSummary, ReportUrl, SendMessage, SendOptions, StatusReason, ValidationError,
};
