use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::domain::value::{
    ApiErrorCode, Datacoding, MessageClass, MessageDirection, MessageType, RecipientStatus,
    StatusReason,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub href: String,
    pub direction: Option<MessageDirection>,
    pub message_type: MessageType,
    pub originator: Option<String>,
    pub body: String,
    pub reference: Option<String>,
    pub report_url: Option<String>,
    pub validity: Option<u32>,
    pub gateway: Option<u32>,
    pub type_details: BTreeMap<String, String>,
    pub datacoding: Datacoding,
    pub mclass: MessageClass,
    pub scheduled_datetime: Option<DateTime<FixedOffset>>,
    pub created_datetime: DateTime<FixedOffset>,
    pub recipients: RecipientSummary,
}

/// Recipient counters plus per-recipient records.
///
/// The counters overlap (`total_sent_count` includes buffered messages), so they do not
/// add up to `total_count`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientSummary {
    pub total_count: u32,
    pub total_sent_count: u32,
    pub total_delivered_count: u32,
    pub total_delivery_failed_count: u32,
    pub items: Vec<RecipientItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipientItem {
    pub recipient: u64,
    pub status: RecipientStatus,
    pub status_datetime: DateTime<FixedOffset>,
    pub message_part_count: u32,
    pub recipient_country: Option<String>,
    pub recipient_country_prefix: Option<u32>,
    pub recipient_operator: Option<String>,
    pub message_length: u32,
    pub status_reason: StatusReason,
    pub price: Option<Price>,
    pub mccmnc: Option<String>,
    pub mcc: Option<String>,
    pub mnc: Option<String>,
}

/// Billing information. Both parts stay `None` until the message is billed.
///
/// `amount` keeps the decimal token exactly as MessageBird sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub amount: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageList {
    pub offset: u32,
    pub limit: u32,
    pub count: u32,
    pub total_count: u32,
    pub links: MessageListLinks,
    pub items: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageListLinks {
    pub first: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

/// Structured error body returned with any non-200 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub description: String,
    /// Request parameter the error relates to, if it is parameter specific.
    pub parameter: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.description, self.code.as_i32())?;
        if let Some(parameter) = self.parameter.as_deref() {
            write!(f, " [parameter: {parameter}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
