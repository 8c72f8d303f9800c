use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    Datacoding, GroupId, MessageBody, MessageClass, MessageDirection, MessageType, Msisdn,
    Originator, RecipientStatus, ReportUrl,
};

/// Optional fields of a send request. Every `None` (or empty collection) is left out of the
/// payload entirely so MessageBird applies its own default.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Contact groups to send to. When non-empty, `recipients` may be empty.
    pub group_ids: Vec<GroupId>,
    pub message_type: Option<MessageType>,
    /// Client reference. Required for status report webhooks to be sent.
    pub reference: Option<String>,
    pub report_url: Option<ReportUrl>,
    /// Seconds the message stays valid before it is discarded.
    pub validity: Option<u32>,
    /// SMS route used to send the message.
    pub gateway: Option<u32>,
    /// Extra information for binary messages, sent as `typeDetails[key]=value`.
    pub type_details: Option<BTreeMap<String, String>>,
    pub datacoding: Option<Datacoding>,
    pub mclass: Option<MessageClass>,
    /// Shorten all URLs present in the body.
    pub shorten_urls: Option<bool>,
    pub scheduled_datetime: Option<DateTime<FixedOffset>>,
    pub created_datetime: Option<DateTime<FixedOffset>>,
}

/// A validated request to create (send) a message.
#[derive(Debug, Clone)]
pub struct SendMessage {
    originator: Originator,
    body: MessageBody,
    recipients: Vec<Msisdn>,
    options: SendOptions,
}

impl SendMessage {
    /// Build a send request.
    ///
    /// Fails with [`ValidationError::Empty`] when there are neither recipients nor group ids.
    pub fn new(
        originator: Originator,
        body: MessageBody,
        recipients: Vec<Msisdn>,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() && options.group_ids.is_empty() {
            return Err(ValidationError::Empty {
                field: Msisdn::FIELD,
            });
        }
        Ok(Self {
            originator,
            body,
            recipients,
            options,
        })
    }

    pub fn originator(&self) -> &Originator {
        &self.originator
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn recipients(&self) -> &[Msisdn] {
        &self.recipients
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// Filters for listing messages. Only fields that are set end up in the query string.
#[derive(Debug, Clone, Default)]
pub struct ListMessages {
    pub originator: Option<String>,
    pub recipient: Option<Msisdn>,
    pub direction: Option<MessageDirection>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Matches against recipient and originator.
    pub searchterm: Option<String>,
    pub message_type: Option<MessageType>,
    pub contact_id: Option<u64>,
    pub status: Option<RecipientStatus>,
    pub from: Option<DateTime<FixedOffset>>,
    pub until: Option<DateTime<FixedOffset>>,
}

impl ListMessages {
    /// Filter that only matches scheduled messages.
    pub fn scheduled() -> Self {
        Self {
            status: Some(RecipientStatus::Scheduled),
            ..Default::default()
        }
    }
}
