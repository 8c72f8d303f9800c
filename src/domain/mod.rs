//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{ListMessages, SendMessage, SendOptions};
pub use response::{
    ApiError, Message, MessageList, MessageListLinks, Price, RecipientItem, RecipientSummary,
};
pub use validation::ValidationError;
pub use value::{
    AccessKey, ApiErrorCode, DateFormat, Datacoding, GroupId, MessageBody, MessageClass,
    MessageDirection, MessageId, MessageType, Msisdn, Originator, PhoneNumber, RecipientStatus,
    ReportUrl, StatusReason,
};
