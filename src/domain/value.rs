use std::borrow::Cow;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MessageBird access key, sent as `Authorization: AccessKey <key>`.
///
/// Invariant: non-empty after trimming.
pub struct AccessKey(String);

impl AccessKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "access_key";

    /// Create a validated [`AccessKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender of a message (`originator`).
///
/// Either a telephone number including country code, or an alphanumeric string of at most
/// [`Originator::MAX_ALPHANUMERIC_LEN`] characters. `inbox` selects the Sticky VMN feature.
pub struct Originator(String);

impl Originator {
    /// Wire field name (`originator`).
    pub const FIELD: &'static str = "originator";

    /// Maximum length of an alphanumeric originator.
    pub const MAX_ALPHANUMERIC_LEN: usize = 11;

    /// Create a validated [`Originator`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if is_phone_number(trimmed) {
            return Ok(Self(trimmed.to_owned()));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::OriginatorNotAlphanumeric {
                input: trimmed.to_owned(),
            });
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_ALPHANUMERIC_LEN {
            return Err(ValidationError::OriginatorTooLong {
                max: Self::MAX_ALPHANUMERIC_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated originator.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_phone_number(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`body`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageBody(String);

impl MessageBody {
    /// Wire field name (`body`).
    pub const FIELD: &'static str = "body";

    /// Create a validated message body.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the body as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient MSISDN: digits only, country code included, no leading `+`.
///
/// A leading `+` is accepted on input and stripped. For E.164 normalization of loosely formatted
/// input, parse into [`PhoneNumber`] and convert it into [`Msisdn`].
pub struct Msisdn(String);

impl Msisdn {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "recipient";

    /// Create a validated [`Msisdn`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !is_phone_number(trimmed) {
            return Err(ValidationError::InvalidMsisdn {
                input: trimmed.to_owned(),
            });
        }
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        Ok(Self(digits.to_owned()))
    }

    /// Digits as sent to MessageBird.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Msisdn {
    fn from(value: PhoneNumber) -> Self {
        let digits = value.e164.strip_prefix('+').unwrap_or(value.e164.as_str());
        Self(digits.to_owned())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "phone_number";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server-assigned message id.
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "id";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Contact group id (`groupIds`).
///
/// Invariant: non-empty after trimming.
pub struct GroupId(String);

impl GroupId {
    /// Wire field name (`groupIds`).
    pub const FIELD: &'static str = "groupIds";

    /// Create a validated [`GroupId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated group id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Per-message status report URL (`reportUrl`).
///
/// Invariant: parses as an absolute URL.
pub struct ReportUrl(url::Url);

impl ReportUrl {
    /// Wire field name (`reportUrl`).
    pub const FIELD: &'static str = "reportUrl";

    /// Create a validated [`ReportUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl {
            field: Self::FIELD,
            input: trimmed.to_owned(),
        })?;
        Ok(Self(parsed))
    }

    /// Borrow the URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message class (`mclass`). 1 is a normal message, 0 is a flash message.
///
/// Invariant: `0..=3`.
pub struct MessageClass(u8);

impl MessageClass {
    /// Wire field name (`mclass`).
    pub const FIELD: &'static str = "mclass";

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 3;

    /// Create a validated message class.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::MessageClassOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// `chrono` format pattern used to encode outgoing and decode incoming datetimes.
///
/// The default is the RFC3339 profile MessageBird uses, with a numeric UTC offset
/// (`2020-02-04T19:01:12+00:00`, never `Z`).
pub struct DateFormat(Cow<'static, str>);

impl DateFormat {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "date_format";

    /// RFC3339 with a numeric offset.
    pub const RFC3339: &'static str = "%Y-%m-%dT%H:%M:%S%:z";

    /// The RFC3339 profile MessageBird speaks.
    pub fn rfc3339() -> Self {
        Self(Cow::Borrowed(Self::RFC3339))
    }

    /// Use a custom `chrono` strftime pattern.
    ///
    /// The pattern must contain an offset specifier for parsing to succeed, since decoded values
    /// are `DateTime<FixedOffset>`.
    pub fn custom(pattern: impl Into<String>) -> Result<Self, ValidationError> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ValidationError::InvalidDateFormat { pattern });
        }
        Ok(Self(Cow::Owned(pattern)))
    }

    /// Borrow the pattern.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode a datetime with this pattern.
    pub fn format(&self, value: &DateTime<FixedOffset>) -> String {
        value.format(&self.0).to_string()
    }

    /// Decode a datetime with this pattern.
    pub fn parse(&self, input: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_str(input, &self.0)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::rfc3339()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Whether a message was sent or received.
pub enum MessageDirection {
    /// `mt`: mobile terminated (sent to mobile).
    MobileTerminated,
    /// `mo`: mobile originated (received from mobile).
    MobileOriginated,
}

impl MessageDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MobileTerminated => "mt",
            Self::MobileOriginated => "mo",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "mt" => Self::MobileTerminated,
            "mo" => Self::MobileOriginated,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message type (`type`).
pub enum MessageType {
    Sms,
    Binary,
    Flash,
}

impl MessageType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Binary => "binary",
            Self::Flash => "flash",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "sms" => Self::Sms,
            "binary" => Self::Binary,
            "flash" => Self::Flash,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Character encoding of the message body (`datacoding`).
pub enum Datacoding {
    /// GSM 03.38 characters only.
    Plain,
    /// Contains non-GSM 03.38 characters.
    Unicode,
    /// Let MessageBird pick `plain` or `unicode` based on the body.
    Auto,
}

impl Datacoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Unicode => "unicode",
            Self::Auto => "auto",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "plain" => Self::Plain,
            "unicode" => Self::Unicode,
            "auto" => Self::Auto,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery status of a message for one recipient.
pub enum RecipientStatus {
    Scheduled,
    Sent,
    Buffered,
    Delivered,
    Expired,
    DeliveryFailed,
}

impl RecipientStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Sent => "sent",
            Self::Buffered => "buffered",
            Self::Delivered => "delivered",
            Self::Expired => "expired",
            Self::DeliveryFailed => "delivery_failed",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "scheduled" => Self::Scheduled,
            "sent" => Self::Sent,
            "buffered" => Self::Buffered,
            "delivered" => Self::Delivered,
            "expired" => Self::Expired,
            "delivery_failed" => Self::DeliveryFailed,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Details about a recipient's delivery status (`statusReason`).
pub enum StatusReason {
    SuccessfullyDelivered,
    PendingDlr,
    DlrNotReceived,
    IncorrectNumber,
    UnknownSubscriber,
    Expired,
    Timeout,
    GenericDeliveryFailure,
}

impl StatusReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuccessfullyDelivered => "successfully delivered",
            Self::PendingDlr => "pending DLR",
            Self::DlrNotReceived => "DLR not received",
            Self::IncorrectNumber => "incorrect number",
            Self::UnknownSubscriber => "unknown subscriber",
            Self::Expired => "expired",
            Self::Timeout => "timeout",
            Self::GenericDeliveryFailure => "generic delivery failure",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "successfully delivered" => Self::SuccessfullyDelivered,
            "pending DLR" => Self::PendingDlr,
            "DLR not received" => Self::DlrNotReceived,
            "incorrect number" => Self::IncorrectNumber,
            "unknown subscriber" => Self::UnknownSubscriber,
            "expired" => Self::Expired,
            "timeout" => Self::Timeout,
            "generic delivery failure" => Self::GenericDeliveryFailure,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Error codes MessageBird documents for its REST API.
///
/// The set is closed: an error body carrying any other code fails to decode.
pub enum ApiErrorCode {
    RequestNotAllowed,
    MissingParams,
    InvalidParams,
    NotFound,
    BadRequest,
    NotEnoughBalance,
    ApiNotFound,
    InternalError,
    ServiceUnavailable,
    DuplicateEntry,
    AmbiguousLookup,
}

impl ApiErrorCode {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            2 => Self::RequestNotAllowed,
            9 => Self::MissingParams,
            10 => Self::InvalidParams,
            20 => Self::NotFound,
            21 => Self::BadRequest,
            25 => Self::NotEnoughBalance,
            98 => Self::ApiNotFound,
            99 => Self::InternalError,
            100 => Self::ServiceUnavailable,
            101 => Self::DuplicateEntry,
            102 => Self::AmbiguousLookup,
            _ => return None,
        })
    }

    /// Integer code as sent by MessageBird.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::RequestNotAllowed => 2,
            Self::MissingParams => 9,
            Self::InvalidParams => 10,
            Self::NotFound => 20,
            Self::BadRequest => 21,
            Self::NotEnoughBalance => 25,
            Self::ApiNotFound => 98,
            Self::InternalError => 99,
            Self::ServiceUnavailable => 100,
            Self::DuplicateEntry => 101,
            Self::AmbiguousLookup => 102,
        }
    }
}
