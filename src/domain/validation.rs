use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidMsisdn { input: String },
    OriginatorTooLong { max: usize, actual: usize },
    OriginatorNotAlphanumeric { input: String },
    InvalidUrl { field: &'static str, input: String },
    MessageClassOutOfRange { min: u8, max: u8, actual: u8 },
    InvalidDateFormat { pattern: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidMsisdn { input } => write!(f, "invalid msisdn: {input}"),
            Self::OriginatorTooLong { max, actual } => {
                write!(
                    f,
                    "alphanumeric originator too long: {actual} characters (max {max})"
                )
            }
            Self::OriginatorNotAlphanumeric { input } => {
                write!(f, "originator must be a phone number or alphanumeric: {input}")
            }
            Self::InvalidUrl { field, input } => write!(f, "{field} is not a valid URL: {input}"),
            Self::MessageClassOutOfRange { min, max, actual } => {
                write!(
                    f,
                    "message class out of range: {actual} (expected {min}..={max})"
                )
            }
            Self::InvalidDateFormat { pattern } => write!(f, "invalid date format: {pattern}"),
        }
    }
}

impl std::error::Error for ValidationError {}
