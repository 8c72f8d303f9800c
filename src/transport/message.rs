use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::money::TransportMoney;
use super::{DecodeResponse, TransportError};
use crate::domain::{
    DateFormat, Datacoding, Message, MessageClass, MessageDirection, MessageType, Price,
    RecipientItem, RecipientStatus, RecipientSummary, StatusReason,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MessageJson {
    id: String,
    href: String,
    #[serde(default)]
    direction: Option<String>,
    #[serde(rename = "type")]
    message_type: String,
    #[serde(default)]
    originator: Option<String>,
    body: String,
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    report_url: Option<String>,
    #[serde(default)]
    validity: Option<u32>,
    #[serde(default)]
    gateway: Option<u32>,
    type_details: BTreeMap<String, String>,
    datacoding: String,
    mclass: u8,
    #[serde(default)]
    scheduled_datetime: Option<String>,
    created_datetime: String,
    recipients: RecipientSummaryJson,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipientSummaryJson {
    total_count: u32,
    total_sent_count: u32,
    total_delivered_count: u32,
    total_delivery_failed_count: u32,
    items: Vec<RecipientItemJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipientItemJson {
    recipient: u64,
    status: String,
    status_datetime: String,
    message_part_count: u32,
    #[serde(default)]
    recipient_country: Option<String>,
    #[serde(default)]
    recipient_country_prefix: Option<u32>,
    #[serde(default)]
    recipient_operator: Option<String>,
    message_length: u32,
    status_reason: String,
    #[serde(default)]
    price: Option<PriceJson>,
    #[serde(default)]
    mccmnc: Option<String>,
    #[serde(default)]
    mcc: Option<String>,
    #[serde(default)]
    mnc: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PriceJson {
    #[serde(default)]
    amount: Option<TransportMoney>,
    #[serde(default)]
    currency: Option<String>,
}

impl MessageJson {
    pub(super) fn into_domain(self, dates: &DateFormat) -> Result<Message, TransportError> {
        let direction = self
            .direction
            .map(|value| wire_enum("direction", value, MessageDirection::from_wire))
            .transpose()?;
        let scheduled_datetime = self
            .scheduled_datetime
            .map(|value| datetime(dates, "scheduledDatetime", value))
            .transpose()?;

        Ok(Message {
            id: self.id,
            href: self.href,
            direction,
            message_type: wire_enum("type", self.message_type, MessageType::from_wire)?,
            originator: self.originator,
            body: self.body,
            reference: self.reference,
            report_url: self.report_url,
            validity: self.validity,
            gateway: self.gateway,
            type_details: self.type_details,
            datacoding: wire_enum("datacoding", self.datacoding, Datacoding::from_wire)?,
            mclass: MessageClass::new(self.mclass).map_err(|source| {
                TransportError::InvalidValue {
                    field: MessageClass::FIELD,
                    source,
                }
            })?,
            scheduled_datetime,
            created_datetime: datetime(dates, "createdDatetime", self.created_datetime)?,
            recipients: self.recipients.into_domain(dates)?,
        })
    }
}

impl RecipientSummaryJson {
    fn into_domain(self, dates: &DateFormat) -> Result<RecipientSummary, TransportError> {
        let items = self
            .items
            .into_iter()
            .map(|item| item.into_domain(dates))
            .collect::<Result<Vec<_>, TransportError>>()?;

        Ok(RecipientSummary {
            total_count: self.total_count,
            total_sent_count: self.total_sent_count,
            total_delivered_count: self.total_delivered_count,
            total_delivery_failed_count: self.total_delivery_failed_count,
            items,
        })
    }
}

impl RecipientItemJson {
    fn into_domain(self, dates: &DateFormat) -> Result<RecipientItem, TransportError> {
        Ok(RecipientItem {
            recipient: self.recipient,
            status: wire_enum("status", self.status, RecipientStatus::from_wire)?,
            status_datetime: datetime(dates, "statusDatetime", self.status_datetime)?,
            message_part_count: self.message_part_count,
            recipient_country: self.recipient_country,
            recipient_country_prefix: self.recipient_country_prefix,
            recipient_operator: self.recipient_operator,
            message_length: self.message_length,
            status_reason: wire_enum("statusReason", self.status_reason, StatusReason::from_wire)?,
            price: self.price.map(|price| Price {
                amount: price.amount.map(TransportMoney::into_string),
                currency: price.currency,
            }),
            mccmnc: self.mccmnc,
            mcc: self.mcc,
            mnc: self.mnc,
        })
    }
}

impl DecodeResponse for Message {
    fn decode_json(body: &[u8], dates: &DateFormat) -> Result<Self, TransportError> {
        let parsed: MessageJson = serde_json::from_slice(body)?;
        parsed.into_domain(dates)
    }
}

fn wire_enum<T>(
    field: &'static str,
    value: String,
    from_wire: fn(&str) -> Option<T>,
) -> Result<T, TransportError> {
    from_wire(&value).ok_or(TransportError::UnknownVariant { field, value })
}

fn datetime(
    dates: &DateFormat,
    field: &'static str,
    value: String,
) -> Result<DateTime<FixedOffset>, TransportError> {
    dates
        .parse(&value)
        .map_err(|source| TransportError::InvalidDatetime {
            field,
            value,
            source,
        })
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;

    const CREATED_MESSAGE: &str = r#"
    {
      "id": "e8077d803532c0b5937c639b60216938",
      "href": "https://rest.messagebird.com/messages/e8077d803532c0b5937c639b60216938",
      "direction": "mt",
      "type": "binary",
      "originator": "YourName",
      "body": "This is a test message",
      "reference": "ref-1",
      "reportUrl": "https://example.com/status",
      "validity": 3600,
      "gateway": 10,
      "typeDetails": {"udh": "050003340201"},
      "datacoding": "unicode",
      "mclass": 1,
      "scheduledDatetime": "2030-01-02T10:00:00+01:00",
      "createdDatetime": "2029-12-31T08:30:00+00:00",
      "recipients": {
        "totalCount": 2,
        "totalSentCount": 2,
        "totalDeliveredCount": 0,
        "totalDeliveryFailedCount": 0,
        "items": [
          {
            "recipient": 31612345678,
            "status": "scheduled",
            "statusDatetime": "2029-12-31T08:30:00+00:00",
            "messagePartCount": 1,
            "messageLength": 22,
            "statusReason": "pending DLR",
            "price": {"amount": 0.070, "currency": "EUR"},
            "mccmnc": "20408",
            "mcc": "204",
            "mnc": "08"
          },
          {
            "recipient": 31687654321,
            "status": "buffered",
            "statusDatetime": "2029-12-31T08:30:01+00:00",
            "messagePartCount": 1,
            "messageLength": 22,
            "statusReason": "pending DLR"
          }
        ]
      }
    }
    "#;

    #[test]
    fn decodes_message_with_every_optional_field() {
        let message = Message::decode_json(CREATED_MESSAGE.as_bytes(), &DateFormat::default())
            .unwrap();

        assert_eq!(message.id, "e8077d803532c0b5937c639b60216938");
        assert_eq!(message.direction, Some(MessageDirection::MobileTerminated));
        assert_eq!(message.message_type, MessageType::Binary);
        assert_eq!(message.reference.as_deref(), Some("ref-1"));
        assert_eq!(message.report_url.as_deref(), Some("https://example.com/status"));
        assert_eq!(message.validity, Some(3600));
        assert_eq!(message.gateway, Some(10));
        assert_eq!(
            message.type_details.get("udh").map(String::as_str),
            Some("050003340201")
        );
        assert_eq!(message.datacoding, Datacoding::Unicode);
        assert_eq!(message.mclass, MessageClass::new(1).unwrap());

        let plus_one = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            message.scheduled_datetime,
            Some(plus_one.with_ymd_and_hms(2030, 1, 2, 10, 0, 0).unwrap())
        );
        assert_eq!(message.scheduled_datetime.unwrap().offset(), &plus_one);

        let recipients = &message.recipients;
        assert_eq!(recipients.total_count, 2);
        assert_eq!(recipients.items.len(), 2);

        let first = &recipients.items[0];
        assert_eq!(first.status, RecipientStatus::Scheduled);
        assert_eq!(first.status_reason, StatusReason::PendingDlr);
        assert_eq!(
            first.price,
            Some(Price {
                amount: Some("0.070".to_owned()),
                currency: Some("EUR".to_owned()),
            })
        );
        assert_eq!(first.mnc.as_deref(), Some("08"));

        let second = &recipients.items[1];
        assert_eq!(second.status, RecipientStatus::Buffered);
        assert!(second.price.is_none());
        assert!(second.recipient_country.is_none());
    }

    #[test]
    fn unknown_recipient_status_fails_cleanly() {
        let json = CREATED_MESSAGE.replace(r#""status": "buffered""#, r#""status": "lost""#);
        let err = Message::decode_json(json.as_bytes(), &DateFormat::default()).unwrap_err();
        match err {
            TransportError::UnknownVariant { field, value } => {
                assert_eq!(field, "status");
                assert_eq!(value, "lost");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_status_reason_fails_cleanly() {
        let json = CREATED_MESSAGE.replacen(
            r#""statusReason": "pending DLR""#,
            r#""statusReason": "carrier on holiday""#,
            1,
        );
        let err = Message::decode_json(json.as_bytes(), &DateFormat::default()).unwrap_err();
        assert!(matches!(
            err,
            TransportError::UnknownVariant {
                field: "statusReason",
                ..
            }
        ));
    }

    #[test]
    fn malformed_timestamp_reports_field() {
        let json = CREATED_MESSAGE.replace(
            r#""createdDatetime": "2029-12-31T08:30:00+00:00""#,
            r#""createdDatetime": "2029-12-31 08:30""#,
        );
        let err = Message::decode_json(json.as_bytes(), &DateFormat::default()).unwrap_err();
        assert!(matches!(
            err,
            TransportError::InvalidDatetime {
                field: "createdDatetime",
                ..
            }
        ));
    }

    #[test]
    fn missing_required_field_is_a_json_error() {
        let json = CREATED_MESSAGE.replace(r#""mclass": 1,"#, "");
        let err = Message::decode_json(json.as_bytes(), &DateFormat::default()).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn mclass_out_of_range_is_rejected() {
        let json = CREATED_MESSAGE.replace(r#""mclass": 1,"#, r#""mclass": 9,"#);
        let err = Message::decode_json(json.as_bytes(), &DateFormat::default()).unwrap_err();
        assert!(matches!(
            err,
            TransportError::InvalidValue {
                field: "mclass",
                source: crate::domain::ValidationError::MessageClassOutOfRange { actual: 9, .. },
            }
        ));
    }

    #[test]
    fn string_price_amount_is_rejected() {
        let json = CREATED_MESSAGE.replace(r#""amount": 0.070"#, r#""amount": "free""#);
        let err = Message::decode_json(json.as_bytes(), &DateFormat::default()).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn zulu_offset_is_not_a_numeric_offset() {
        let json = CREATED_MESSAGE.replace(
            r#""createdDatetime": "2029-12-31T08:30:00+00:00""#,
            r#""createdDatetime": "2029-12-31T08:30:00Z""#,
        );
        let err = Message::decode_json(json.as_bytes(), &DateFormat::default()).unwrap_err();
        match err {
            TransportError::InvalidDatetime { field, value, .. } => {
                assert_eq!(field, "createdDatetime");
                assert_eq!(value, "2029-12-31T08:30:00Z");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
