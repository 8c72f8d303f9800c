use serde::Deserialize;

use super::message::MessageJson;
use super::{DecodeResponse, TransportError};
use crate::domain::{DateFormat, ListMessages, MessageList, MessageListLinks};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageListJson {
    offset: u32,
    limit: u32,
    count: u32,
    total_count: u32,
    links: LinksJson,
    items: Vec<MessageJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct LinksJson {
    #[serde(default)]
    first: Option<String>,
    #[serde(default)]
    previous: Option<String>,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    last: Option<String>,
}

/// Form-url-encode the filters that are set. Returns an empty string when none are.
pub fn encode_list_messages_query(request: &ListMessages, dates: &DateFormat) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());

    if let Some(originator) = request.originator.as_deref() {
        query.append_pair("originator", originator);
    }
    if let Some(recipient) = request.recipient.as_ref() {
        query.append_pair("recipient", recipient.as_str());
    }
    if let Some(direction) = request.direction {
        query.append_pair("direction", direction.as_str());
    }
    if let Some(limit) = request.limit {
        query.append_pair("limit", &limit.to_string());
    }
    if let Some(offset) = request.offset {
        query.append_pair("offset", &offset.to_string());
    }
    if let Some(searchterm) = request.searchterm.as_deref() {
        query.append_pair("searchterm", searchterm);
    }
    if let Some(message_type) = request.message_type {
        query.append_pair("type", message_type.as_str());
    }
    if let Some(contact_id) = request.contact_id {
        query.append_pair("contact_id", &contact_id.to_string());
    }
    if let Some(status) = request.status {
        query.append_pair("status", status.as_str());
    }
    if let Some(from) = request.from.as_ref() {
        query.append_pair("from", &dates.format(from));
    }
    if let Some(until) = request.until.as_ref() {
        query.append_pair("until", &dates.format(until));
    }

    query.finish()
}

impl DecodeResponse for MessageList {
    fn decode_json(body: &[u8], dates: &DateFormat) -> Result<Self, TransportError> {
        let parsed: MessageListJson = serde_json::from_slice(body)?;
        let items = parsed
            .items
            .into_iter()
            .map(|item| item.into_domain(dates))
            .collect::<Result<Vec<_>, TransportError>>()?;

        Ok(MessageList {
            offset: parsed.offset,
            limit: parsed.limit,
            count: parsed.count,
            total_count: parsed.total_count,
            links: MessageListLinks {
                first: parsed.links.first,
                previous: parsed.links.previous,
                next: parsed.links.next,
                last: parsed.links.last,
            },
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use crate::domain::{
        Datacoding, MessageDirection, MessageType, Msisdn, RecipientStatus, StatusReason,
    };

    use super::*;

    const SAMPLE_MESSAGE_LIST: &str = r#"
    {
        "offset": 0,
        "limit": 20,
        "count": 4,
        "totalCount": 4,
        "links": {
            "first": "https://rest.messagebird.com/messages/?offset=0",
            "previous": null,
            "next": null,
            "last": "https://rest.messagebird.com/messages/?offset=0"
        },
        "items": [
            {
                "id": "436d780b854749b4beca51623d9e2674",
                "href": "https://rest.messagebird.com/messages/436d780b854749b4beca51623d9e2674",
                "direction": "mt",
                "type": "sms",
                "originator": "YourName",
                "body": "This is a test message",
                "reference": null,
                "validity": null,
                "gateway": 10,
                "typeDetails": {},
                "datacoding": "plain",
                "mclass": 1,
                "scheduledDatetime": null,
                "createdDatetime": "2020-02-04T19:01:12+00:00",
                "recipients": {
                    "totalCount": 1,
                    "totalSentCount": 1,
                    "totalDeliveredCount": 0,
                    "totalDeliveryFailedCount": 1,
                    "items": [
                        {
                            "recipient": 31612345678,
                            "originator": null,
                            "status": "delivery_failed",
                            "statusDatetime": "2020-02-04T19:01:12+00:00",
                            "recipientCountry": "Netherlands",
                            "recipientCountryPrefix": 31,
                            "recipientOperator": "",
                            "messageLength": 22,
                            "statusReason": "incorrect number",
                            "price": {
                                "amount": null,
                                "currency": null
                            },
                            "mccmnc": null,
                            "mcc": null,
                            "mnc": null,
                            "messagePartCount": 1
                        }
                    ]
                }
            }
        ]
    }
    "#;

    #[test]
    fn decodes_reference_message_list() {
        let list =
            MessageList::decode_json(SAMPLE_MESSAGE_LIST.as_bytes(), &DateFormat::default())
                .unwrap();

        assert_eq!(list.offset, 0);
        assert_eq!(list.limit, 20);
        assert_eq!(list.count, 4);
        assert_eq!(list.total_count, 4);
        assert_eq!(
            list.links.first.as_deref(),
            Some("https://rest.messagebird.com/messages/?offset=0")
        );
        assert!(list.links.previous.is_none());
        assert!(list.links.next.is_none());
        assert_eq!(list.items.len(), 1);

        let message = &list.items[0];
        assert_eq!(message.id, "436d780b854749b4beca51623d9e2674");
        assert_eq!(message.direction, Some(MessageDirection::MobileTerminated));
        assert_eq!(message.message_type, MessageType::Sms);
        assert_eq!(message.originator.as_deref(), Some("YourName"));
        assert!(message.reference.is_none());
        assert!(message.validity.is_none());
        assert_eq!(message.gateway, Some(10));
        assert!(message.type_details.is_empty());
        assert_eq!(message.datacoding, Datacoding::Plain);
        assert_eq!(message.mclass.value(), 1);
        assert!(message.scheduled_datetime.is_none());
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            message.created_datetime,
            utc.with_ymd_and_hms(2020, 2, 4, 19, 1, 12).unwrap()
        );

        let recipients = &message.recipients;
        assert_eq!(recipients.total_count, 1);
        assert_eq!(recipients.total_sent_count, 1);
        assert_eq!(recipients.total_delivery_failed_count, 1);

        let item = &recipients.items[0];
        assert_eq!(item.recipient, 31_612_345_678);
        assert_eq!(item.status, RecipientStatus::DeliveryFailed);
        assert_eq!(item.status_reason, StatusReason::IncorrectNumber);
        assert_eq!(item.recipient_country.as_deref(), Some("Netherlands"));
        assert_eq!(item.recipient_country_prefix, Some(31));
        assert_eq!(item.recipient_operator.as_deref(), Some(""));
        assert_eq!(item.message_length, 22);
        assert_eq!(item.message_part_count, 1);
        let price = item.price.as_ref().unwrap();
        assert!(price.amount.is_none());
        assert!(price.currency.is_none());
        assert!(item.mccmnc.is_none());
    }

    #[test]
    fn scheduled_filter_encodes_only_status() {
        let query = encode_list_messages_query(&ListMessages::scheduled(), &DateFormat::default());
        assert_eq!(query, "status=scheduled");
    }

    #[test]
    fn empty_filter_encodes_empty_query() {
        let query = encode_list_messages_query(&ListMessages::default(), &DateFormat::default());
        assert_eq!(query, "");
    }

    #[test]
    fn filters_are_form_encoded() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let request = ListMessages {
            originator: Some("Your Name".to_owned()),
            recipient: Some(Msisdn::new("31612345678").unwrap()),
            direction: Some(MessageDirection::MobileOriginated),
            limit: Some(10),
            offset: Some(20),
            contact_id: Some(42),
            from: Some(utc.with_ymd_and_hms(2020, 2, 4, 0, 0, 0).unwrap()),
            ..Default::default()
        };

        let query = encode_list_messages_query(&request, &DateFormat::default());
        assert_eq!(
            query,
            "originator=Your+Name&recipient=31612345678&direction=mo&limit=10&offset=20\
             &contact_id=42&from=2020-02-04T00%3A00%3A00%2B00%3A00"
        );
    }

    #[test]
    fn unknown_enum_in_list_item_fails_whole_list() {
        let json = SAMPLE_MESSAGE_LIST.replace("delivery_failed", "vanished");
        let err =
            MessageList::decode_json(json.as_bytes(), &DateFormat::default()).unwrap_err();
        assert!(matches!(
            err,
            TransportError::UnknownVariant { field: "status", .. }
        ));
    }
}
