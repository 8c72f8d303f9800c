use crate::domain::{
    DateFormat, GroupId, MessageBody, MessageClass, Msisdn, Originator, ReportUrl, SendMessage,
    SendOptions,
};

const RECIPIENTS_FIELD: &str = "recipients";
const TYPE_DETAILS_FIELD: &str = "typeDetails";

/// Encode a send request as form parameters, leaving out every option that is not set.
pub fn encode_send_message_form(
    request: &SendMessage,
    dates: &DateFormat,
) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    params.push((
        Originator::FIELD.to_owned(),
        request.originator().as_str().to_owned(),
    ));
    params.push((MessageBody::FIELD.to_owned(), request.body().as_str().to_owned()));
    if !request.recipients().is_empty() {
        let recipients = request
            .recipients()
            .iter()
            .map(Msisdn::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.push((RECIPIENTS_FIELD.to_owned(), recipients));
    }
    push_options(&mut params, request.options(), dates);

    params
}

fn push_options(params: &mut Vec<(String, String)>, options: &SendOptions, dates: &DateFormat) {
    if !options.group_ids.is_empty() {
        let group_ids = options
            .group_ids
            .iter()
            .map(GroupId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.push((GroupId::FIELD.to_owned(), group_ids));
    }
    if let Some(message_type) = options.message_type {
        params.push(("type".to_owned(), message_type.as_str().to_owned()));
    }
    if let Some(reference) = options.reference.as_ref() {
        params.push(("reference".to_owned(), reference.clone()));
    }
    if let Some(report_url) = options.report_url.as_ref() {
        params.push((ReportUrl::FIELD.to_owned(), report_url.as_str().to_owned()));
    }
    if let Some(validity) = options.validity {
        params.push(("validity".to_owned(), validity.to_string()));
    }
    if let Some(gateway) = options.gateway {
        params.push(("gateway".to_owned(), gateway.to_string()));
    }
    if let Some(type_details) = options.type_details.as_ref() {
        for (key, value) in type_details {
            params.push((format!("{TYPE_DETAILS_FIELD}[{key}]"), value.clone()));
        }
    }
    if let Some(datacoding) = options.datacoding {
        params.push(("datacoding".to_owned(), datacoding.as_str().to_owned()));
    }
    if let Some(mclass) = options.mclass {
        params.push((MessageClass::FIELD.to_owned(), mclass.value().to_string()));
    }
    if let Some(shorten_urls) = options.shorten_urls {
        params.push(("shortenUrls".to_owned(), shorten_urls.to_string()));
    }
    if let Some(scheduled) = options.scheduled_datetime.as_ref() {
        params.push(("scheduledDatetime".to_owned(), dates.format(scheduled)));
    }
    if let Some(created) = options.created_datetime.as_ref() {
        params.push(("createdDatetime".to_owned(), dates.format(created)));
    }
}
