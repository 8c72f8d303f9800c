//! SMS endpoint group.

use crate::client::{ApiClient, Endpoint, MessageBirdError};
use crate::domain::{ListMessages, Message, MessageId, MessageList, SendMessage};

/// SMS routes of the MessageBird REST API, borrowed from a
/// [`MessageBirdClient`](crate::MessageBirdClient) via `client.sms()`.
#[derive(Clone, Copy)]
pub struct SmsRoutes<'a> {
    api: &'a ApiClient,
}

impl<'a> SmsRoutes<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Send (create) an SMS message.
    ///
    /// Only the options set on the request are sent; MessageBird applies its defaults for the
    /// rest. Returns the created message with its server-assigned id and recipient summary.
    ///
    /// Errors:
    /// - [`MessageBirdError::Api`] for any non-200 response (e.g. missing or invalid params),
    /// - [`MessageBirdError::Decode`] when the response body does not match [`Message`].
    pub async fn send(&self, request: SendMessage) -> Result<Message, MessageBirdError> {
        let form = crate::transport::encode_send_message_form(&request, self.api.date_format());
        self.api.send(&Endpoint::SendMessage, Some(form), None).await
    }

    /// Retrieve an inbound or outbound message by id.
    pub async fn get(&self, id: &MessageId) -> Result<Message, MessageBirdError> {
        self.api
            .send(&Endpoint::GetMessage(id.clone()), None, None)
            .await
    }

    /// List inbound and outbound messages matching `filter`.
    ///
    /// Pagination is not followed: use `filter.offset` / `filter.limit` and the returned
    /// [`MessageList::links`] to fetch further pages.
    pub async fn list(&self, filter: ListMessages) -> Result<MessageList, MessageBirdError> {
        let query = crate::transport::encode_list_messages_query(&filter, self.api.date_format());
        self.api
            .send(&Endpoint::ListMessages, None, Some(query.as_str()))
            .await
    }

    /// List scheduled messages (`status=scheduled`).
    pub async fn list_scheduled(&self) -> Result<MessageList, MessageBirdError> {
        self.list(ListMessages::scheduled()).await
    }
}
