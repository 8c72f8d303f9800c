//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod endpoint;
mod sms;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;

use crate::domain::{AccessKey, ApiError, DateFormat, ValidationError};
use crate::transport::DecodeResponse;

pub use endpoint::Endpoint;
pub use sms::SmsRoutes;

const DEFAULT_BASE_URL: &str = "https://rest.messagebird.com";
const AUTHORIZATION_HEADER: &str = "Authorization";
const ACCESS_KEY_SCHEME: &str = "AccessKey";
const SUCCESS_STATUS: u16 = 200;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    form: Option<Vec<(String, String)>>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    /// `None` when the server sent no body at all.
    body: Option<Vec<u8>>,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method, &request.url);
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            if let Some(form) = request.form.as_ref() {
                builder = builder.form(form);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let bytes = response.bytes().await?;
            let body = if bytes.is_empty() {
                None
            } else {
                Some(bytes.to_vec())
            };
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MessageBirdClient`].
///
/// Callers branch on the failure kind:
/// - transport failures (no usable HTTP exchange),
/// - API failures (any non-200 response, decoded into [`ApiError`]),
/// - decode failures (the body did not have the expected shape),
/// - validation failures from domain constructors.
pub enum MessageBirdError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered without a body.
    #[error("no response from MessageBird API for request {url}")]
    NoResponse { url: String },

    /// MessageBird answered with a non-200 status and a structured error body.
    #[error("API error (HTTP {status}): {error}")]
    Api { status: u16, error: ApiError },

    /// Response body could not be decoded into the expected type.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl MessageBirdError {
    /// The structured API error, if this is an [`MessageBirdError::Api`].
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Access key, date format, and HTTP transport shared by every endpoint group.
#[derive(Clone)]
pub(crate) struct ApiClient {
    access_key: AccessKey,
    date_format: DateFormat,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub(crate) fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    /// Execute exactly one request and decode the body into `T`, or into [`ApiError`] when the
    /// status is anything other than 200.
    pub(crate) async fn send<T: DecodeResponse>(
        &self,
        endpoint: &Endpoint,
        form: Option<Vec<(String, String)>>,
        query: Option<&str>,
    ) -> Result<T, MessageBirdError> {
        let mut url = endpoint.url(&self.base_url);
        if let Some(query) = query.filter(|query| !query.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        let method = endpoint.method();
        log::debug!("[MessageBird] >>> {method} {}", without_query(&url));

        let request = HttpRequest {
            method,
            url: url.clone(),
            headers: vec![(
                AUTHORIZATION_HEADER.to_owned(),
                format!("{ACCESS_KEY_SCHEME} {}", self.access_key.as_str()),
            )],
            form,
        };
        let response = self
            .http
            .execute(request)
            .await
            .map_err(MessageBirdError::Transport)?;
        log::debug!(
            "[MessageBird] <<< {} {}",
            response.status,
            without_query(&url)
        );

        let Some(body) = response.body else {
            return Err(MessageBirdError::NoResponse { url });
        };

        if response.status != SUCCESS_STATUS {
            let error = crate::transport::decode_api_error_json(&body)
                .map_err(|err| MessageBirdError::Decode(Box::new(err)))?;
            log::warn!(
                "[MessageBird] {} failed with HTTP {}: {error}",
                without_query(&url),
                response.status
            );
            return Err(MessageBirdError::Api {
                status: response.status,
                error,
            });
        }

        T::decode_json(&body, &self.date_format)
            .map_err(|err| MessageBirdError::Decode(Box::new(err)))
    }
}

/// List filters carry phone numbers; logs only get the path.
fn without_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

#[derive(Debug, Clone)]
/// Builder for [`MessageBirdClient`].
///
/// Use this when you need to customize the base URL, date format, timeout, or user-agent.
pub struct MessageBirdClientBuilder {
    access_key: AccessKey,
    base_url: String,
    date_format: DateFormat,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MessageBirdClientBuilder {
    /// Create a builder with the default base URL and RFC3339 date format.
    pub fn new(access_key: AccessKey) -> Self {
        Self {
            access_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            date_format: DateFormat::default(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (default `https://rest.messagebird.com`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Override the format used to encode and decode datetimes.
    pub fn date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MessageBirdClient`].
    pub fn build(self) -> Result<MessageBirdClient, MessageBirdError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| MessageBirdError::Transport(Box::new(err)))?;

        Ok(MessageBirdClient {
            api: ApiClient {
                access_key: self.access_key,
                date_format: self.date_format,
                base_url: self.base_url,
                http: Arc::new(ReqwestTransport { client }),
            },
        })
    }
}

#[derive(Clone)]
/// High-level MessageBird client.
///
/// Holds the access key and date format used by every request and exposes the endpoint
/// groups. Both settings can be changed at runtime; a change applies to calls started
/// afterwards.
pub struct MessageBirdClient {
    api: ApiClient,
}

impl MessageBirdClient {
    /// Create a client against `https://rest.messagebird.com`.
    ///
    /// For more customization, use [`MessageBirdClient::builder`].
    pub fn new(access_key: AccessKey) -> Self {
        Self {
            api: ApiClient {
                access_key,
                date_format: DateFormat::default(),
                base_url: DEFAULT_BASE_URL.to_owned(),
                http: Arc::new(ReqwestTransport {
                    client: reqwest::Client::new(),
                }),
            },
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(access_key: AccessKey) -> MessageBirdClientBuilder {
        MessageBirdClientBuilder::new(access_key)
    }

    /// SMS message routes.
    pub fn sms(&self) -> SmsRoutes<'_> {
        SmsRoutes::new(&self.api)
    }

    /// Rotate the access key used for subsequent requests.
    pub fn set_access_key(&mut self, access_key: AccessKey) {
        self.api.access_key = access_key;
    }

    /// Replace the date format used for subsequent requests and responses.
    pub fn set_date_format(&mut self, date_format: DateFormat) {
        self.api.date_format = date_format;
    }

    pub fn access_key(&self) -> &AccessKey {
        &self.api.access_key
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.api.date_format
    }

    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }
}
