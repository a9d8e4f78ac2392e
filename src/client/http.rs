//! HTTP implementation of [`RosterApi`] on top of `reqwest`.

use super::{require_mutation_args, ClientError, MutationReceipt, RosterApi};
use crate::config::ApiConfig;
use crate::roster::Roster;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;
use url::Url;

/// Characters left bare in a query component; everything else is percent-encoded.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Roster client speaking JSON over HTTP.
#[derive(Clone, Debug)]
pub struct HttpRosterClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpRosterClient {
    /// Create a client for the service at `base_url`; every request is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Validation(format!("invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Validation(format!("base URL '{}' cannot carry a path", base_url)));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::new(&config.base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{segments...}[?email=...]` with every piece percent-encoded.
    fn endpoint(&self, segments: &[&str], email: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| ClientError::Validation(format!("base URL '{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        if let Some(email) = email {
            url.set_query(Some(&format!("email={}", utf8_percent_encode(email, QUERY_COMPONENT))));
        }
        Ok(url)
    }

    async fn send(&self, method: Method, url: Url) -> Result<Response, ClientError> {
        log::debug!("{} {}", method, url);
        self.http.request(method, url).send().await.map_err(transport_error)
    }

    async fn mutate(&self, method: Method, activity: &str, action: &str, email: &str) -> Result<MutationReceipt, ClientError> {
        require_mutation_args(activity, email)?;
        let url = self.endpoint(&["activities", activity, action], Some(email))?;
        let response = self.send(method, url).await?;
        let body: Value = read_response(response).await?;
        Ok(receipt_from(&body))
    }
}

#[async_trait]
impl RosterApi for HttpRosterClient {
    async fn list_activities(&self) -> Result<Roster, ClientError> {
        let url = self.endpoint(&["activities"], None)?;
        let response = self.send(Method::GET, url).await?;
        let roster: Roster = read_response(response).await?;
        log::debug!("Fetched {} activities", roster.len());
        Ok(roster)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationReceipt, ClientError> {
        self.mutate(Method::POST, activity, "signup", email).await
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<MutationReceipt, ClientError> {
        self.mutate(Method::DELETE, activity, "participants", email).await
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Transport(format!("request timed out: {}", err))
    } else if err.is_connect() {
        ClientError::Transport(format!("could not connect: {}", err))
    } else {
        ClientError::Transport(err.to_string())
    }
}

/// A 2xx answer confirms the mutation; the body only contributes an optional message.
fn receipt_from(body: &Value) -> MutationReceipt {
    let message = body.get("message").and_then(Value::as_str).unwrap_or_default();
    MutationReceipt {
        message: message.to_string(),
    }
}

/// Decode a success body as `T`, or turn an error status into a typed error.
///
/// A non-2xx answer is a [`ClientError::Remote`] only when its body is a JSON
/// object; anything else is a transport failure.
async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await.map_err(transport_error)?;

    if status.is_success() {
        return serde_json::from_slice(&body)
            .map_err(|e| ClientError::Transport(format!("malformed response body: {}", e)));
    }

    match serde_json::from_slice::<Map<String, Value>>(&body) {
        Ok(error_body) => {
            let detail = ["detail", "message"]
                .iter()
                .find_map(|key| error_body.get(*key).and_then(Value::as_str))
                .map(str::to_string);
            Err(ClientError::Remote {
                status: status.as_u16(),
                detail,
            })
        }
        Err(_) => Err(ClientError::Transport(format!(
            "HTTP {} without a decodable error body",
            status.as_u16()
        ))),
    }
}
