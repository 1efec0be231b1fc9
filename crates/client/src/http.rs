//! reqwest-backed [`PhonebookApi`] implementation.
//!
//! Searches are issued as `GET <endpoint>?q=<query>`. The service may answer
//! with a bare JSON array of records or with an object carrying a `results`
//! array; both are accepted and returned in server order.

use std::time::Duration;

use async_trait::async_trait;
use log::trace;
use reqwest::Url;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::api::{PhonebookApi, SearchOutcome};
use crate::error::{ClientError, RequestFailed};
use crate::record::ContactRecord;

/// HTTP request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest body excerpt kept in failure details.
const BODY_EXCERPT_LIMIT: usize = 256;

/// Transport settings for [`HttpPhonebook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!("phonebook/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Phonebook search client speaking plain HTTP + JSON.
#[derive(Debug, Clone)]
pub struct HttpPhonebook {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpPhonebook {
    /// Create a client for the search endpoint (e.g. `https://host/search`).
    pub fn new(endpoint: Url, options: ClientOptions) -> Result<Self, ClientError> {
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ClientError::UnsupportedScheme(endpoint.to_string()));
        }

        let mut builder = reqwest::Client::builder().user_agent(options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { endpoint, client })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the request URL for `query`, keeping any query pairs already on
    /// the endpoint.
    #[must_use]
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }
}

#[async_trait]
impl PhonebookApi for HttpPhonebook {
    async fn search(&self, query: &str) -> SearchOutcome {
        let url = self.request_url(query);
        trace!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(RequestFailed::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => excerpt(&body),
                Err(err) => format!("<unreadable: {err}>"),
            };
            return Err(
                RequestFailed::server(format!("server responded with {status}"))
                    .with_detail(format!("status {status}; body: {body}")),
            );
        }

        let body = response
            .bytes()
            .await
            .map_err(RequestFailed::from_transport)?;
        decode_records(&body)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchPayload {
    Records(Vec<ContactRecord>),
    Envelope { results: Vec<ContactRecord> },
}

impl SearchPayload {
    fn into_records(self) -> Vec<ContactRecord> {
        match self {
            Self::Records(records) | Self::Envelope { results: records } => records,
        }
    }
}

fn decode_records(body: &[u8]) -> SearchOutcome {
    serde_json::from_slice::<SearchPayload>(body)
        .map(SearchPayload::into_records)
        .map_err(|err| {
            let text = String::from_utf8_lossy(body);
            RequestFailed::server("unexpected response from server")
                .with_detail(format!("{err}; body: {}", excerpt(&text)))
        })
}

fn excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let mut clipped: String = chars.by_ref().take(BODY_EXCERPT_LIMIT).collect();
    if chars.next().is_some() {
        clipped.push_str("...");
    }
    clipped
}
