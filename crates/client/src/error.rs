use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// User-facing category of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The service could not be reached or did not answer in time.
    Network,
    /// The service answered, but not with a usable result.
    Server,
    Unknown,
}

impl FailureKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Server => "server",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A search that did not produce records.
///
/// `Display` renders only the human-readable message; the diagnostic detail is
/// kept separately so it can be logged without being shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFailed {
    pub kind: FailureKind,
    pub message: String,
    pub detail: Option<String>,
}

impl RequestFailed {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Server, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Unknown, message)
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Classify a transport-level reqwest error.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        let failure = if err.is_timeout() {
            Self::network("request timed out")
        } else if err.is_connect() {
            Self::network("could not reach the phonebook service")
        } else if err.is_request() || err.is_body() {
            Self::network("request failed")
        } else if err.is_decode() {
            Self::server("unexpected response from server")
        } else {
            Self::unknown("request failed")
        };
        failure.with_detail(error_chain(&err))
    }
}

/// Flatten an error and its sources into a single line.
fn error_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Errors raised while constructing a client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("endpoint `{0}` must use http or https")]
    UnsupportedScheme(String),
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_only_the_message() {
        let failure = RequestFailed::network("network unreachable").with_detail("dns: no such host");
        assert_eq!(failure.to_string(), "network unreachable");
        assert_eq!(failure.detail.as_deref(), Some("dns: no such host"));
        assert_eq!(failure.kind.label(), "network");
    }

    #[test]
    fn error_chain_joins_sources() {
        #[derive(Debug, Error)]
        #[error("outer")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::other("inner"));
        assert_eq!(error_chain(&err), "outer: inner");
    }
}
