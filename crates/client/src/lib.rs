//! Shared types and the HTTP transport used to query a phonebook service.
//!
//! The [`PhonebookApi`] trait is the seam between the query controller and
//! whatever answers searches. [`HttpPhonebook`] is the production
//! implementation; tests substitute in-memory doubles.

mod api;
mod error;
mod http;
mod record;

pub use api::{PhonebookApi, SearchOutcome};
pub use error::{ClientError, FailureKind, RequestFailed};
pub use http::{ClientOptions, DEFAULT_TIMEOUT, HttpPhonebook};
pub use record::ContactRecord;
pub use reqwest::Url;
