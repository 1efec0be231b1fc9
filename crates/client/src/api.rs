use async_trait::async_trait;

use crate::error::RequestFailed;
use crate::record::ContactRecord;

/// Result of a single search: the records in server order, or the failure.
pub type SearchOutcome = Result<Vec<ContactRecord>, RequestFailed>;

/// Anything that can answer a phonebook search.
#[async_trait]
pub trait PhonebookApi: Send + Sync {
    /// Search for contacts matching `query`.
    ///
    /// The query is passed through untouched, including the empty string.
    async fn search(&self, query: &str) -> SearchOutcome;
}
