//! Controller Layer - Transport Seam
//!
//! Abstract interface to the backend collection. The REST client is the
//! production implementation; tests substitute in-memory doubles.

use async_trait::async_trait;

use crate::domain::Record;
use crate::error::SyncResult;

/// Backend operations over one record collection
///
/// Generic over any Record type; operations map one-to-one onto the
/// backend's REST surface. All operations are async and single-shot;
/// retrying a failed attempt is a caller decision.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Read the full collection, optionally constrained by category
    async fn list(&self, filter: Option<&str>) -> SyncResult<Vec<R>>;

    /// Fetch a single record; None when the id is unknown
    async fn find(&self, id: &str) -> SyncResult<Option<R>>;

    /// Distinct category values for dropdown and autocomplete use
    ///
    /// Backends without a category listing keep the default empty answer;
    /// the controller then derives categories from the loaded collection.
    async fn categories(&self) -> SyncResult<Vec<String>> {
        Ok(Vec::new())
    }

    /// Create a record from a draft; returns the server's materialization
    async fn create(&self, draft: &R::Draft) -> SyncResult<R>;

    /// Replace the identified record with the draft's fields
    ///
    /// Full-record update, not a patch. The response body is not
    /// surfaced: backends disagree on its shape, so callers resync
    /// instead of trusting it.
    async fn update(&self, id: &str, draft: &R::Draft) -> SyncResult<()>;

    /// Delete the identified record
    async fn delete(&self, id: &str) -> SyncResult<()>;
}
