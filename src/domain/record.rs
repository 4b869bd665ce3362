//! Domain Layer - Core Record Traits
//!
//! Contracts every synchronized record variant satisfies. The controller
//! and the REST client are generic over these, so expense- and task-style
//! collections share one synchronization path.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SyncResult;

/// In-progress form values for a create or update submission
///
/// Holds exactly the client-editable fields: server-assigned fields
/// (identifier, creation timestamp) never appear in a draft.
pub trait RecordDraft: Clone + Default + Send + Sync + Serialize + 'static {
    /// Check that required fields are present
    ///
    /// Presence only; content rules (e.g. amount positivity) belong to
    /// the server and come back as rejections.
    fn validate(&self) -> SyncResult<()>;
}

/// Core trait for synchronized domain records
pub trait Record: Clone + Send + Sync + DeserializeOwned + 'static {
    /// Form-buffer shape submitted on create and update
    type Draft: RecordDraft;

    /// Human-readable noun for prompts and logs
    const LABEL: &'static str;

    /// Returns the server-assigned identifier
    ///
    /// Immutable once assigned and unique within the collection; the sole
    /// stable key for rendering and for targeting update/delete.
    fn id(&self) -> &str;

    /// Category used for filtering and autocomplete, when the variant has one
    fn category(&self) -> Option<&str> {
        None
    }

    /// Copy the record's editable fields into a draft for edit mode
    fn to_draft(&self) -> Self::Draft;
}
