//! Task Record
//!
//! Todo-tracking record variant. The wire shape is fixed by the task
//! backend: the timestamp key is camelCase `createdAt` and identifiers
//! are server-minted UUIDs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Record, RecordDraft};
use crate::error::{SyncError, SyncResult};

/// A tracked task as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier (UUID)
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Completion status, false for new tasks
    #[serde(default)]
    pub completed: bool,
    /// Server-assigned creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a record the way the server materializes one
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Draft that flips completion while re-sending the other fields
    /// unchanged from memory
    pub fn toggle_draft(&self) -> TaskDraft {
        let mut draft = self.to_draft();
        draft.completed = !draft.completed;
        draft
    }
}

/// Form buffer for a new or edited task
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl RecordDraft for TaskDraft {
    fn validate(&self) -> SyncResult<()> {
        if self.title.trim().is_empty() {
            return Err(SyncError::Validation("title"));
        }
        Ok(())
    }
}

impl Record for Task {
    type Draft = TaskDraft;

    const LABEL: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed,
        }
    }
}
