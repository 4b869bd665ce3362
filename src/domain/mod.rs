//! Domain Layer
//!
//! Record variants and the contracts the controller synchronizes over.
//! This layer has no transport dependencies (serde and chrono only).

mod record;
mod expense;
mod task;

pub use record::{Record, RecordDraft};
pub use expense::{parse_amount, Expense, ExpenseDraft};
pub use task::{Task, TaskDraft};
