//! Syncboard
//!
//! Client-side collection synchronization over a REST backend.
//!
//! Layered architecture:
//! - domain: Record variants and the contracts they satisfy
//! - api: HTTP transport implementing the store seam
//! - controller: The fetch/mutate/resync cycle and its view state
//!
//! A presentation layer constructs a [`SyncController`] over a
//! [`RestClient`] and drives it; it renders the controller's snapshots
//! and never talks to the backend directly.

pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;

pub use api::{RestClient, RestResource};
pub use config::Config;
pub use controller::{AlwaysConfirm, ConfirmGate, NeverConfirm, RecordStore, SyncController};
pub use domain::{Expense, ExpenseDraft, Record, RecordDraft, Task, TaskDraft};
pub use error::{SyncError, SyncResult};
