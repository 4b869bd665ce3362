//! Controller Layer
//!
//! The synchronization controller and the seams it drives: the backend
//! transport, the delete confirmation gate, and category autocomplete.

mod confirm;
mod store;
mod suggest;
mod sync;


pub use confirm::{AlwaysConfirm, ConfirmGate, NeverConfirm};
pub use store::RecordStore;
pub use suggest::{fuzzy_match, suggestions};
pub use sync::SyncController;
