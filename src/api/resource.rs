//! REST Resource Bindings
//!
//! Maps record variants onto the backend's route table.

use crate::domain::{Expense, Record, Task};

/// Route-table binding for a record variant
///
/// The collection path is the segment after the base URL; identifiers
/// are appended for single-record operations. Variants whose backend
/// serves `GET /categories` opt in through the capability flag, so the
/// client never calls an endpoint the other backend does not have.
pub trait RestResource: Record {
    /// Collection path segment, without slashes
    const COLLECTION: &'static str;

    /// Whether the backend serves a distinct-category listing
    const HAS_CATEGORY_INDEX: bool = false;
}

impl RestResource for Expense {
    const COLLECTION: &'static str = "expense";
    const HAS_CATEGORY_INDEX: bool = true;
}

impl RestResource for Task {
    const COLLECTION: &'static str = "tasks";
}
