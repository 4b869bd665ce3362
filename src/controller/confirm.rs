//! Delete Confirmation Gate
//!
//! Destructive operations pass an interactive yes/no gate before any
//! request is issued. Rendering the gate is the presentation layer's
//! job; the controller only consumes the decision.

use async_trait::async_trait;

/// Yes/no decision point guarding destructive operations
#[async_trait]
pub trait ConfirmGate: Send + Sync {
    /// Answer the prompt; false drops the operation unsent
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that approves every prompt, for non-interactive callers
pub struct AlwaysConfirm;

#[async_trait]
impl ConfirmGate for AlwaysConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Gate that declines every prompt
pub struct NeverConfirm;

#[async_trait]
impl ConfirmGate for NeverConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}
