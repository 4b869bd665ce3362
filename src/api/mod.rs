//! API Layer
//!
//! The HTTP transport behind the `RecordStore` seam, plus the
//! authentication endpoints that sit outside record synchronization.

pub mod auth;
mod client;
mod resource;

pub use client::RestClient;
pub use resource::RestResource;
