//! Shared types for the ContactHub core
//!
//! Common types used across crates: the contact data model, input
//! validation, and view types. This crate owns no I/O; everything here
//! is plain data shared between the store core and an embedding UI.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use error::ValidationError;
pub use models::{Contact, ContactDraft};
pub use types::ViewMode;
