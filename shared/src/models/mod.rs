//! Data models
//!
//! Shared between the store core and an embedding UI. Serialized as
//! camelCase JSON; timestamps encode as RFC 3339 strings.

pub mod contact;

// Re-exports
pub use contact::*;
