//! Validation error types
//!
//! Raised synchronously while checking a [`ContactDraft`], before any
//! state is touched; the caller re-prompts and nothing changes.
//!
//! [`ContactDraft`]: crate::models::ContactDraft

use thiserror::Error;

/// Errors raised while validating contact input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Phone is the only mandatory field
    #[error("Phone number is required")]
    MissingPhone,

    /// Email, when given, must look like `local@domain.tld`
    #[error("Please enter a valid email address")]
    InvalidEmail,
}
