//! Contact model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Name shown for contacts that were saved without one.
pub const UNNAMED_CONTACT: &str = "Unnamed Contact";

/// Contact entity
///
/// `id` and `created_at` are assigned at creation and never change;
/// `is_favorite` is the only field mutated afterwards. `created_at` is
/// the sole sort key for display ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Opaque unique token, never reused
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The only mandatory field; never empty for a stored contact
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Display name, falling back for contacts saved without one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_CONTACT)
    }
}

/// Raw form input for a new contact
///
/// Fields arrive untrimmed from the form; [`validate`](Self::validate)
/// checks them and [`into_contact`](Self::into_contact) trims and drops
/// empty optionals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactDraft {
    /// Check the draft before it becomes a contact.
    ///
    /// Phone is required; email is checked only when non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        let email = self.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Materialize the draft into a stored contact, assigning a fresh
    /// id and the current timestamp.
    pub fn into_contact(self) -> Result<Contact, ValidationError> {
        self.validate()?;
        Ok(Contact {
            id: uuid::Uuid::new_v4().to_string(),
            name: non_empty(self.name),
            phone: self.phone.trim().to_string(),
            email: non_empty(self.email),
            address: non_empty(self.address),
            is_favorite: false,
            created_at: Utc::now(),
        })
    }
}

/// Trim a form field, mapping empty to absent.
fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `local@domain.tld` shape check: exactly one `@`, no whitespace, and
/// a dot interior to the domain part.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let len = domain.chars().count();
    domain
        .chars()
        .enumerate()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, phone: &str, email: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            address: String::new(),
        }
    }

    #[test]
    fn test_phone_required() {
        assert_eq!(
            draft("Ann", "", "").validate(),
            Err(ValidationError::MissingPhone)
        );
        assert_eq!(
            draft("Ann", "   ", "").validate(),
            Err(ValidationError::MissingPhone)
        );
        assert!(draft("", "111", "").validate().is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(draft("", "111", "user@example.com").validate().is_ok());
        assert!(draft("", "111", "u@sub.example.co").validate().is_ok());
        // Empty email is fine, it is optional
        assert!(draft("", "111", "").validate().is_ok());

        for bad in [
            "not-an-email",
            "user@example",
            "user@.com",
            "user@example.",
            "@example.com",
            "user name@example.com",
            "user@exa mple.com",
            "user@foo@example.com",
        ] {
            assert_eq!(
                draft("", "111", bad).validate(),
                Err(ValidationError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_into_contact_trims_and_defaults() {
        let contact = draft("  Ann  ", " 111 ", "").into_contact().unwrap();
        assert_eq!(contact.name.as_deref(), Some("Ann"));
        assert_eq!(contact.phone, "111");
        assert_eq!(contact.email, None);
        assert_eq!(contact.address, None);
        assert!(!contact.is_favorite);
        assert!(!contact.id.is_empty());
    }

    #[test]
    fn test_display_name_fallback() {
        let named = draft("Ann", "111", "").into_contact().unwrap();
        assert_eq!(named.display_name(), "Ann");

        let unnamed = draft("", "111", "").into_contact().unwrap();
        assert_eq!(unnamed.display_name(), UNNAMED_CONTACT);
    }

    #[test]
    fn test_serde_round_trip() {
        let contact = draft("Ann", "111", "ann@example.com")
            .into_contact()
            .unwrap();

        let json = serde_json::to_string(&contact).unwrap();
        // Wire format is camelCase with an RFC 3339 creation time
        assert!(json.contains("\"isFavorite\":false"));
        assert!(json.contains("\"createdAt\":\""));

        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
    }
}
