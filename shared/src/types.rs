//! Common types for the shared crate

use serde::{Deserialize, Serialize};

/// Which slice of the contact list a view displays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Every stored contact
    #[default]
    All,
    /// Only contacts flagged as favorites
    Favorites,
}
