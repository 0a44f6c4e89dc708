//! Store change notifications
//!
//! Every mutation broadcasts an event so an embedding UI can re-render
//! declaratively instead of the store driving presentation. Slow or
//! absent subscribers never block or fail a mutation. Events serialize
//! as camelCase JSON for UIs on the far side of a bridge.

use serde::{Deserialize, Serialize};
use shared::Contact;

/// A change to the contact list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StoreEvent {
    /// A contact was created and appended
    ContactAdded(Contact),
    /// The favorite flag of an existing contact flipped
    FavoriteToggled { id: String, is_favorite: bool },
    /// A contact was permanently removed
    ContactRemoved { id: String },
}
