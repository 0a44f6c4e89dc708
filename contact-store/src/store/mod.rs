//! ContactStore - the authoritative contact list
//!
//! Owns the in-memory list, applies mutations, mirrors the full list to
//! the storage backend after every mutation, and answers filtered and
//! sorted queries for display.
//!
//! # Add flow
//!
//! ```text
//! add(draft)
//!     ├─ 1. Validate draft (nothing touched on failure)
//!     ├─ 2. Simulated commit latency (suspends this op only)
//!     ├─ 3. Assign id + creation timestamp, append
//!     ├─ 4. Persist full list under the fixed key
//!     ├─ 5. Broadcast ContactAdded
//!     └─ 6. Return the new contact
//! ```
//!
//! A persist failure after step 3 does not roll the list back: memory
//! and storage diverge until the next successful write, and the caller
//! gets [`StoreError::Persistence`] to notify the user with.

mod error;
mod event;
pub mod query;

pub use error::{StoreError, StoreResult};
pub use event::StoreEvent;


use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use shared::{Contact, ContactDraft, ViewMode};

use crate::config::StoreConfig;
use crate::storage::StorageBackend;

/// Fixed storage key holding the serialized contact list.
pub const CONTACTS_KEY: &str = "contacthub_contacts";

/// Change event channel capacity. The UI drains events promptly; a
/// lagging subscriber just misses old events, it never blocks a mutation.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Which slice of the list the UI is currently looking at.
#[derive(Debug, Clone, Default)]
struct ViewState {
    view: ViewMode,
    search: String,
}

/// The contact list manager
///
/// Shared by `&self`; interior state sits behind locks that are never
/// held across an await. The UI serializes user actions, so operations
/// do not race each other in practice.
pub struct ContactStore {
    backend: Arc<dyn StorageBackend>,
    contacts: RwLock<Vec<Contact>>,
    view_state: RwLock<ViewState>,
    event_tx: broadcast::Sender<StoreEvent>,
    commit_latency: Duration,
}

impl std::fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactStore")
            .field("contacts", &self.contacts.read().len())
            .field("commit_latency", &self.commit_latency)
            .finish()
    }
}

impl ContactStore {
    /// Create a store over the given backend with default configuration.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_config(backend, &StoreConfig::default())
    }

    /// Create a store over the given backend.
    pub fn with_config(backend: Arc<dyn StorageBackend>, config: &StoreConfig) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            backend,
            contacts: RwLock::new(Vec::new()),
            view_state: RwLock::new(ViewState::default()),
            event_tx,
            commit_latency: config.commit_latency(),
        }
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }

    /// Load the persisted list from the backend.
    ///
    /// Fails soft: a read or decode error is logged and the list resets
    /// to empty; nothing propagates to the caller.
    pub fn load(&self) {
        let loaded = match self.backend.get(CONTACTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Contact>>(&raw) {
                Ok(contacts) => contacts,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to decode stored contacts, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read stored contacts, starting empty");
                Vec::new()
            }
        };

        tracing::info!(count = loaded.len(), "Contacts loaded");
        *self.contacts.write() = loaded;
    }

    /// Add a new contact from raw form input.
    ///
    /// Validation runs synchronously before anything else; the
    /// artificial commit latency then suspends this operation only (it
    /// is not cancellable once entered). The id and creation timestamp
    /// are assigned right before the append.
    pub async fn add(&self, draft: ContactDraft) -> StoreResult<Contact> {
        draft.validate()?;

        // Simulated remote-call latency
        tokio::time::sleep(self.commit_latency).await;

        let contact = draft.into_contact()?;
        self.contacts.write().push(contact.clone());

        let persisted = self.persist();
        let _ = self
            .event_tx
            .send(StoreEvent::ContactAdded(contact.clone()));
        persisted?;

        tracing::info!(id = %contact.id, "Contact added");
        Ok(contact)
    }

    /// Flip the favorite flag for `id`, returning the new state.
    ///
    /// An unknown id is a silent no-op (`Ok(None)`), not an error, and
    /// persists nothing.
    pub fn toggle_favorite(&self, id: &str) -> StoreResult<Option<bool>> {
        let is_favorite = {
            let mut contacts = self.contacts.write();
            let Some(contact) = contacts.iter_mut().find(|c| c.id == id) else {
                return Ok(None);
            };
            contact.is_favorite = !contact.is_favorite;
            contact.is_favorite
        };

        let persisted = self.persist();
        let _ = self.event_tx.send(StoreEvent::FavoriteToggled {
            id: id.to_string(),
            is_favorite,
        });
        persisted?;

        Ok(Some(is_favorite))
    }

    /// Remove the contact with `id` from the list and from storage.
    ///
    /// Unconditional once invoked; any confirmation dialog happens
    /// before the call. An unknown id is a no-op.
    pub fn remove(&self, id: &str) -> StoreResult<Option<Contact>> {
        let removed = {
            let mut contacts = self.contacts.write();
            let Some(pos) = contacts.iter().position(|c| c.id == id) else {
                return Ok(None);
            };
            contacts.remove(pos)
        };

        let persisted = self.persist();
        let _ = self.event_tx.send(StoreEvent::ContactRemoved {
            id: removed.id.clone(),
        });
        persisted?;

        tracing::info!(id = %removed.id, "Contact removed");
        Ok(Some(removed))
    }

    /// Look up a single contact, e.g. to build a confirmation prompt.
    pub fn get(&self, id: &str) -> Option<Contact> {
        self.contacts.read().iter().find(|c| c.id == id).cloned()
    }

    /// Filtered, sorted slice of the list for display. Pure.
    pub fn query(&self, view: ViewMode, search: &str) -> Vec<Contact> {
        query::filter_contacts(&self.contacts.read(), view, search)
    }

    /// Display count for the given view and search.
    pub fn count_label(&self, view: ViewMode, search: &str) -> String {
        query::count_label(&self.contacts.read(), view, search)
    }

    /// Switch the current view mode.
    pub fn set_view(&self, view: ViewMode) {
        self.view_state.write().view = view;
    }

    /// Current view mode.
    pub fn view(&self) -> ViewMode {
        self.view_state.read().view
    }

    /// Update the current search query.
    pub fn set_search(&self, query: &str) {
        self.view_state.write().search = query.trim().to_lowercase();
    }

    /// Contacts for the current view mode and search query.
    pub fn visible(&self) -> Vec<Contact> {
        let state = self.view_state.read().clone();
        self.query(state.view, &state.search)
    }

    /// Display count for the current view mode and search query.
    pub fn visible_count_label(&self) -> String {
        let state = self.view_state.read().clone();
        self.count_label(state.view, &state.search)
    }

    /// Number of stored contacts, ignoring view and search.
    pub fn len(&self) -> usize {
        self.contacts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.read().is_empty()
    }

    /// Serialize the full list and write it under the fixed key.
    ///
    /// Always a whole-list replace; no incremental writes.
    fn persist(&self) -> StoreResult<()> {
        let raw = match serde_json::to_string(&*self.contacts.read()) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode contacts");
                return Err(StoreError::Persistence(e.into()));
            }
        };

        if let Err(e) = self.backend.set(CONTACTS_KEY, &raw) {
            tracing::error!(error = %e, "Failed to save contacts");
            return Err(StoreError::Persistence(e));
        }
        Ok(())
    }
}
