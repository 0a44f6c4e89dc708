//! ContactHub store core
//!
//! The non-UI core of a contact manager: an owned contact list with
//! input validation, favorite/remove mutations, substring search, and
//! full-list persistence to an embedded key-value database.
//!
//! # Module structure
//!
//! ```text
//! contact-store/src/
//! ├── config.rs      # Environment-driven configuration
//! ├── storage/       # Key-value backend trait + redb implementation
//! ├── store/         # ContactStore manager, queries, change events
//! └── utils/         # Logging setup
//! ```
//!
//! An embedding UI drives the store and owns everything visual:
//! rendering, form binding, confirmation dialogs, notifications. The
//! store broadcasts [`StoreEvent`]s so views can re-render declaratively.

pub mod config;
pub mod storage;
pub mod store;
pub mod utils;

// Re-export public types
pub use config::StoreConfig;
pub use storage::{RedbBackend, StorageBackend, StorageError};
pub use store::{ContactStore, StoreError, StoreEvent, StoreResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Re-export shared model types for embedders
pub use shared::{Contact, ContactDraft, ValidationError, ViewMode};
