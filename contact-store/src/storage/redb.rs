//! redb-backed storage
//!
//! One table mapping string keys to string values. Each `set` runs a
//! full write transaction; commits are durable as soon as they return
//! (copy-on-write with an atomic root swap, safe against power loss).

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

use super::{StorageBackend, StorageResult};

/// Key-value table: key = storage key, value = serialized payload
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Storage backend backed by redb
#[derive(Clone)]
pub struct RedbBackend {
    db: Arc<Database>,
}

impl RedbBackend {
    /// Open or create the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for tests and demos).
    pub fn open_in_memory() -> StorageResult<Self> {
        let db =
            Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so reads never see a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl StorageBackend for RedbBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key() {
        let backend = RedbBackend::open_in_memory().unwrap();
        assert_eq!(backend.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let backend = RedbBackend::open_in_memory().unwrap();
        backend.set("k", "v1").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v1"));
    }

    #[test]
    fn test_set_replaces_value() {
        let backend = RedbBackend::open_in_memory().unwrap();
        backend.set("k", "v1").unwrap();
        backend.set("k", "v2").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_reopen_preserves_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.redb");

        {
            let backend = RedbBackend::open(&path).unwrap();
            backend.set("k", "v").unwrap();
        }

        let backend = RedbBackend::open(&path).unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v"));
    }
}
