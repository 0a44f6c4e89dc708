//! Store configuration

use std::path::PathBuf;
use std::time::Duration;

/// Database filename inside the work directory.
const DB_FILE: &str = "contacts.redb";

/// Store configuration
///
/// All values can be overridden through environment variables:
///
/// | Env var | Default | Meaning |
/// |---------|---------|---------|
/// | CONTACTHUB_WORK_DIR | /var/lib/contacthub | Directory holding the database file |
/// | CONTACTHUB_COMMIT_LATENCY_MS | 500 | Artificial latency before an add commits |
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the database file
    pub work_dir: String,
    /// Artificial latency inserted before an add commits, simulating
    /// remote-call UX
    pub commit_latency_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            work_dir: "/var/lib/contacthub".to_string(),
            commit_latency_ms: 500,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            work_dir: std::env::var("CONTACTHUB_WORK_DIR").unwrap_or(defaults.work_dir),
            commit_latency_ms: std::env::var("CONTACTHUB_COMMIT_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.commit_latency_ms),
        }
    }

    /// Full path of the contact database file.
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(DB_FILE)
    }

    /// Commit latency as a [`Duration`].
    pub fn commit_latency(&self) -> Duration {
        Duration::from_millis(self.commit_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.commit_latency(), Duration::from_millis(500));
        assert!(config.db_path().ends_with("contacts.redb"));
    }
}
