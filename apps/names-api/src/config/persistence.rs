//! Record persistence configuration.

use serde::{Deserialize, Serialize};

/// Storage backend for the `/api/` record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Turso database at `db_path`.
    #[default]
    Turso,
    /// Process memory; records are lost on exit.
    Memory,
}

impl StorageBackend {
    /// Get the backend name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Turso => "turso",
            Self::Memory => "memory",
        }
    }
}

/// Record persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Storage backend.
    #[serde(default)]
    pub backend: StorageBackend,
    /// Database path; `:memory:` opens a private in-memory database.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> String {
    "./data/names.db".to_string()
}
