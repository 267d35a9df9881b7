//! Backing store configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which repository backend the catalog runs against.
///
/// `Memory` keeps the whole catalog in process memory and is intended for
/// tests and local experiments; `Sqlite` is the persistent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProvider {
    /// SQLite file (or in-memory SQLite URL) via a connection pool.
    Sqlite,
    /// Process-local in-memory store, no persistence.
    Memory,
}

impl fmt::Display for DatabaseProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Settings for the backing store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Backend selection.
    #[serde(default = "default_provider")]
    pub provider: DatabaseProvider,
    /// SQLite connection URL. Ignored when `provider` is `memory`.
    #[serde(default = "default_url")]
    pub url: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait when acquiring a connection from the pool.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            url: default_url(),
            max_connections: default_max_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_provider() -> DatabaseProvider {
    DatabaseProvider::Sqlite
}

fn default_url() -> String {
    "sqlite:data/gamehub.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connect_timeout_secs() -> u64 {
    5
}
