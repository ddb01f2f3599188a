//! Store location and connection options.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the default store file.
pub const DB_ENV_VAR: &str = "TASKSTORE_DB";

/// Default store filename, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "taskstore.db";

/// Where the backing store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    path: PathBuf,
}

impl StoreLocation {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read `TASKSTORE_DB`, falling back to `taskstore.db`.
    pub fn from_env() -> Self {
        match std::env::var_os(DB_ENV_VAR) {
            Some(p) if !p.is_empty() => Self::new(p),
            _ => Self::default(),
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Default for StoreLocation {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE)
    }
}

/// Per-connection settings applied right after opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub busy_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            busy_timeout: Duration::from_secs(5),
        }
    }
}
