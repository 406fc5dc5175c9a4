//! Runtime configuration for an editing session.
//!
//! # Invariants
//! - `storage_key` defaults to the key earlier saves were written under, so
//!   existing snapshots keep loading.
//! - `log_dir = None` means file logging stays off.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Key the outline snapshot is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "curriculumData";
/// Storage file used when no path is given.
pub const DEFAULT_DB_FILE_NAME: &str = "outline.sqlite3";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    /// SQLite file holding saved outlines.
    pub db_path: PathBuf,
    /// Key the outline snapshot is saved under.
    pub storage_key: String,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: Option<PathBuf>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl OutlineConfig {
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }
}
