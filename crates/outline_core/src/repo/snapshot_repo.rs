//! Key/value snapshot repository and SQLite implementation.
//!
//! # Responsibility
//! - Persist serialized outline snapshots under a fixed storage key.
//! - Keep SQL details inside the repository boundary.
//!
//! # Invariants
//! - One value per key; writing a key replaces its previous value wholesale.
//! - Values are opaque strings; decoding belongs to the snapshot codec.

use crate::db::migrations::{latest_version, schema_version};
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from snapshot repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "snapshot repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "snapshot repository requires table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for serialized snapshots.
pub trait SnapshotRepository {
    /// Stores `value` under `key`, replacing any previous value.
    fn write_value(&self, key: &str, value: &str) -> RepoResult<()>;
    /// Loads the value under `key`, if any.
    fn read_value(&self, key: &str) -> RepoResult<Option<String>>;
    /// Removes the value under `key`. Missing keys are not an error.
    fn remove_value(&self, key: &str) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over the `local_storage` table.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Creates repository from a migrated connection.
    ///
    /// # Errors
    /// - [`RepoError::UninitializedConnection`] when migrations were not applied.
    /// - [`RepoError::MissingRequiredTable`] when `local_storage` is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_storage_ready(conn)?;
        Ok(Self { conn })
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn write_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO local_storage (storage_key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(storage_key) DO UPDATE
             SET value = excluded.value,
                 updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn read_value(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value
                 FROM local_storage
                 WHERE storage_key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn remove_value(&self, key: &str) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM local_storage WHERE storage_key = ?1;",
            [key],
        )?;
        Ok(())
    }
}

impl<R: SnapshotRepository + ?Sized> SnapshotRepository for &R {
    fn write_value(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).write_value(key, value)
    }

    fn read_value(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).read_value(key)
    }

    fn remove_value(&self, key: &str) -> RepoResult<()> {
        (**self).remove_value(key)
    }
}

fn ensure_storage_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = schema_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'local_storage'
        );",
        [],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(RepoError::MissingRequiredTable("local_storage"));
    }
    Ok(())
}
