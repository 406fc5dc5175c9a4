//! Outline editor use-case service.
//!
//! # Responsibility
//! - Own the current outline for one editing session.
//! - Dispatch commands into the outline store and swap in the result.
//! - Save and load the outline through a snapshot repository.
//!
//! # Invariants
//! - The current outline is replaced wholesale, never mutated in place.
//!   Outlines handed out earlier stay valid and unchanged.
//! - A failed command or load leaves the current outline untouched.
//! - Log events carry counts and ids only, never row text.

use crate::config::DEFAULT_STORAGE_KEY;
use crate::model::row::{Outline, RowId};
use crate::repo::snapshot_repo::{RepoError, SnapshotRepository};
use crate::snapshot::{decode_outline, encode_outline, SnapshotError};
use crate::store::{IndentDelta, MoveRowError};
use crate::table::Command;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Errors from save/load.
#[derive(Debug)]
pub enum ServiceError {
    /// Storage transport failure.
    Repo(RepoError),
    /// Current outline could not be encoded.
    Snapshot(SnapshotError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Snapshot(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<SnapshotError> for ServiceError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

/// Result of [`OutlineService::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Stored outline replaced the current one.
    Loaded { rows: usize },
    /// Nothing usable was stored; the current outline is unchanged.
    NoData,
}

/// Editing session facade.
pub struct OutlineService<R: SnapshotRepository> {
    repo: R,
    storage_key: String,
    current: Arc<Outline>,
}

impl<R: SnapshotRepository> OutlineService<R> {
    /// Creates a session with an empty outline and the default storage key.
    pub fn new(repo: R) -> Self {
        Self::with_storage_key(repo, DEFAULT_STORAGE_KEY)
    }

    /// Creates a session saving under `storage_key`.
    pub fn with_storage_key(repo: R, storage_key: impl Into<String>) -> Self {
        Self {
            repo,
            storage_key: storage_key.into(),
            current: Arc::new(Outline::new()),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Returns the current outline snapshot.
    pub fn outline(&self) -> Arc<Outline> {
        Arc::clone(&self.current)
    }

    /// Applies `command` and makes its result the current outline.
    ///
    /// # Errors
    /// - [`MoveRowError`] for out-of-range reorders; the outline is unchanged
    ///   so the table can reset its drag state.
    pub fn apply(&mut self, command: Command) -> Result<Arc<Outline>, MoveRowError> {
        match command.apply(&self.current) {
            Ok(next) => {
                debug!(
                    "event=outline_command module=service status=ok command={} rows_before={} rows_after={}",
                    command.name(),
                    self.current.len(),
                    next.len()
                );
                self.current = Arc::new(next);
                Ok(self.outline())
            }
            Err(err) => {
                warn!(
                    "event=outline_command module=service status=error command={} error={}",
                    command.name(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Appends an empty row and returns its id.
    pub fn add_row(&mut self) -> RowId {
        self.add_row_with_text(String::new())
    }

    /// Appends a row seeded with `text` and returns its id.
    pub fn add_row_with_text(&mut self, text: impl Into<String>) -> RowId {
        self.apply_infallible(Command::AddRow { text: text.into() });
        self.last_row_id()
    }

    pub fn edit_text(&mut self, id: RowId, text: impl Into<String>) {
        self.apply_infallible(Command::EditText {
            id,
            text: text.into(),
        });
    }

    pub fn indent(&mut self, id: RowId, delta: IndentDelta) {
        self.apply_infallible(Command::Indent { id, delta });
    }

    pub fn delete_row(&mut self, id: RowId) {
        self.apply_infallible(Command::Delete { id });
    }

    pub fn move_row(&mut self, from: usize, to: usize) -> Result<Arc<Outline>, MoveRowError> {
        self.apply(Command::Reorder { from, to })
    }

    /// Writes the current outline under the storage key.
    pub fn save(&self) -> Result<(), ServiceError> {
        let encoded = encode_outline(&self.current)?;
        if let Err(err) = self.repo.write_value(&self.storage_key, &encoded) {
            warn!(
                "event=outline_save module=service status=error key={} error={}",
                self.storage_key, err
            );
            return Err(err.into());
        }
        info!(
            "event=outline_save module=service status=ok key={} rows={} bytes={}",
            self.storage_key,
            self.current.len(),
            encoded.len()
        );
        Ok(())
    }

    /// Replaces the current outline with the stored one, if any.
    ///
    /// Missing or malformed values yield [`LoadOutcome::NoData`].
    ///
    /// # Errors
    /// - [`ServiceError::Repo`] when storage itself cannot be read.
    pub fn load(&mut self) -> Result<LoadOutcome, ServiceError> {
        let Some(value) = self.repo.read_value(&self.storage_key)? else {
            info!(
                "event=outline_load module=service status=no_data key={} reason=missing",
                self.storage_key
            );
            return Ok(LoadOutcome::NoData);
        };

        match decode_outline(&value) {
            Ok(outline) => {
                let rows = outline.len();
                self.current = Arc::new(outline);
                info!(
                    "event=outline_load module=service status=ok key={} rows={}",
                    self.storage_key, rows
                );
                Ok(LoadOutcome::Loaded { rows })
            }
            Err(err) => {
                warn!(
                    "event=outline_load module=service status=no_data key={} reason=malformed error_kind={}{}",
                    self.storage_key,
                    err.kind(),
                    err.position()
                        .map(|(line, column)| format!(" line={line} column={column}"))
                        .unwrap_or_default()
                );
                Ok(LoadOutcome::NoData)
            }
        }
    }

    fn apply_infallible(&mut self, command: Command) {
        let name = command.name();
        match self.apply(command) {
            Ok(_) => {}
            Err(err) => error!(
                "event=outline_command module=service status=unexpected_error command={} error={}",
                name, err
            ),
        }
    }

    fn last_row_id(&self) -> RowId {
        self.current
            .last()
            .map(|row| row.id)
            .unwrap_or_else(RowId::nil)
    }
}
