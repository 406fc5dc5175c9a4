//! Core domain logic for the outline editor.
//! This crate is the single source of truth for outline invariants.

pub mod config;
pub mod db;
pub mod hierarchy;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod snapshot;
pub mod store;
pub mod table;

pub use config::{OutlineConfig, DEFAULT_STORAGE_KEY};
pub use hierarchy::{
    depth_margin_px, depth_of, depth_opacity, descendant_span, level_jumps, parent_index,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::row::{Outline, Row, RowId};
pub use repo::snapshot_repo::{RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository};
pub use service::outline_service::{LoadOutcome, OutlineService, ServiceError};
pub use snapshot::{decode_outline, encode_outline, SnapshotError};
pub use store::{
    add_row, add_row_with_text, delete_with_descendants, edit_text, indent, move_row, IndentDelta,
    MoveRowError,
};
pub use table::{on_reorder, row_views, Command, RowView};
