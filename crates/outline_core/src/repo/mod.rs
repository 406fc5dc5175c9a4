//! Repository layer for saved outline snapshots.
//!
//! # Responsibility
//! - Define the storage contract the editor service saves through.
//! - Isolate SQLite query details from service orchestration.

pub mod snapshot_repo;
