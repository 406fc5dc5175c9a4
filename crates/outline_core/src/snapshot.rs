//! Outline snapshot codec.
//!
//! # Responsibility
//! - Encode an outline to the stored JSON array format and back.
//!
//! # Invariants
//! - Encoding is verbatim: row order and every field round-trip losslessly.
//! - Decoding rejects snapshots that repeat a row id.
//!
//! Wire shape: `[{"id": "<uuid>", "text": "...", "indentLevel": 0}, ...]`.

use crate::model::row::{Outline, Row, RowId};
use serde_json::error::Category;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from snapshot encoding/decoding.
#[derive(Debug)]
pub enum SnapshotError {
    /// Value is not a valid row array.
    Json(serde_json::Error),
    /// Two rows share one id.
    DuplicateId(RowId),
}

impl SnapshotError {
    /// Stable error category. Never echoes snapshot content.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json(err) => match err.classify() {
                Category::Io => "io",
                Category::Syntax => "syntax",
                Category::Data => "data",
                Category::Eof => "eof",
            },
            Self::DuplicateId(_) => "duplicate_id",
        }
    }

    /// `(line, column)` of a decode failure, when known.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Json(err) if err.line() > 0 => Some((err.line(), err.column())),
            _ => None,
        }
    }
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid outline snapshot: {err}"),
            Self::DuplicateId(id) => write!(f, "outline snapshot repeats row id: {id}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes `outline` to its stored string form.
pub fn encode_outline(outline: &Outline) -> Result<String, SnapshotError> {
    serde_json::to_string(outline).map_err(Into::into)
}

/// Parses a stored string back into an outline.
///
/// # Errors
/// - [`SnapshotError::Json`] when the value is not a row array.
/// - [`SnapshotError::DuplicateId`] when ids are not unique.
pub fn decode_outline(value: &str) -> Result<Outline, SnapshotError> {
    let rows: Vec<Row> = serde_json::from_str(value)?;

    let mut seen = HashSet::with_capacity(rows.len());
    for row in &rows {
        if !seen.insert(row.id) {
            return Err(SnapshotError::DuplicateId(row.id));
        }
    }
    Ok(Outline::from_rows(rows))
}
