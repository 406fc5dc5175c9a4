//! Outline mutation operations.
//!
//! # Responsibility
//! - Apply add/edit/indent/delete/move to an outline snapshot.
//! - Return a new snapshot every time; the input is never modified.
//!
//! # Invariants
//! - Unknown row ids are silent no-ops.
//! - Deletion always removes a row together with its descendant span.
//! - Indent is not bounded by the predecessor's level.
//! - Moving a row never changes any `indent_level` and never carries descendants.

use crate::hierarchy::descendant_span_at;
use crate::model::row::{Outline, Row, RowId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Direction of one indent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDelta {
    /// One level deeper (+1).
    Indent,
    /// One level shallower (-1), clamped at 0.
    Outdent,
}

impl IndentDelta {
    /// Applies this step to `level` without underflow.
    pub fn apply_to(self, level: u32) -> u32 {
        match self {
            Self::Indent => level.saturating_add(1),
            Self::Outdent => level.saturating_sub(1),
        }
    }
}

/// Errors from reorder requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRowError {
    /// `from` or `to` is outside the outline.
    OutOfBounds { from: usize, to: usize, len: usize },
}

impl Display for MoveRowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { from, to, len } => write!(
                f,
                "cannot move row {from} to {to}: outline has {len} rows"
            ),
        }
    }
}

impl Error for MoveRowError {}

/// Appends an empty row.
///
/// The new row inherits the level of the current last row, or 0 when the
/// outline is empty.
pub fn add_row(outline: &Outline) -> Outline {
    add_row_with_text(outline, String::new())
}

/// Appends a row seeded with `text`. Same level rule as [`add_row`].
pub fn add_row_with_text(outline: &Outline, text: impl Into<String>) -> Outline {
    let indent_level = outline.last().map_or(0, |row| row.indent_level);
    let row = Row::with_id(fresh_id(outline), text, indent_level);

    let mut rows = Vec::with_capacity(outline.len() + 1);
    rows.extend_from_slice(outline.rows());
    rows.push(row);
    Outline::from_rows(rows)
}

/// Replaces the text of the row with `id`.
pub fn edit_text(outline: &Outline, id: RowId, text: impl Into<String>) -> Outline {
    let text = text.into();
    map_row(outline, id, |row| Row {
        text: text.clone(),
        ..row.clone()
    })
}

/// Moves the row with `id` one level in or out.
pub fn indent(outline: &Outline, id: RowId, delta: IndentDelta) -> Outline {
    map_row(outline, id, |row| Row {
        indent_level: delta.apply_to(row.indent_level),
        ..row.clone()
    })
}

/// Removes the row with `id` and every row in its descendant span.
pub fn delete_with_descendants(outline: &Outline, id: RowId) -> Outline {
    let Some(index) = outline.position(id) else {
        return outline.clone();
    };
    let span = descendant_span_at(outline.rows(), index);

    let rows = outline.rows();
    let mut kept = Vec::with_capacity(rows.len() - (span.end - index));
    kept.extend_from_slice(&rows[..index]);
    kept.extend_from_slice(&rows[span.end..]);
    Outline::from_rows(kept)
}

/// Relocates the row at `from` to position `to`, shifting rows in between.
///
/// # Errors
/// - Returns [`MoveRowError::OutOfBounds`] when either index is outside the
///   outline. The input outline stays the caller's current value.
pub fn move_row(outline: &Outline, from: usize, to: usize) -> Result<Outline, MoveRowError> {
    let len = outline.len();
    if from >= len || to >= len {
        return Err(MoveRowError::OutOfBounds { from, to, len });
    }

    let mut rows = outline.rows().to_vec();
    let row = rows.remove(from);
    rows.insert(to, row);
    Ok(Outline::from_rows(rows))
}

fn map_row(outline: &Outline, id: RowId, update: impl Fn(&Row) -> Row) -> Outline {
    outline
        .iter()
        .map(|row| if row.id == id { update(row) } else { row.clone() })
        .collect()
}

fn fresh_id(outline: &Outline) -> RowId {
    loop {
        let id = Uuid::new_v4();
        if !outline.contains(id) {
            return id;
        }
    }
}
