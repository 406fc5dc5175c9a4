//! Table surface contract.
//!
//! The table widget receives one [`RowView`] per row and reports user intent
//! back as [`Command`] values. Views carry no callbacks; each action method
//! builds the command the surface should dispatch.

use crate::hierarchy::{depth_margin_px, depth_of, depth_opacity};
use crate::model::row::{Outline, RowId};
use crate::store::{self, IndentDelta, MoveRowError};

/// Render model for one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: RowId,
    pub text: String,
    pub indent_level: u32,
    /// Left margin of the text cell.
    pub margin_px: u32,
    /// Opacity of the text input.
    pub opacity: f32,
}

impl RowView {
    /// Text input changed.
    pub fn on_edit_text(&self, text: impl Into<String>) -> Command {
        Command::EditText {
            id: self.id,
            text: text.into(),
        }
    }

    /// Indent or outdent arrow clicked.
    pub fn on_indent(&self, delta: IndentDelta) -> Command {
        Command::Indent { id: self.id, delta }
    }

    /// Trash icon clicked.
    pub fn on_delete(&self) -> Command {
        Command::Delete { id: self.id }
    }
}

/// Drag gesture finished: move the row at `from` to `to`.
pub fn on_reorder(from: usize, to: usize) -> Command {
    Command::Reorder { from, to }
}

/// Builds the ordered view models for `outline`.
pub fn row_views(outline: &Outline) -> Vec<RowView> {
    outline
        .iter()
        .map(|row| {
            let depth = depth_of(row);
            RowView {
                id: row.id,
                text: row.text.clone(),
                indent_level: row.indent_level,
                margin_px: depth_margin_px(depth),
                opacity: depth_opacity(depth),
            }
        })
        .collect()
}

/// One user-facing editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a row seeded with `text` (empty for the add button).
    AddRow { text: String },
    EditText { id: RowId, text: String },
    Indent { id: RowId, delta: IndentDelta },
    Delete { id: RowId },
    Reorder { from: usize, to: usize },
}

impl Command {
    /// Applies this command to `outline` and returns the next outline.
    ///
    /// # Errors
    /// - Only [`Command::Reorder`] can fail, with out-of-range indices.
    pub fn apply(&self, outline: &Outline) -> Result<Outline, MoveRowError> {
        match self {
            Self::AddRow { text } => Ok(store::add_row_with_text(outline, text.as_str())),
            Self::EditText { id, text } => Ok(store::edit_text(outline, *id, text.as_str())),
            Self::Indent { id, delta } => Ok(store::indent(outline, *id, *delta)),
            Self::Delete { id } => Ok(store::delete_with_descendants(outline, *id)),
            Self::Reorder { from, to } => store::move_row(outline, *from, *to),
        }
    }

    /// Short stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddRow { .. } => "add_row",
            Self::EditText { .. } => "edit_text",
            Self::Indent {
                delta: IndentDelta::Indent,
                ..
            } => "indent",
            Self::Indent {
                delta: IndentDelta::Outdent,
                ..
            } => "outdent",
            Self::Delete { .. } => "delete",
            Self::Reorder { .. } => "reorder",
        }
    }
}
