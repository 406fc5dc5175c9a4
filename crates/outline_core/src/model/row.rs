//! Outline row and outline snapshot model.
//!
//! # Responsibility
//! - Define the flat row record that encodes hierarchy through `indent_level`.
//! - Define the ordered `Outline` snapshot that every store operation returns.
//!
//! # Invariants
//! - `id` is stable and never reused for another row.
//! - Row order is the only record of structure; there is no parent pointer.
//! - An `Outline` is never mutated after construction; operations build a new one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one outline row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RowId = Uuid;

/// One outline entry ("standard").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    /// Stable id, assigned at creation.
    pub id: RowId,
    /// User-editable text. No constraints.
    pub text: String,
    /// Nesting depth; `0` is top-level.
    /// Serialized as `indentLevel` to match the stored snapshot format.
    #[serde(rename = "indentLevel")]
    pub indent_level: u32,
}

impl Row {
    /// Creates a row with a generated id.
    pub fn new(text: impl Into<String>, indent_level: u32) -> Self {
        Self::with_id(Uuid::new_v4(), text, indent_level)
    }

    /// Creates a row with a caller-provided id.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(id: RowId, text: impl Into<String>, indent_level: u32) -> Self {
        Self {
            id,
            text: text.into(),
            indent_level,
        }
    }
}

/// Ordered sequence of rows. The single source of truth for the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    rows: Vec<Row>,
}

impl Outline {
    /// Creates an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps rows in their given order.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn last(&self) -> Option<&Row> {
        self.rows.last()
    }

    /// Returns the position of the row with `id`, if present.
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Returns the row with `id`, if present.
    pub fn find(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.find(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Consumes the outline and returns its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl FromIterator<Row> for Outline {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
