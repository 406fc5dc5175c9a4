//! Hierarchy derivations over a flat outline.
//!
//! # Responsibility
//! - Derive descendant spans, parents and depth styling from `indent_level`.
//! - Stay stateless: every result is recomputed from the outline passed in.
//!
//! # Invariants
//! - A descendant span is always a contiguous range directly after its row.
//! - Nothing here mutates or caches the outline.

use crate::model::row::{Outline, Row, RowId};
use std::ops::Range;

/// Horizontal offset applied per nesting level.
pub const MARGIN_PER_LEVEL_PX: u32 = 20;
/// Opacity lost per nesting level.
pub const OPACITY_STEP: f32 = 0.1;
/// Lowest opacity any nesting level renders with.
pub const MIN_OPACITY: f32 = 0.4;

/// Rendering depth of a row. Identical to its stored level.
pub fn depth_of(row: &Row) -> u32 {
    row.indent_level
}

/// Returns the index range `[i + 1, j)` of the descendants of the row with `id`.
///
/// Returns an empty range when the id is unknown, the row is last, or the
/// next row is not indented deeper.
pub fn descendant_span(outline: &Outline, id: RowId) -> Range<usize> {
    match outline.position(id) {
        Some(index) => descendant_span_at(outline.rows(), index),
        None => 0..0,
    }
}

/// Index-based form of [`descendant_span`].
///
/// Out-of-range `index` yields an empty range at the end of `rows`.
pub fn descendant_span_at(rows: &[Row], index: usize) -> Range<usize> {
    let Some(row) = rows.get(index) else {
        return rows.len()..rows.len();
    };

    let start = index + 1;
    let end = rows[start..]
        .iter()
        .position(|follower| follower.indent_level <= row.indent_level)
        .map_or(rows.len(), |offset| start + offset);
    start..end
}

/// Returns the index of the derived parent of the row at `index`.
///
/// The parent is the nearest preceding row with a strictly smaller level.
/// Top-level rows and out-of-range indices have no parent.
pub fn parent_index(outline: &Outline, index: usize) -> Option<usize> {
    let level = outline.get(index)?.indent_level;
    outline.rows()[..index]
        .iter()
        .rposition(|candidate| candidate.indent_level < level)
}

/// Opacity used to render a row at `level`.
///
/// Levels 0 and 1 are fully opaque; deeper levels fade by a fixed step
/// down to [`MIN_OPACITY`].
pub fn depth_opacity(level: u32) -> f32 {
    if level == 1 {
        return 1.0;
    }
    (1.0 - OPACITY_STEP * level as f32).clamp(MIN_OPACITY, 1.0)
}

/// Left margin used to render a row at `level`.
pub fn depth_margin_px(level: u32) -> u32 {
    level.saturating_mul(MARGIN_PER_LEVEL_PX)
}

/// Returns indices of rows indented more than one level below their predecessor.
///
/// Indent is not bounded by the predecessor, so these rows can exist; they
/// have no parent at the intermediate levels. A first row above level 0 is
/// reported as well.
pub fn level_jumps(outline: &Outline) -> Vec<usize> {
    let mut previous: Option<u32> = None;
    let mut jumps = Vec::new();
    for (index, row) in outline.iter().enumerate() {
        let allowed = previous.map_or(0, |level| level.saturating_add(1));
        if row.indent_level > allowed {
            jumps.push(index);
        }
        previous = Some(row.indent_level);
    }
    jumps
}
