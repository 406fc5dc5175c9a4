//! Outline domain model.
//!
//! # Responsibility
//! - Define the flat row record and the ordered outline snapshot.
//!
//! # Invariants
//! - Row ids are unique across one outline.
//! - Parentage is always derived from order plus `indent_level`.

pub mod row;
