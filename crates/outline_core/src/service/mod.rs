//! Core use-case services.
//!
//! # Responsibility
//! - Hold the editing session state and route commands into the store.
//! - Keep table and CLI callers decoupled from storage details.

pub mod outline_service;
