//! Hooks around the external suggestion search.
//!
//! # Responsibility
//! - Rewrite outgoing queries before they reach the service.
//! - Reshape raw service results before they reach the widget.
//!
//! # Invariants
//! - Hooks are pure: inputs are never mutated.

pub mod augment;
pub mod transform;
