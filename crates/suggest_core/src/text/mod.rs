//! Text shaping primitives shared by every formatter.
//!
//! # Responsibility
//! - Join optional parts into one display string.
//! - Highlight typed query text inside rendered lines.
//!
//! # Invariants
//! - Formatting rules are fixed in `joiner`; callers never re-derive them.

pub mod highlight;
pub mod joiner;
