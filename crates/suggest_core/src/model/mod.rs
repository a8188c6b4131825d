//! Suggestion payload model shared by address and person-name flows.
//!
//! # Responsibility
//! - Define the wire shapes exchanged with the external suggestion service.
//! - Keep structured attributes optional so missing data is never an error.
//!
//! # Invariants
//! - Records are decoded verbatim and never mutated by formatting code.
//! - Unknown wire attributes are ignored on decode.

pub mod address;
pub mod fullname;
pub mod suggestion;
