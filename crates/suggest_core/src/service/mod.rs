//! Per-form suggestion controllers.
//!
//! # Responsibility
//! - Wire query bias, result trimming, rendering and write-back into the
//!   hook set an autocomplete widget calls.
//! - Keep one explicit controller instance per form; no global state.
//!
//! # Invariants
//! - Controllers are immutable after construction; all field state lives in
//!   the caller's `Form`.

pub mod address_suggestions;
pub mod fullname_suggestions;
pub mod hooks;
