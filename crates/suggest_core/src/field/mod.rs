//! Form field bindings: storage, composite synchronization, write-back.
//!
//! # Responsibility
//! - Abstract named writable text slots behind [`store::FieldStore`].
//! - Keep composite fields equal to the join of their granular fields.
//! - Distribute selected suggestion payloads into granular fields.
//!
//! # Invariants
//! - All field reads/writes of one form go through one [`form::Form`].
//! - A composite is recomputed from every bound granular value, never only
//!   from the changed one.

pub mod distribute;
pub mod form;
pub mod store;
pub mod sync;
