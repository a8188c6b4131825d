//! Single-actor form state.
//!
//! # Responsibility
//! - Own field storage plus every composite binding of one form.
//! - Dispatch change observers synchronously after user edits.
//!
//! # Invariants
//! - `edit` settles every affected composite before returning.
//! - `set_value` is a programmatic write and dispatches no observers.
//! - `&mut self` on every mutation serializes read-all-then-write-composite.

use crate::field::store::{FieldStore, MemoryFieldStore};
use crate::field::sync::FieldSyncEngine;
use log::debug;

/// Field state of one form with its composite bindings.
#[derive(Debug, Clone, Default)]
pub struct Form<S: FieldStore = MemoryFieldStore> {
    store: S,
    engines: Vec<FieldSyncEngine>,
}

impl Form<MemoryFieldStore> {
    /// Creates a form backed by an in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryFieldStore::new())
    }
}

impl<S: FieldStore> Form<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            engines: Vec::new(),
        }
    }

    /// Registers one composite binding for the lifetime of the form.
    pub fn bind(&mut self, engine: FieldSyncEngine) {
        debug!(
            "event=field_bind module=field status=ok parts={}",
            engine.parts().len()
        );
        self.engines.push(engine);
    }

    /// Applies a user edit and settles bound composites.
    ///
    /// Returns the number of composites recomputed.
    pub fn edit(&mut self, field: &str, value: &str) -> usize {
        self.store.write(field, value);
        self.notify_changed(field)
    }

    /// Dispatches change observers for `field` without writing it.
    ///
    /// Used when the UI reports a change that already landed in the store.
    pub fn notify_changed(&mut self, field: &str) -> usize {
        let mut updated = 0;
        for engine in &self.engines {
            if engine.on_change(&mut self.store, field).is_some() {
                updated += 1;
            }
        }
        if updated > 0 {
            debug!("event=field_sync module=field status=ok composites={updated}");
        }
        updated
    }

    /// Writes a value programmatically; no change observers fire.
    pub fn set_value(&mut self, field: &str, value: &str) {
        self.store.write(field, value);
    }

    pub fn value(&self, field: &str) -> String {
        self.store.read(field)
    }

    pub fn engines(&self) -> &[FieldSyncEngine] {
        &self.engines
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
