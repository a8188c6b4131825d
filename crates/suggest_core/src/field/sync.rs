//! Composite field synchronization.
//!
//! # Responsibility
//! - Recompute a composite field from its bound granular fields.
//!
//! # Invariants
//! - Recomputation reads every bound granular field at call time.
//! - Only the composite is written; granular fields are never touched.

use crate::field::store::{FieldId, FieldStore};
use crate::text::joiner::join;

/// Binding between one composite field and its granular fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSyncEngine {
    composite: FieldId,
    parts: Vec<FieldId>,
    separator: String,
}

impl FieldSyncEngine {
    /// Binds `composite` to the ordered granular `parts`.
    ///
    /// Part order is the join order of the composite value.
    pub fn bind<I, P>(composite: impl Into<FieldId>, parts: I, separator: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldId>,
    {
        Self {
            composite: composite.into(),
            parts: parts.into_iter().map(Into::into).collect(),
            separator: separator.into(),
        }
    }

    pub fn composite(&self) -> &str {
        &self.composite
    }

    pub fn parts(&self) -> &[FieldId] {
        &self.parts
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns whether a change to `field` triggers this engine.
    pub fn observes(&self, field: &str) -> bool {
        self.parts.iter().any(|part| part == field)
    }

    /// Joins the current values of all bound granular fields.
    pub fn compose<S: FieldStore + ?Sized>(&self, store: &S) -> String {
        let values = self
            .parts
            .iter()
            .map(|part| store.read(part))
            .collect::<Vec<_>>();
        join(&values, &self.separator)
    }

    /// Recomputes and writes the composite unconditionally.
    pub fn resync<S: FieldStore + ?Sized>(&self, store: &mut S) -> String {
        let value = self.compose(&*store);
        store.write(&self.composite, &value);
        value
    }

    /// Handles one observed change.
    ///
    /// Returns the new composite value when `changed` is bound to this
    /// engine, `None` otherwise.
    pub fn on_change<S: FieldStore + ?Sized>(&self, store: &mut S, changed: &str) -> Option<String> {
        if !self.observes(changed) {
            return None;
        }
        Some(self.resync(store))
    }
}
