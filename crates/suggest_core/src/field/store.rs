//! Named text slot storage.

use std::collections::BTreeMap;

/// Stable identifier of one form field, e.g. `address-city`.
pub type FieldId = String;

/// Writable named text slots owned by the surrounding UI.
///
/// Reading a slot that was never written yields an empty string, matching
/// how an empty text input reads.
pub trait FieldStore {
    fn read(&self, field: &str) -> String;
    fn write(&mut self, field: &str, value: &str);
}

/// In-memory field store used by headless forms and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFieldStore {
    values: BTreeMap<FieldId, String>,
}

impl MemoryFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot value, or `None` when the slot was never written.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Returns written slots in field-id order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }
}

impl FieldStore for MemoryFieldStore {
    fn read(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    fn write(&mut self, field: &str, value: &str) {
        self.values.insert(field.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldStore, MemoryFieldStore};

    #[test]
    fn unwritten_slot_reads_empty() {
        let store = MemoryFieldStore::new();
        assert_eq!(store.read("address-city"), "");
        assert_eq!(store.get("address-city"), None);
    }

    #[test]
    fn write_replaces_previous_value() {
        let mut store = MemoryFieldStore::new();
        store.write("address-city", "г Москва");
        store.write("address-city", "г Тула");
        assert_eq!(store.read("address-city"), "г Тула");
        assert_eq!(store.entries().count(), 1);
    }
}
