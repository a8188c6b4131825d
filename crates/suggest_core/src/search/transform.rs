//! Post-fetch result reshaping.
//!
//! # Invariants
//! - The drop window is clamped to the list bounds and never panics.
//! - Only a prefix at the very start of `value` is stripped.
//! - The service response is never mutated; a new list is returned.

use crate::model::suggestion::{Suggestion, SuggestionResponse};
use serde::{Deserialize, Serialize};

/// Contiguous index window removed from every result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropWindow {
    /// First removed index.
    pub start: usize,
    /// Number of removed entries.
    pub len: usize,
}

impl DropWindow {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Returns whether `index` falls inside the window.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index - self.start < self.len
    }
}

/// Drops low-relevance entries and strips a constant display prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTransformer {
    drop_window: Option<DropWindow>,
    strip_prefix: Option<String>,
}

impl ResultTransformer {
    pub fn new(drop_window: Option<DropWindow>, strip_prefix: Option<String>) -> Self {
        Self {
            drop_window,
            strip_prefix: strip_prefix.filter(|prefix| !prefix.is_empty()),
        }
    }

    pub fn drop_window(&self) -> Option<DropWindow> {
        self.drop_window
    }

    pub fn strip_prefix(&self) -> Option<&str> {
        self.strip_prefix.as_deref()
    }

    /// Returns the transformed copy of `suggestions`.
    pub fn transform<D: Clone>(&self, suggestions: &[Suggestion<D>]) -> Vec<Suggestion<D>> {
        suggestions
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.drop_window.is_some_and(|window| window.contains(*index)))
            .map(|(_, suggestion)| Suggestion {
                value: self.strip(&suggestion.value),
                ..suggestion.clone()
            })
            .collect()
    }

    /// Returns a transformed copy of a whole service response.
    pub fn transform_response<D: Clone>(
        &self,
        response: &SuggestionResponse<D>,
    ) -> SuggestionResponse<D> {
        SuggestionResponse::new(self.transform(&response.suggestions))
    }

    fn strip(&self, value: &str) -> String {
        self.strip_prefix
            .as_deref()
            .and_then(|prefix| value.strip_prefix(prefix))
            .unwrap_or(value)
            .to_string()
    }
}
