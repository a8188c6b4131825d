//! Widget hook contract shared by suggestion controllers.
//!
//! # Invariants
//! - Hooks never block and never fail; degraded output replaces errors.
//! - `on_select` without a payload leaves the form untouched.

use crate::field::distribute::FieldDistributor;
use crate::field::form::Form;
use crate::field::store::FieldStore;
use crate::field::sync::FieldSyncEngine;
use crate::model::suggestion::{SearchRequest, Suggestion, SuggestionResponse};
use log::debug;
use serde::{Deserialize, Serialize};

/// Options handed to the autocomplete widget as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetOptions {
    /// Full endpoint URL for this suggestion kind.
    pub service_url: String,
    pub token: Option<String>,
    pub select_on_space: bool,
    pub max_height: Option<u32>,
}

impl WidgetOptions {
    /// Builds options for `endpoint` under `base_url`.
    pub fn for_endpoint(
        base_url: &str,
        endpoint: &str,
        token: Option<String>,
        select_on_space: bool,
        max_height: Option<u32>,
    ) -> Self {
        Self {
            service_url: format!(
                "{}/{}",
                base_url.trim().trim_end_matches('/'),
                endpoint.trim_start_matches('/')
            ),
            token,
            select_on_space,
            max_height,
        }
    }
}

/// Hook set one controller registers with its autocomplete widget.
pub trait SuggestionHooks {
    type Record: Clone;
    type Fields: FieldDistributor<Record = Self::Record>;

    /// Short module name used in log events.
    fn kind(&self) -> &'static str;

    /// Composite field id.
    fn composite(&self) -> &str;

    /// Separator between granular values in the composite.
    fn separator(&self) -> &str;

    fn fields(&self) -> &Self::Fields;

    fn widget_options(&self) -> &WidgetOptions;

    /// Canonical one-line value of a selected record.
    fn format_selected(&self, record: &Self::Record) -> String;

    /// Pre-search query rewrite.
    fn on_search_start(&self, request: &SearchRequest) -> SearchRequest {
        request.clone()
    }

    /// Post-fetch result reshaping.
    fn transform_result(
        &self,
        response: &SuggestionResponse<Self::Record>,
    ) -> SuggestionResponse<Self::Record> {
        response.clone()
    }

    /// Dropdown markup for one candidate.
    fn format_result(&self, suggestion: &Suggestion<Self::Record>, _typed: &str) -> String {
        suggestion.value.clone()
    }

    /// Composite binding over this controller's granular fields.
    fn sync_engine(&self) -> FieldSyncEngine {
        FieldSyncEngine::bind(self.composite(), self.fields().granular(), self.separator())
    }

    /// Binds composite synchronization into `form`.
    fn init<S: FieldStore>(&self, form: &mut Form<S>) {
        form.bind(self.sync_engine());
    }

    /// Selection callback: writes the canonical value into the composite and
    /// distributes the record into granular fields.
    ///
    /// Returns the composite value, or `None` for label-only selections.
    fn on_select<S: FieldStore>(
        &self,
        form: &mut Form<S>,
        suggestion: &Suggestion<Self::Record>,
    ) -> Option<String> {
        let Some(record) = suggestion.data.as_ref() else {
            debug!(
                "event=suggestion_select module={} status=skipped reason=no_payload",
                self.kind()
            );
            return None;
        };

        let selected = self.format_selected(record);
        form.set_value(self.composite(), &selected);
        let written = self.fields().distribute(Some(record), form.store_mut());
        debug!(
            "event=suggestion_select module={} status=ok fields_written={written}",
            self.kind()
        );
        Some(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::WidgetOptions;

    #[test]
    fn endpoint_url_has_single_slash() {
        let options = WidgetOptions::for_endpoint("https://h/api/", "/suggest/fio", None, true, None);
        assert_eq!(options.service_url, "https://h/api/suggest/fio");
    }
}
