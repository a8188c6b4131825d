//! Person-name suggestion controller.

use crate::config::{ConfigResult, SuggestConfig};
use crate::field::distribute::FullnameFields;
use crate::field::store::FieldId;
use crate::format::fullname;
use crate::model::fullname::FullnameData;
use crate::service::hooks::{SuggestionHooks, WidgetOptions};
use crate::text::joiner::SPACE_SEPARATOR;

/// Service endpoint for person-name suggestions.
pub const FULLNAME_ENDPOINT: &str = "suggest/fio";

/// Suggestion controller for one person-name form.
///
/// Queries and results pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullnameSuggestions {
    composite: FieldId,
    fields: FullnameFields,
    options: WidgetOptions,
}

impl FullnameSuggestions {
    /// Builds a controller from validated configuration.
    pub fn from_config(config: &SuggestConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            composite: config.fullname.composite.clone(),
            fields: config.fullname.fields.clone(),
            options: WidgetOptions::for_endpoint(
                &config.service_url,
                FULLNAME_ENDPOINT,
                config.token.clone(),
                config.select_on_space,
                config.fullname.max_height,
            ),
        })
    }

    /// Builds a controller with default settings for the given bindings.
    pub fn new(composite: impl Into<FieldId>, fields: FullnameFields) -> ConfigResult<Self> {
        let mut config = SuggestConfig::default();
        config.fullname.composite = composite.into();
        config.fullname.fields = fields;
        Self::from_config(&config)
    }
}

impl SuggestionHooks for FullnameSuggestions {
    type Record = FullnameData;
    type Fields = FullnameFields;

    fn kind(&self) -> &'static str {
        "fullname"
    }

    fn composite(&self) -> &str {
        &self.composite
    }

    fn separator(&self) -> &str {
        SPACE_SEPARATOR
    }

    fn fields(&self) -> &FullnameFields {
        &self.fields
    }

    fn widget_options(&self) -> &WidgetOptions {
        &self.options
    }

    fn format_selected(&self, record: &FullnameData) -> String {
        fullname::format_selected(record)
    }
}
