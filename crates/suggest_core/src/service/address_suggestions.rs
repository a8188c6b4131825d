//! Address suggestion controller.
//!
//! # Responsibility
//! - Bias outgoing queries toward the configured region keyword.
//! - Trim and clean raw address results.
//! - Render two-line dropdown markup and canonical selected values.
//! - Distribute selected addresses into postal code/region/city/street/house.

use crate::config::{ConfigResult, SuggestConfig};
use crate::field::distribute::AddressFields;
use crate::field::store::FieldId;
use crate::format::address::AddressFormatter;
use crate::model::address::AddressData;
use crate::model::suggestion::{SearchRequest, Suggestion, SuggestionResponse};
use crate::search::augment::QueryAugmenter;
use crate::search::transform::ResultTransformer;
use crate::service::hooks::{SuggestionHooks, WidgetOptions};
use crate::text::joiner::DEFAULT_SEPARATOR;
use log::debug;

/// Service endpoint for address suggestions.
pub const ADDRESS_ENDPOINT: &str = "suggest/address";

/// Suggestion controller for one address form.
#[derive(Debug, Clone)]
pub struct AddressSuggestions {
    composite: FieldId,
    fields: AddressFields,
    augmenter: QueryAugmenter,
    transformer: ResultTransformer,
    formatter: AddressFormatter,
    options: WidgetOptions,
}

impl AddressSuggestions {
    /// Builds a controller from validated configuration.
    pub fn from_config(config: &SuggestConfig) -> ConfigResult<Self> {
        config.validate()?;
        let address = &config.address;
        Ok(Self {
            composite: address.composite.clone(),
            fields: address.fields.clone(),
            augmenter: QueryAugmenter::new(address.bias_keyword.as_deref())?,
            transformer: ResultTransformer::new(address.drop_window, address.strip_prefix.clone()),
            formatter: AddressFormatter::new(address.selected_separator.clone()),
            options: WidgetOptions::for_endpoint(
                &config.service_url,
                ADDRESS_ENDPOINT,
                config.token.clone(),
                config.select_on_space,
                address.max_height,
            ),
        })
    }

    /// Builds a controller with default settings for the given bindings.
    pub fn new(composite: impl Into<FieldId>, fields: AddressFields) -> ConfigResult<Self> {
        let mut config = SuggestConfig::default();
        config.address.composite = composite.into();
        config.address.fields = fields;
        Self::from_config(&config)
    }

    pub fn augmenter(&self) -> &QueryAugmenter {
        &self.augmenter
    }

    pub fn transformer(&self) -> &ResultTransformer {
        &self.transformer
    }

    pub fn formatter(&self) -> &AddressFormatter {
        &self.formatter
    }
}

impl SuggestionHooks for AddressSuggestions {
    type Record = AddressData;
    type Fields = AddressFields;

    fn kind(&self) -> &'static str {
        "address"
    }

    fn composite(&self) -> &str {
        &self.composite
    }

    fn separator(&self) -> &str {
        DEFAULT_SEPARATOR
    }

    fn fields(&self) -> &AddressFields {
        &self.fields
    }

    fn widget_options(&self) -> &WidgetOptions {
        &self.options
    }

    fn format_selected(&self, address: &AddressData) -> String {
        self.formatter.format_selected(address)
    }

    fn on_search_start(&self, request: &SearchRequest) -> SearchRequest {
        self.augmenter.apply(request)
    }

    fn transform_result(
        &self,
        response: &SuggestionResponse<AddressData>,
    ) -> SuggestionResponse<AddressData> {
        let transformed = self.transformer.transform_response(response);
        debug!(
            "event=suggestion_transform module=address status=ok received={} kept={}",
            response.suggestions.len(),
            transformed.suggestions.len()
        );
        transformed
    }

    fn format_result(&self, suggestion: &Suggestion<AddressData>, typed: &str) -> String {
        self.formatter.format_result(suggestion, typed)
    }
}
