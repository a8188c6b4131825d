//! Address candidate rendering.

use crate::model::address::AddressData;
use crate::model::suggestion::Suggestion;
use crate::text::highlight::highlight;
use crate::text::joiner::{join, join_default, join_pair, DEFAULT_SEPARATOR};

/// CSS class of the secondary (region) line in dropdown markup.
pub const REGION_LINE_CLASS: &str = "autocomplete-suggestion-region";
/// Markup between the region line and the street line.
pub const LINE_BREAK: &str = "<br>&nbsp;&nbsp;";

/// Renders address suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFormatter {
    selected_separator: String,
}

impl Default for AddressFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl AddressFormatter {
    /// Creates a formatter joining selected-value groups with `selected_separator`.
    pub fn new(selected_separator: impl Into<String>) -> Self {
        Self {
            selected_separator: selected_separator.into(),
        }
    }

    pub fn selected_separator(&self) -> &str {
        &self.selected_separator
    }

    /// Region line: region, area and city.
    pub fn region_line(address: &AddressData) -> String {
        join_default([
            address.region.clone().unwrap_or_default(),
            join_pair(address.area_type.as_deref(), address.area.as_deref()),
            join_pair(address.city_type.as_deref(), address.city.as_deref()),
        ])
    }

    /// Street line: settlement, street and house.
    pub fn street_line(address: &AddressData) -> String {
        join_default([
            join_pair(
                address.settlement_type.as_deref(),
                address.settlement.as_deref(),
            ),
            join_pair(address.street_type.as_deref(), address.street.as_deref()),
            join_pair(address.house_type.as_deref(), address.house.as_deref()),
        ])
    }

    /// Renders dropdown markup for one address, highlighting `typed` in the
    /// street line.
    pub fn format_for_display(&self, address: &AddressData, typed: &str) -> String {
        let region_line = Self::region_line(address);
        let street_line = Self::street_line(address);
        if street_line.is_empty() {
            return region_line;
        }

        format!(
            "<span class=\"{REGION_LINE_CLASS}\">{region_line}</span>{LINE_BREAK}{}",
            highlight(&street_line, typed)
        )
    }

    /// Renders dropdown markup for one candidate; label-only candidates
    /// render their display value.
    pub fn format_result(&self, suggestion: &Suggestion<AddressData>, typed: &str) -> String {
        match &suggestion.data {
            Some(address) => self.format_for_display(address, typed),
            None => suggestion.value.clone(),
        }
    }

    /// Renders the canonical selected value: every type+name pair except
    /// postal code and country.
    pub fn format_selected(&self, address: &AddressData) -> String {
        join(
            [
                join_pair(address.region_type.as_deref(), address.region.as_deref()),
                join_pair(address.area_type.as_deref(), address.area.as_deref()),
                join_pair(address.city_type.as_deref(), address.city.as_deref()),
                join_pair(
                    address.settlement_type.as_deref(),
                    address.settlement.as_deref(),
                ),
                join_pair(address.street_type.as_deref(), address.street.as_deref()),
                join_pair(address.house_type.as_deref(), address.house.as_deref()),
            ],
            &self.selected_separator,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::AddressFormatter;
    use crate::model::address::AddressData;
    use crate::model::suggestion::Suggestion;

    fn tverskaya() -> AddressData {
        AddressData {
            postal_code: Some("125009".to_string()),
            country: Some("Россия".to_string()),
            region_type: Some("г".to_string()),
            region: Some("Москва".to_string()),
            street_type: Some("ул".to_string()),
            street: Some("Тверская".to_string()),
            house_type: Some("д".to_string()),
            house: Some("7".to_string()),
            ..AddressData::default()
        }
    }

    #[test]
    fn display_has_region_line_and_highlighted_street_line() {
        let markup = AddressFormatter::default().format_for_display(&tverskaya(), "тверск");
        assert_eq!(
            markup,
            "<span class=\"autocomplete-suggestion-region\">Москва</span>\
             <br>&nbsp;&nbsp;ул <strong>Тверск</strong>ая, д 7"
        );
    }

    #[test]
    fn display_without_street_line_is_region_line_only() {
        let address = AddressData {
            region: Some("Тульская".to_string()),
            city_type: Some("г".to_string()),
            city: Some("Тула".to_string()),
            ..AddressData::default()
        };
        let markup = AddressFormatter::default().format_for_display(&address, "тула");
        assert_eq!(markup, "Тульская, г Тула");
    }

    #[test]
    fn label_only_candidate_renders_value() {
        let suggestion = Suggestion::<AddressData>::label("г Москва");
        assert_eq!(
            AddressFormatter::default().format_result(&suggestion, "мос"),
            "г Москва"
        );
    }

    #[test]
    fn selected_value_omits_postal_code_and_country() {
        let selected = AddressFormatter::default().format_selected(&tverskaya());
        assert_eq!(selected, "г Москва, ул Тверская, д 7");
    }

    #[test]
    fn selected_separator_is_configurable() {
        let address = AddressData {
            region: Some("Москва".to_string()),
            street_type: Some("ул".to_string()),
            street: Some("Ленина".to_string()),
            house: Some("5".to_string()),
            ..AddressData::default()
        };
        assert_eq!(
            AddressFormatter::new(" ").format_selected(&address),
            "Москва ул Ленина 5"
        );
    }
}
