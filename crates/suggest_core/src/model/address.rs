//! Address suggestion payload.

use serde::{Deserialize, Serialize};

/// Structured address attributes of one suggestion.
///
/// Every attribute is optional; `*_type` fields carry the short type label
/// ("г", "ул", "д") that is rendered in front of the matching name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressData {
    pub postal_code: Option<String>,
    /// Decoded for completeness; never rendered or distributed.
    pub country: Option<String>,
    pub region_type: Option<String>,
    pub region: Option<String>,
    pub area_type: Option<String>,
    pub area: Option<String>,
    pub city_type: Option<String>,
    pub city: Option<String>,
    pub settlement_type: Option<String>,
    pub settlement: Option<String>,
    pub street_type: Option<String>,
    pub street: Option<String>,
    pub house_type: Option<String>,
    pub house: Option<String>,
}
