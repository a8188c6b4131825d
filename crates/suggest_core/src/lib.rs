//! Field synchronization and suggestion formatting engine.
//! This crate owns every rule that turns suggestion payloads into field
//! values; UI layers only forward events and apply writes.

pub mod config;
pub mod field;
pub mod format;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod text;

pub use config::{AddressConfig, ConfigError, ConfigResult, FullnameConfig, SuggestConfig};
pub use field::distribute::{AddressFields, FieldDistributor, FieldWrite, FullnameFields};
pub use field::form::Form;
pub use field::store::{FieldId, FieldStore, MemoryFieldStore};
pub use field::sync::FieldSyncEngine;
pub use format::address::AddressFormatter;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::address::AddressData;
pub use model::fullname::FullnameData;
pub use model::suggestion::{
    PayloadError, PayloadResult, SearchRequest, Suggestion, SuggestionResponse,
};
pub use search::augment::QueryAugmenter;
pub use search::transform::{DropWindow, ResultTransformer};
pub use service::address_suggestions::AddressSuggestions;
pub use service::fullname_suggestions::FullnameSuggestions;
pub use service::hooks::{SuggestionHooks, WidgetOptions};
pub use text::joiner::{join, join_default, join_pair, Part, DEFAULT_SEPARATOR, SPACE_SEPARATOR};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the engine crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
