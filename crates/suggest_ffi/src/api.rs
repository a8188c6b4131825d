//! FFI use-case API for Flutter-facing suggestion forms.
//!
//! # Responsibility
//! - Expose the engine hooks to Dart via FRB as sync, JSON-in/value-out calls.
//! - Load deployment configuration once per process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Decode failures degrade to empty output and a `warn` event, never errors.
//! - Log events carry sizes only, never typed text or payload values.

use log::warn;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use suggest_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, join,
    ping as ping_inner, AddressData, AddressSuggestions, ConfigResult, FieldDistributor,
    FieldWrite, FullnameData, FullnameSuggestions, SearchRequest, Suggestion, SuggestConfig,
    SuggestionHooks, SuggestionResponse, WidgetOptions, DEFAULT_SEPARATOR,
};

const CONFIG_PATH_ENV: &str = "SUGGEST_CONFIG_PATH";
const EMPTY_RESPONSE_JSON: &str = r#"{"suggestions":[]}"#;

static CONTROLLERS: OnceLock<Option<Controllers>> = OnceLock::new();

struct Controllers {
    address: AddressSuggestions,
    fullname: FullnameSuggestions,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose engine crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes engine logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One granular field write the UI applies after a selection.
///
/// # FFI contract
/// - FRB-owned mirror of `suggest_core::FieldWrite`, so core types stay free of
///   bridge codegen; writes keep the core plan's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    /// Field id, e.g. `address-city`.
    pub field: String,
    pub value: String,
}

/// Autocomplete widget options for one suggestion kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestWidgetOptions {
    pub service_url: String,
    pub token: Option<String>,
    pub select_on_space: bool,
    pub max_height: Option<u32>,
}

/// Joins granular values into a composite value.
///
/// `separator = None` uses `", "`. Used by the UI on every granular change.
#[flutter_rust_bridge::frb(sync)]
pub fn join_parts(parts: Vec<Option<String>>, separator: Option<String>) -> String {
    join(&parts, separator.as_deref().unwrap_or(DEFAULT_SEPARATOR))
}

/// Returns widget options for the address field.
#[flutter_rust_bridge::frb(sync)]
pub fn address_widget_options() -> SuggestWidgetOptions {
    with_controllers(|controllers| to_widget_options(controllers.address.widget_options()))
}

/// Returns widget options for the person-name field.
#[flutter_rust_bridge::frb(sync)]
pub fn fullname_widget_options() -> SuggestWidgetOptions {
    with_controllers(|controllers| to_widget_options(controllers.fullname.widget_options()))
}

/// Pre-search hook: biases an outgoing address query.
#[flutter_rust_bridge::frb(sync)]
pub fn address_augment_query(query: String) -> String {
    let request = SearchRequest::new(query);
    with_controllers(|controllers| controllers.address.on_search_start(&request).query)
}

/// Post-fetch hook: trims and cleans a raw address service response.
///
/// Returns the transformed response JSON; an undecodable response yields an
/// empty suggestion list.
#[flutter_rust_bridge::frb(sync)]
pub fn address_transform_result(response_json: String) -> String {
    let response = match SuggestionResponse::<AddressData>::from_json(&response_json) {
        Ok(response) => response,
        Err(err) => {
            warn!(
                "event=ffi_decode module=ffi status=error hook=transform_result bytes={} error={err}",
                response_json.len()
            );
            return EMPTY_RESPONSE_JSON.to_string();
        }
    };

    let transformed = with_controllers(|controllers| {
        Some(controllers.address.transform_result(&response))
    })
    .unwrap_or_else(|| SuggestionResponse::new(Vec::new()));
    transformed.to_json().unwrap_or_else(|err| {
        warn!("event=ffi_encode module=ffi status=error hook=transform_result error={err}");
        EMPTY_RESPONSE_JSON.to_string()
    })
}

/// Display hook: renders dropdown markup for one address candidate.
#[flutter_rust_bridge::frb(sync)]
pub fn address_format_result(suggestion_json: String, current_value: String) -> String {
    let Some(suggestion) = decode_suggestion::<AddressData>(&suggestion_json, "format_result")
    else {
        return String::new();
    };
    with_controllers(|controllers| {
        controllers
            .address
            .format_result(&suggestion, current_value.as_str())
    })
}

/// Selection hook: canonical address value, empty for label-only candidates.
#[flutter_rust_bridge::frb(sync)]
pub fn address_format_selected(suggestion_json: String) -> String {
    let Some(address) = decode_payload::<AddressData>(&suggestion_json, "format_selected") else {
        return String::new();
    };
    with_controllers(|controllers| controllers.address.format_selected(&address))
}

/// Selection hook: granular address writes, empty for label-only candidates.
#[flutter_rust_bridge::frb(sync)]
pub fn address_distribute(suggestion_json: String) -> Vec<FieldValue> {
    let Some(address) = decode_payload::<AddressData>(&suggestion_json, "distribute") else {
        return Vec::new();
    };
    with_controllers(|controllers| to_field_values(controllers.address.fields().plan(&address)))
}

/// Selection hook: canonical person name, empty for label-only candidates.
#[flutter_rust_bridge::frb(sync)]
pub fn fullname_format_selected(suggestion_json: String) -> String {
    let Some(fullname) = decode_payload::<FullnameData>(&suggestion_json, "format_selected")
    else {
        return String::new();
    };
    with_controllers(|controllers| controllers.fullname.format_selected(&fullname))
}

/// Selection hook: granular person-name writes; absent parts are omitted.
#[flutter_rust_bridge::frb(sync)]
pub fn fullname_distribute(suggestion_json: String) -> Vec<FieldValue> {
    let Some(fullname) = decode_payload::<FullnameData>(&suggestion_json, "distribute") else {
        return Vec::new();
    };
    with_controllers(|controllers| {
        to_field_values(controllers.fullname.fields().plan(&fullname))
    })
}

fn with_controllers<T: Default>(f: impl FnOnce(&Controllers) -> T) -> T {
    CONTROLLERS
        .get_or_init(|| {
            let configured = resolve_config();
            build_controllers(&configured)
                .or_else(|err| {
                    warn!("event=ffi_config module=ffi status=fallback error={err}");
                    build_controllers(&SuggestConfig::default())
                })
                .map_err(|err| warn!("event=ffi_config module=ffi status=error error={err}"))
                .ok()
        })
        .as_ref()
        .map(f)
        .unwrap_or_default()
}

fn resolve_config() -> SuggestConfig {
    let Ok(raw) = std::env::var(CONFIG_PATH_ENV) else {
        return SuggestConfig::default();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return SuggestConfig::default();
    }
    SuggestConfig::load(trimmed).unwrap_or_else(|err| {
        warn!("event=ffi_config module=ffi status=fallback error={err}");
        SuggestConfig::default()
    })
}

fn build_controllers(config: &SuggestConfig) -> ConfigResult<Controllers> {
    Ok(Controllers {
        address: AddressSuggestions::from_config(config)?,
        fullname: FullnameSuggestions::from_config(config)?,
    })
}

fn decode_suggestion<D>(raw: &str, hook: &str) -> Option<Suggestion<D>>
where
    D: DeserializeOwned,
{
    match Suggestion::<D>::from_json(raw) {
        Ok(suggestion) => Some(suggestion),
        Err(err) => {
            warn!(
                "event=ffi_decode module=ffi status=error hook={hook} bytes={} error={err}",
                raw.len()
            );
            None
        }
    }
}

fn decode_payload<D: DeserializeOwned>(raw: &str, hook: &str) -> Option<D> {
    decode_suggestion::<D>(raw, hook).and_then(|suggestion| suggestion.data)
}

fn to_field_values(writes: Vec<FieldWrite>) -> Vec<FieldValue> {
    writes
        .into_iter()
        .map(|write| FieldValue {
            field: write.field,
            value: write.value,
        })
        .collect()
}

fn to_widget_options(options: &WidgetOptions) -> SuggestWidgetOptions {
    SuggestWidgetOptions {
        service_url: options.service_url.clone(),
        token: options.token.clone(),
        select_on_space: options.select_on_space,
        max_height: options.max_height,
    }
}
