//! Suggestion engine configuration.
//!
//! # Responsibility
//! - Decode per-deployment settings from JSON (string or file).
//! - Validate settings before controllers are built from them.
//!
//! # Invariants
//! - Every setting has a default; an empty JSON object is a valid config.
//! - A config that passed `validate` always builds controllers.

use crate::field::distribute::{AddressFields, FullnameFields};
use crate::field::store::FieldId;
use crate::search::transform::DropWindow;
use crate::text::joiner::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default base URL of the suggestion service.
pub const DEFAULT_SERVICE_URL: &str = "https://suggestions.dadata.ru/suggestions/api/4_1/rs";
/// Default dropdown height for address suggestions, in pixels.
pub const DEFAULT_ADDRESS_MAX_HEIGHT: u32 = 310;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration load/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    EmptyServiceUrl,
    EmptyFieldId(&'static str),
    DuplicateFieldId(String),
    /// Escaped bias keyword still failed to compile (size limits).
    InvalidBiasKeyword(regex::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid config json: {err}"),
            Self::EmptyServiceUrl => write!(f, "service_url must not be empty"),
            Self::EmptyFieldId(name) => write!(f, "field id must not be empty: {name}"),
            Self::DuplicateFieldId(value) => write!(f, "field id is bound twice: {value}"),
            Self::InvalidBiasKeyword(err) => write!(f, "invalid bias keyword: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::InvalidBiasKeyword(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<regex::Error> for ConfigError {
    fn from(value: regex::Error) -> Self {
        Self::InvalidBiasKeyword(value)
    }
}

/// Top-level configuration shared by all suggestion controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Service base URL; endpoints are appended per controller.
    pub service_url: String,
    /// Opaque access token forwarded to the widget.
    pub token: Option<String>,
    /// Whether the widget selects the highlighted candidate on space.
    pub select_on_space: bool,
    pub address: AddressConfig,
    pub fullname: FullnameConfig,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            token: None,
            select_on_space: true,
            address: AddressConfig::default(),
            fullname: FullnameConfig::default(),
        }
    }
}

/// Address controller settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    pub composite: FieldId,
    pub fields: AddressFields,
    /// Keyword prepended to queries that lack it; `null` disables the bias.
    pub bias_keyword: Option<String>,
    /// Index window dropped from every result list; `null` keeps all.
    pub drop_window: Option<DropWindow>,
    /// Literal prefix stripped from display values; `null` keeps values.
    pub strip_prefix: Option<String>,
    /// Separator between groups of the selected value.
    pub selected_separator: String,
    pub max_height: Option<u32>,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            composite: "address".to_string(),
            fields: AddressFields::default(),
            bias_keyword: Some("Москва".to_string()),
            drop_window: Some(DropWindow::new(7, 3)),
            strip_prefix: Some("Россия, ".to_string()),
            selected_separator: DEFAULT_SEPARATOR.to_string(),
            max_height: Some(DEFAULT_ADDRESS_MAX_HEIGHT),
        }
    }
}

/// Person-name controller settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullnameConfig {
    pub composite: FieldId,
    pub fields: FullnameFields,
    pub max_height: Option<u32>,
}

impl Default for FullnameConfig {
    fn default() -> Self {
        Self {
            composite: "fullname".to_string(),
            fields: FullnameFields::default(),
            max_height: None,
        }
    }
}

impl SuggestConfig {
    /// Decodes and validates a config from JSON text.
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, decodes and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Validates declaration-level invariants.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.service_url.trim().is_empty() {
            return Err(ConfigError::EmptyServiceUrl);
        }

        let address = &self.address.fields;
        let fullname = &self.fullname.fields;
        let bindings = [
            ("address.composite", &self.address.composite),
            ("address.fields.postal_code", &address.postal_code),
            ("address.fields.region", &address.region),
            ("address.fields.city", &address.city),
            ("address.fields.street", &address.street),
            ("address.fields.house", &address.house),
            ("fullname.composite", &self.fullname.composite),
            ("fullname.fields.surname", &fullname.surname),
            ("fullname.fields.name", &fullname.name),
            ("fullname.fields.patronymic", &fullname.patronymic),
        ];

        let mut seen = BTreeSet::<&str>::new();
        for (name, field) in bindings {
            let normalized = field.trim();
            if normalized.is_empty() {
                return Err(ConfigError::EmptyFieldId(name));
            }
            if !seen.insert(normalized) {
                return Err(ConfigError::DuplicateFieldId(normalized.to_string()));
            }
        }
        Ok(())
    }
}
