//! Suggestion envelope, service response and outgoing search request.
//!
//! # Invariants
//! - `data` is `None` for label-only suggestions; such selections are no-ops.
//! - Decoding never requires any structured attribute.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for payload decode/encode helpers.
pub type PayloadResult<T> = Result<T, PayloadError>;

/// Wire payload decode/encode error.
#[derive(Debug)]
pub enum PayloadError {
    /// Input is not valid JSON for the expected shape.
    Json(serde_json::Error),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid suggestion payload: {err}"),
        }
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// One candidate returned by the suggestion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "D: DeserializeOwned"))]
pub struct Suggestion<D> {
    /// Display string shown in the dropdown and copied on plain selection.
    pub value: String,
    /// Fully qualified display string, when the service sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unrestricted_value: Option<String>,
    /// Structured payload; absent for label-only candidates.
    #[serde(default)]
    pub data: Option<D>,
}

impl<D> Suggestion<D> {
    /// Creates a label-only suggestion.
    pub fn label(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unrestricted_value: None,
            data: None,
        }
    }

    /// Creates a suggestion carrying structured data.
    pub fn with_data(value: impl Into<String>, data: D) -> Self {
        Self {
            value: value.into(),
            unrestricted_value: None,
            data: Some(data),
        }
    }
}

impl<D: DeserializeOwned> Suggestion<D> {
    /// Decodes one suggestion from JSON.
    pub fn from_json(raw: &str) -> PayloadResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Service response envelope: an ordered list of suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "D: DeserializeOwned"))]
pub struct SuggestionResponse<D> {
    #[serde(default)]
    pub suggestions: Vec<Suggestion<D>>,
}

impl<D> SuggestionResponse<D> {
    pub fn new(suggestions: Vec<Suggestion<D>>) -> Self {
        Self { suggestions }
    }
}

impl<D: DeserializeOwned> SuggestionResponse<D> {
    /// Decodes a service response from JSON.
    pub fn from_json(raw: &str) -> PayloadResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl<D: Serialize> SuggestionResponse<D> {
    /// Encodes this response back to JSON for the widget.
    pub fn to_json(&self) -> PayloadResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Outgoing search request sent to the suggestion service.
///
/// Keys other than `query` and `count` are kept in `extra` so a request
/// built by the widget survives a round trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Decodes a request from JSON.
    pub fn from_json(raw: &str) -> PayloadResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Encodes this request to JSON.
    pub fn to_json(&self) -> PayloadResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
