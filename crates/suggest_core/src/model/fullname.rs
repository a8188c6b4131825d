//! Person-name suggestion payload.

use serde::{Deserialize, Serialize};

/// Structured person-name attributes of one suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullnameData {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    /// Service-side guess (`MALE|FEMALE|UNKNOWN`); decoded, never rendered.
    pub gender: Option<String>,
}
