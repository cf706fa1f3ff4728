use serde::{Deserialize, Serialize};

use crate::domain::common::{default_active, AuditDto};

/// Страна
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDto {
    pub id: String,
    /// ISO-код страны
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// DTO для создания страны
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCountryDto {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// DTO для частичного обновления страны
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCountryDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UpdateCountryDto {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
