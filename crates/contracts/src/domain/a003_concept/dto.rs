use serde::{Deserialize, Serialize};

use crate::domain::common::{default_active, AuditDto};

/// Концепт (статья операции) с парой счетов дебет/кредит
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptDto {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Счёт дебета (id существующего счёта)
    pub debit_account_id: String,
    #[serde(default)]
    pub debit_account_name: Option<String>,
    /// Счёт кредита (id существующего счёта)
    pub credit_account_id: String,
    #[serde(default)]
    pub credit_account_name: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// DTO для создания концепта
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateConceptDto {
    pub code: String,
    pub name: String,
    pub debit_account_id: String,
    pub credit_account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// DTO для частичного обновления концепта
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateConceptDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UpdateConceptDto {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
