use serde::{Deserialize, Serialize};

use crate::domain::common::{default_active, AuditDto};

/// Условие оплаты (отсрочка в днях)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTermDto {
    pub id: String,
    pub code: String,
    pub name: String,
    /// Отсрочка платежа, дней
    pub net_days: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// DTO для создания условия оплаты
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentTermDto {
    pub code: String,
    pub name: String,
    pub net_days: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// DTO для частичного обновления условия оплаты
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePaymentTermDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UpdatePaymentTermDto {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
