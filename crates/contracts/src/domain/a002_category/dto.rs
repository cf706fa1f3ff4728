use serde::{Deserialize, Serialize};

use crate::shared::ContractError;

/// Категория в том виде, как её отдаёт бэкенд.
///
/// Эндпоинт категорий менее строгий, чем остальные справочники: любое поле
/// может отсутствовать, а `active` не всегда булево. Вход разбирается в
/// [`RawCategoryDto`] и проверяется, поэтому у `CategoryDto` всегда есть
/// `id` и `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCategoryDto")]
pub struct CategoryDto {
    pub id: String,
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub user_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Категория до проверки: все поля необязательны
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategoryDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Отсутствие поля и `null` различаются: без ключа категория активна
    #[serde(default, deserialize_with = "present")]
    pub active: Option<serde_json::Value>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Истинность в смысле JSON: `null`, `false`, `0` и `""` ложны
pub fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

impl TryFrom<RawCategoryDto> for CategoryDto {
    type Error = ContractError;

    fn try_from(raw: RawCategoryDto) -> Result<Self, Self::Error> {
        let id = raw.id.ok_or(ContractError::MissingField("id"))?;
        let name = raw.name.ok_or(ContractError::MissingField("name"))?;
        let active = raw.active.as_ref().map(is_truthy).unwrap_or(true);

        Ok(Self {
            id,
            code: raw.code,
            name,
            description: raw.description,
            active,
            user_id: raw.user_id,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

/// DTO для создания категории
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// DTO для частичного обновления категории
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCategoryDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UpdateCategoryDto {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
