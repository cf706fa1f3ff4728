use serde::{Deserialize, Serialize};

/// Ошибка разбора входящего DTO
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// Тело ошибки бэкенда: `{ "detail": ... }`
///
/// Обычно `detail` это строка, но ошибки валидации приходят списком
/// объектов `{ "loc": [...], "msg": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub detail: serde_json::Value,
}

impl ErrorEnvelope {
    /// Разобрать тело ответа как конверт ошибки
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Текст ошибки; `None`, если `detail` пустой или `null`
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(entries) => {
                let messages: Vec<String> = entries
                    .iter()
                    .map(|entry| match entry.get("msg").and_then(|m| m.as_str()) {
                        Some(msg) => msg.to_string(),
                        None => entry.to_string(),
                    })
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            other => Some(other.to_string()),
        }
    }
}
