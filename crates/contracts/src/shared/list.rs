use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Конверт постраничного списка: `{ "total": N, "items": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub total: u64,
    pub items: Vec<T>,
}

/// Тело ответа списка. Часть эндпоинтов отдаёт голый массив без конверта.
///
/// Вариант выбирается по форме JSON (объект или массив), поэтому ошибка
/// разбора элемента доходит до вызывающего без изменений.
#[derive(Debug, Clone)]
pub enum ListBody<T> {
    Envelope(ListEnvelope<T>),
    Plain(Vec<T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ListBody<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Object(_) => ListEnvelope::deserialize(value)
                .map(ListBody::Envelope)
                .map_err(D::Error::custom),
            serde_json::Value::Array(_) => Vec::deserialize(value)
                .map(ListBody::Plain)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected a list envelope or an array, got {}",
                other
            ))),
        }
    }
}

impl<T> From<ListBody<T>> for ListEnvelope<T> {
    fn from(body: ListBody<T>) -> Self {
        match body {
            ListBody::Envelope(envelope) => envelope,
            ListBody::Plain(items) => ListEnvelope {
                total: items.len() as u64,
                items,
            },
        }
    }
}

/// Параметры запроса списка (`?skip=&limit=&search=`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    pub fn page(skip: u32, limit: u32) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.skip.is_none() && self.limit.is_none() && self.search.is_none()
    }
}
