use serde::{Deserialize, Serialize};

/// Поля, которые заполняет только бэкенд: владелец и метки времени
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditDto {
    /// Пользователь, создавший запись
    pub user_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Справочники без поля `active` считаются активными
pub fn default_active() -> bool {
    true
}
