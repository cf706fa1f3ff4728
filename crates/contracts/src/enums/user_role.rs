use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Роль пользователя системы продаж
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Manager,
    Seller,
    /// Роль, которую клиент не знает; код бэкенда хранится как есть
    Other(String),
}

impl UserRole {
    /// Код роли в API
    pub fn code(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Seller => "seller",
            UserRole::Other(code) => code,
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Manager => "Manager",
            UserRole::Seller => "Seller",
            UserRole::Other(code) => code,
        }
    }

    /// Роли, которые можно назначить из интерфейса
    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::Manager, UserRole::Seller]
    }

    /// Парсинг из строки (только известные роли)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            "seller" => Some(UserRole::Seller),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, UserRole::Other(_))
    }
}

impl From<String> for UserRole {
    fn from(code: String) -> Self {
        UserRole::from_code(&code).unwrap_or(UserRole::Other(code))
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(UserRole::from)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
