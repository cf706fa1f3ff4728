use contracts::domain::a006_unit::dto::UnitDto;
use serde::{Deserialize, Serialize};

use crate::domain::common::Audit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Unit {
    /// Short label for tables: the symbol when set, otherwise the name.
    pub fn short_label(&self) -> &str {
        self.symbol.as_deref().unwrap_or(&self.name)
    }
}

pub fn map_unit(dto: UnitDto) -> Unit {
    Unit {
        id: dto.id,
        code: dto.code,
        name: dto.name,
        symbol: dto.symbol,
        description: dto.description,
        active: dto.active,
        audit: dto.audit.into(),
    }
}

impl From<UnitDto> for Unit {
    fn from(dto: UnitDto) -> Self {
        map_unit(dto)
    }
}

impl From<Unit> for UnitDto {
    fn from(unit: Unit) -> Self {
        UnitDto {
            id: unit.id,
            code: unit.code,
            name: unit.name,
            symbol: unit.symbol,
            description: unit.description,
            active: unit.active,
            audit: unit.audit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_code_and_symbol() {
        let dto: UnitDto = serde_json::from_value(json!({
            "id": "u-kg", "name": "Kilogram", "symbol": "kg", "code": null, "user_id": "u1"
        }))
        .unwrap();

        let unit = map_unit(dto.clone());

        assert_eq!(unit.code, None);
        assert_eq!(unit.short_label(), "kg");
        assert_eq!(UnitDto::from(unit), dto);
    }
}
