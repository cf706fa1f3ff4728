use contracts::domain::a002_category::dto::CategoryDto;
use serde::{Deserialize, Serialize};

/// Category view-model.
///
/// Unlike the other reference entities the owner and timestamps are
/// optional here, matching what the categories endpoint guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

pub fn map_category(dto: CategoryDto) -> Category {
    Category {
        id: dto.id,
        code: dto.code,
        name: dto.name,
        description: dto.description,
        active: dto.active,
        user_id: dto.user_id,
        created_at: dto.created_at,
        updated_at: dto.updated_at,
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        map_category(dto)
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        CategoryDto {
            id: category.id,
            code: category.code,
            name: category.name,
            description: category.description,
            active: category.active,
            user_id: category.user_id,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_input_is_normalized() {
        let dto: CategoryDto = serde_json::from_value(json!({
            "id": "c1",
            "name": "Drinks",
            "active": 1,
            "code": null
        }))
        .unwrap();

        let category = map_category(dto.clone());

        assert!(category.active);
        assert_eq!(category.code, None);
        assert_eq!(category.user_id, None);
        assert_eq!(CategoryDto::from(category), dto);
    }

    #[test]
    fn test_model_json_omits_absent_fields() {
        let dto: CategoryDto =
            serde_json::from_value(json!({ "id": "c2", "name": "Snacks", "active": "" })).unwrap();
        let value = serde_json::to_value(map_category(dto)).unwrap();
        assert_eq!(value, json!({ "id": "c2", "name": "Snacks", "active": false }));
    }
}
