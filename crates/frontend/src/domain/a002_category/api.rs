use contracts::domain::a002_category::dto::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

use super::model::Category;
use crate::shared::http::ApiClient;
use crate::shared::resource::{Resource, ResourceService};

pub struct CategoryResource;

impl Resource for CategoryResource {
    type Dto = CategoryDto;
    type Model = Category;
    type Create = CreateCategoryDto;
    type Update = UpdateCategoryDto;

    const PATH: &'static str = "/api/categories";
    const NAME: &'static str = "category";

    fn update_id(data: &Self::Update) -> &str {
        &data.id
    }
}

pub type CategoryService = ResourceService<CategoryResource>;

pub fn category_service(client: ApiClient) -> CategoryService {
    CategoryService::new(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::{client_with, MockTransport};
    use crate::shared::http::ApiError;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_accepts_loose_items() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            json!({
                "total": 2,
                "items": [
                    { "id": "c1", "name": "Drinks", "active": 0 },
                    { "id": "c2", "name": "Snacks", "code": "SN", "user_id": "u1" }
                ]
            }),
        );
        let service = category_service(client_with(&mock));

        let page = service.list("tok").await.unwrap();

        assert_eq!(page.total, 2);
        assert!(!page.items[0].active);
        assert!(page.items[1].active);
        assert_eq!(page.items[1].code.as_deref(), Some("SN"));
        assert_eq!(mock.last_request().url, "http://api.test/api/categories");
    }

    #[tokio::test]
    async fn test_item_without_name_is_rejected_at_the_boundary() {
        let mock = MockTransport::new();
        mock.respond_json(200, json!({ "id": "c3", "active": true }));
        let service = category_service(client_with(&mock));

        let err = service.get("c3", "tok").await.unwrap_err();

        match err {
            ApiError::Decode(message) => assert!(message.contains("name"), "{}", message),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_reports_the_missing_field() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            json!({ "total": 1, "items": [{ "id": "c3", "active": true }] }),
        );
        let service = category_service(client_with(&mock));

        let err = service.list("tok").await.unwrap_err();

        match err {
            ApiError::Decode(message) => assert!(message.contains("`name`"), "{}", message),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_category() {
        let mock = MockTransport::new();
        mock.respond_json(201, json!({ "id": "c9", "name": "Frozen", "active": true }));
        let service = category_service(client_with(&mock));

        let data = CreateCategoryDto {
            name: "Frozen".into(),
            ..Default::default()
        };
        let created = service.create(&data, "tok").await.unwrap();

        assert_eq!(created.id, "c9");
        assert_eq!(mock.last_body(), json!({ "name": "Frozen" }));
    }
}
