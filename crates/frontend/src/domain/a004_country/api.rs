use contracts::domain::a004_country::dto::{CountryDto, CreateCountryDto, UpdateCountryDto};

use super::model::Country;
use crate::shared::http::ApiClient;
use crate::shared::resource::{Resource, ResourceService};

pub struct CountryResource;

impl Resource for CountryResource {
    type Dto = CountryDto;
    type Model = Country;
    type Create = CreateCountryDto;
    type Update = UpdateCountryDto;

    const PATH: &'static str = "/api/countries";
    const NAME: &'static str = "country";

    fn update_id(data: &Self::Update) -> &str {
        &data.id
    }
}

pub type CountryService = ResourceService<CountryResource>;

pub fn country_service(client: ApiClient) -> CountryService {
    CountryService::new(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::ListQuery;
    use crate::shared::http::mock::{client_with, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_with_query() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            json!({
                "total": 31,
                "items": [{
                    "id": "ar", "code": "AR", "name": "Argentina",
                    "active": false, "user_id": "u1",
                    "created_at": "2024-02-01T10:00:00Z", "updated_at": "2024-03-01T10:00:00Z"
                }]
            }),
        );
        let service = country_service(client_with(&mock));

        let query = ListQuery::page(30, 10).with_search("arg");
        let page = service.list_with(&query, "tok").await.unwrap();

        assert_eq!(page.total, 31);
        assert_eq!(page.items.len(), 1);
        let country = &page.items[0];
        assert_eq!(country.code, "AR");
        assert!(!country.active);
        assert_eq!(
            country.audit.updated_at.as_deref(),
            Some("2024-03-01T10:00:00Z")
        );
        assert_eq!(
            mock.last_request().url,
            "http://api.test/api/countries?skip=30&limit=10&search=arg"
        );
    }

    #[tokio::test]
    async fn test_unmap_restores_listed_dto() {
        let raw = json!({
            "id": "cl", "code": "CL", "name": "Chile", "description": "South America",
            "active": true, "user_id": "u2", "created_at": null, "updated_at": null
        });
        let mock = MockTransport::new();
        mock.respond_json(200, raw.clone());
        let service = country_service(client_with(&mock));

        let country = service.get("cl", "tok").await.unwrap();

        assert_eq!(serde_json::to_value(CountryDto::from(country)).unwrap(), raw);
    }
}
