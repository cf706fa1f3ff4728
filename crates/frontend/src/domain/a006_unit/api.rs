use contracts::domain::a006_unit::dto::{CreateUnitDto, UnitDto, UpdateUnitDto};

use super::model::Unit;
use crate::shared::http::ApiClient;
use crate::shared::resource::{Resource, ResourceService};

pub struct UnitResource;

impl Resource for UnitResource {
    type Dto = UnitDto;
    type Model = Unit;
    type Create = CreateUnitDto;
    type Update = UpdateUnitDto;

    const PATH: &'static str = "/api/units";
    const NAME: &'static str = "unit";

    fn update_id(data: &Self::Update) -> &str {
        &data.id
    }
}

pub type UnitService = ResourceService<UnitResource>;

pub fn unit_service(client: ApiClient) -> UnitService {
    UnitService::new(client)
}
