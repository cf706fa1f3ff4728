use contracts::domain::a001_brand::dto::{BrandDto, CreateBrandDto, UpdateBrandDto};

use super::model::Brand;
use crate::shared::http::ApiClient;
use crate::shared::resource::{Resource, ResourceService};

pub struct BrandResource;

impl Resource for BrandResource {
    type Dto = BrandDto;
    type Model = Brand;
    type Create = CreateBrandDto;
    type Update = UpdateBrandDto;

    const PATH: &'static str = "/api/brands";
    const NAME: &'static str = "brand";

    fn update_id(data: &Self::Update) -> &str {
        &data.id
    }
}

pub type BrandService = ResourceService<BrandResource>;

pub fn brand_service(client: ApiClient) -> BrandService {
    BrandService::new(client)
}
