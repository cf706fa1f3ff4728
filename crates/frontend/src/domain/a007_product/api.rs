use contracts::domain::a007_product::dto::{CreateProductDto, ProductDto, UpdateProductDto};

use super::model::Product;
use crate::shared::http::ApiClient;
use crate::shared::resource::{Resource, ResourceService};

pub struct ProductResource;

impl Resource for ProductResource {
    type Dto = ProductDto;
    type Model = Product;
    type Create = CreateProductDto;
    type Update = UpdateProductDto;

    const PATH: &'static str = "/products/";
    const NAME: &'static str = "product";

    fn update_id(data: &Self::Update) -> &str {
        &data.id
    }
}

pub type ProductService = ResourceService<ProductResource>;

pub fn product_service(client: ApiClient) -> ProductService {
    ProductService::new(client)
}
