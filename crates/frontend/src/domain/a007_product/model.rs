use contracts::domain::a007_product::dto::ProductDto;
use serde::{Deserialize, Serialize};

use crate::domain::common::Audit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    pub active: bool,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock.is_some_and(|stock| stock > 0.0)
    }
}

pub fn map_product(dto: ProductDto) -> Product {
    Product {
        id: dto.id,
        code: dto.code,
        name: dto.name,
        description: dto.description,
        price: dto.price,
        stock: dto.stock,
        brand_id: dto.brand_id,
        category_id: dto.category_id,
        unit_id: dto.unit_id,
        active: dto.active,
        audit: dto.audit.into(),
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        map_product(dto)
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        ProductDto {
            id: product.id,
            code: product.code,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            brand_id: product.brand_id,
            category_id: product.category_id,
            unit_id: product.unit_id,
            active: product.active,
            audit: product.audit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_references_renamed() {
        let dto: ProductDto = serde_json::from_value(json!({
            "id": "p1", "code": "SKU-1", "name": "Cola 0.5", "price": 1.25, "stock": 0,
            "brand_id": "b1", "category_id": null, "unit_id": "u-pcs",
            "user_id": "u1", "created_at": "2024-01-01T00:00:00Z", "updated_at": null
        }))
        .unwrap();

        let product = map_product(dto.clone());

        assert!(!product.in_stock());
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["brandId"], json!("b1"));
        assert_eq!(value["unitId"], json!("u-pcs"));
        assert!(value.get("categoryId").is_none());
        assert_eq!(ProductDto::from(product), dto);
    }

    #[test]
    fn test_absent_stock_stays_absent() {
        let dto: ProductDto = serde_json::from_value(json!({
            "id": "p2", "code": "SKU-2", "name": "Water", "price": 0.5, "user_id": "u1"
        }))
        .unwrap();

        let product = map_product(dto.clone());

        assert_eq!(product.stock, None);
        assert!(!product.in_stock());
        let back = ProductDto::from(product);
        assert_eq!(back, dto);
        assert_eq!(back.stock, None);
    }
}
