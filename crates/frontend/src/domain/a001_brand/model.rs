use contracts::domain::a001_brand::dto::BrandDto;
use serde::{Deserialize, Serialize};

use crate::domain::common::Audit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    #[serde(flatten)]
    pub audit: Audit,
}

pub fn map_brand(dto: BrandDto) -> Brand {
    Brand {
        id: dto.id,
        code: dto.code,
        name: dto.name,
        description: dto.description,
        active: dto.active,
        audit: dto.audit.into(),
    }
}

impl From<BrandDto> for Brand {
    fn from(dto: BrandDto) -> Self {
        map_brand(dto)
    }
}

impl From<Brand> for BrandDto {
    fn from(brand: Brand) -> Self {
        BrandDto {
            id: brand.id,
            code: brand.code,
            name: brand.name,
            description: brand.description,
            active: brand.active,
            audit: brand.audit.into(),
        }
    }
}
