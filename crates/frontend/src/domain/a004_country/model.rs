use contracts::domain::a004_country::dto::CountryDto;
use serde::{Deserialize, Serialize};

use crate::domain::common::Audit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: String,
    /// ISO code
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    #[serde(flatten)]
    pub audit: Audit,
}

pub fn map_country(dto: CountryDto) -> Country {
    Country {
        id: dto.id,
        code: dto.code,
        name: dto.name,
        description: dto.description,
        active: dto.active,
        audit: dto.audit.into(),
    }
}

impl From<CountryDto> for Country {
    fn from(dto: CountryDto) -> Self {
        map_country(dto)
    }
}

impl From<Country> for CountryDto {
    fn from(country: Country) -> Self {
        CountryDto {
            id: country.id,
            code: country.code,
            name: country.name,
            description: country.description,
            active: country.active,
            audit: country.audit.into(),
        }
    }
}
