use contracts::domain::a003_concept::dto::ConceptDto;
use serde::{Deserialize, Serialize};

use crate::domain::common::Audit;

/// Reference to a ledger account with its display name when the backend sent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AccountRef {
    /// Display name, falling back to the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Concept with its double-entry pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub debit: AccountRef,
    pub credit: AccountRef,
    pub active: bool,
    #[serde(flatten)]
    pub audit: Audit,
}

pub fn map_concept(dto: ConceptDto) -> Concept {
    Concept {
        id: dto.id,
        code: dto.code,
        name: dto.name,
        description: dto.description,
        debit: AccountRef {
            id: dto.debit_account_id,
            name: dto.debit_account_name,
        },
        credit: AccountRef {
            id: dto.credit_account_id,
            name: dto.credit_account_name,
        },
        active: dto.active,
        audit: dto.audit.into(),
    }
}

impl From<ConceptDto> for Concept {
    fn from(dto: ConceptDto) -> Self {
        map_concept(dto)
    }
}

impl From<Concept> for ConceptDto {
    fn from(concept: Concept) -> Self {
        ConceptDto {
            id: concept.id,
            code: concept.code,
            name: concept.name,
            description: concept.description,
            debit_account_id: concept.debit.id,
            debit_account_name: concept.debit.name,
            credit_account_id: concept.credit.id,
            credit_account_name: concept.credit.name,
            active: concept.active,
            audit: concept.audit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sale_dto() -> ConceptDto {
        serde_json::from_value(json!({
            "id": "k1",
            "code": "SALE",
            "name": "Cash sale",
            "debit_account_id": "acc-cash",
            "debit_account_name": "Cash",
            "credit_account_id": "acc-rev",
            "credit_account_name": null,
            "active": true,
            "user_id": "u1",
            "created_at": null,
            "updated_at": null
        }))
        .unwrap()
    }

    #[test]
    fn test_account_pair_is_preserved() {
        let concept = map_concept(sale_dto());

        assert_eq!(concept.debit.id, "acc-cash");
        assert_eq!(concept.debit.label(), "Cash");
        assert_eq!(concept.credit.id, "acc-rev");
        assert_eq!(concept.credit.name, None);
        assert_eq!(concept.credit.label(), "acc-rev");
    }

    #[test]
    fn test_unmap_restores_dto() {
        let dto = sale_dto();
        assert_eq!(ConceptDto::from(map_concept(dto.clone())), dto);
    }
}
