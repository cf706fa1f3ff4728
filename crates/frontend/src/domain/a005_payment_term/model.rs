use contracts::domain::a005_payment_term::dto::PaymentTermDto;
use serde::{Deserialize, Serialize};

use crate::domain::common::Audit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTerm {
    pub id: String,
    pub code: String,
    pub name: String,
    pub net_days: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    #[serde(flatten)]
    pub audit: Audit,
}

impl PaymentTerm {
    /// Paid on delivery, no deferral.
    pub fn is_immediate(&self) -> bool {
        self.net_days <= 0
    }
}

pub fn map_payment_term(dto: PaymentTermDto) -> PaymentTerm {
    PaymentTerm {
        id: dto.id,
        code: dto.code,
        name: dto.name,
        net_days: dto.net_days,
        description: dto.description,
        active: dto.active,
        audit: dto.audit.into(),
    }
}

impl From<PaymentTermDto> for PaymentTerm {
    fn from(dto: PaymentTermDto) -> Self {
        map_payment_term(dto)
    }
}

impl From<PaymentTerm> for PaymentTermDto {
    fn from(term: PaymentTerm) -> Self {
        PaymentTermDto {
            id: term.id,
            code: term.code,
            name: term.name,
            net_days: term.net_days,
            description: term.description,
            active: term.active,
            audit: term.audit.into(),
        }
    }
}
