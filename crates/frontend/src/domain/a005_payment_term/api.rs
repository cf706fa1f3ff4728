use contracts::domain::a005_payment_term::dto::{
    CreatePaymentTermDto, PaymentTermDto, UpdatePaymentTermDto,
};

use super::model::PaymentTerm;
use crate::shared::http::ApiClient;
use crate::shared::resource::{Resource, ResourceService};

pub struct PaymentTermResource;

impl Resource for PaymentTermResource {
    type Dto = PaymentTermDto;
    type Model = PaymentTerm;
    type Create = CreatePaymentTermDto;
    type Update = UpdatePaymentTermDto;

    const PATH: &'static str = "/api/payment-terms";
    const NAME: &'static str = "payment term";

    fn update_id(data: &Self::Update) -> &str {
        &data.id
    }
}

pub type PaymentTermService = ResourceService<PaymentTermResource>;

pub fn payment_term_service(client: ApiClient) -> PaymentTermService {
    PaymentTermService::new(client)
}
