use contracts::domain::a003_concept::dto::{ConceptDto, CreateConceptDto, UpdateConceptDto};

use super::model::Concept;
use crate::shared::http::ApiClient;
use crate::shared::resource::{Resource, ResourceService};

pub struct ConceptResource;

impl Resource for ConceptResource {
    type Dto = ConceptDto;
    type Model = Concept;
    type Create = CreateConceptDto;
    type Update = UpdateConceptDto;

    const PATH: &'static str = "/api/concepts";
    const NAME: &'static str = "concept";

    fn update_id(data: &Self::Update) -> &str {
        &data.id
    }
}

pub type ConceptService = ResourceService<ConceptResource>;

pub fn concept_service(client: ApiClient) -> ConceptService {
    ConceptService::new(client)
}
