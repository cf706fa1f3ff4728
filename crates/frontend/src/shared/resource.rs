//! Generic CRUD facade over one REST collection.
//!
//! Every reference entity exposes the same five operations against
//! `{PATH}` and `{PATH}/{id}`; the per-entity `api` modules only bind the
//! DTO, model and payload types through [`Resource`].

use std::marker::PhantomData;

use contracts::shared::list::{ListBody, ListEnvelope, ListQuery};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::http::{ApiClient, ApiError, Method, RequestOptions};

/// Binds a REST collection to its wire and view-model types.
pub trait Resource {
    /// Read representation as returned by GET.
    type Dto: DeserializeOwned;
    /// Internal model the UI works with.
    type Model: From<Self::Dto>;
    /// POST body.
    type Create: Serialize;
    /// PUT body.
    type Update: Serialize;

    /// Collection path, e.g. `/api/brands`.
    const PATH: &'static str;
    /// Name used in logs.
    const NAME: &'static str;

    /// Id carried by an update payload.
    fn update_id(data: &Self::Update) -> &str;
}

/// One page of mapped items plus the backend's total count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

impl<D> From<ListEnvelope<D>> for Page<D> {
    fn from(envelope: ListEnvelope<D>) -> Self {
        Page {
            total: envelope.total,
            items: envelope.items,
        }
    }
}

/// Fetch a collection and unwrap `{ total, items }` (or a bare array).
pub(crate) async fn fetch_page<D: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    query: &ListQuery,
    token: &str,
) -> Result<Page<D>, ApiError> {
    let mut options = RequestOptions::new().bearer(token);
    if !query.is_empty() {
        options = options.query(query)?;
    }
    let body: ListBody<D> = client.request(Method::Get, path, options).await?;
    Ok(ListEnvelope::from(body).into())
}

/// `{collection}/{id}` with the id percent-encoded.
pub(crate) fn item_path(collection: &str, id: &str) -> String {
    format!(
        "{}/{}",
        collection.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

pub struct ResourceService<R> {
    client: ApiClient,
    _resource: PhantomData<R>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        R::PATH
    }

    pub async fn list(&self, token: &str) -> Result<Page<R::Model>, ApiError> {
        self.list_with(&ListQuery::default(), token).await
    }

    pub async fn list_with(
        &self,
        query: &ListQuery,
        token: &str,
    ) -> Result<Page<R::Model>, ApiError> {
        let page: Page<R::Dto> = fetch_page(&self.client, R::PATH, query, token).await?;
        log::debug!(
            "{}: loaded {} of {}",
            R::NAME,
            page.items.len(),
            page.total
        );
        Ok(page.map(Into::into))
    }

    pub async fn get(&self, id: &str, token: &str) -> Result<R::Model, ApiError> {
        let dto: R::Dto = self
            .client
            .request(
                Method::Get,
                &item_path(R::PATH, id),
                RequestOptions::new().bearer(token),
            )
            .await?;
        Ok(dto.into())
    }

    pub async fn create(&self, data: &R::Create, token: &str) -> Result<R::Model, ApiError> {
        let options = RequestOptions::new().bearer(token).json(data)?;
        let dto: R::Dto = self.client.request(Method::Post, R::PATH, options).await?;
        log::debug!("{}: created", R::NAME);
        Ok(dto.into())
    }

    pub async fn update(
        &self,
        id: &str,
        data: &R::Update,
        token: &str,
    ) -> Result<R::Model, ApiError> {
        let payload_id = R::update_id(data);
        if payload_id != id {
            return Err(ApiError::Encode(format!(
                "{} update for `{}` carries id `{}`",
                R::NAME,
                id,
                payload_id
            )));
        }
        let options = RequestOptions::new().bearer(token).json(data)?;
        let dto: R::Dto = self
            .client
            .request(Method::Put, &item_path(R::PATH, id), options)
            .await?;
        log::debug!("{}: updated {}", R::NAME, id);
        Ok(dto.into())
    }

    /// Delete by id. Whether the backend hard-deletes or deactivates is its call.
    pub async fn remove(&self, id: &str, token: &str) -> Result<(), ApiError> {
        self.client
            .execute(
                Method::Delete,
                &item_path(R::PATH, id),
                RequestOptions::new().bearer(token),
            )
            .await?;
        log::debug!("{}: removed {}", R::NAME, id);
        Ok(())
    }
}
