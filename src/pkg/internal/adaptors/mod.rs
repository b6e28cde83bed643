pub mod applications;
pub mod companies;
pub mod jobs;

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    pkg::internal::{client::ApiClient, forms::ValidateDraft},
    prelude::Result,
};

/// A persisted record type with a server-assigned identifier.
pub trait EntityRecord: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The record minus everything the server assigns. This is the create
    /// payload and the editable part of the form.
    type Draft: Serialize + ValidateDraft + Clone + Default + Send + Sync;

    /// Path segment under the API base url, e.g. `company`.
    const SEGMENT: &'static str;
    /// Human name used in notifications, e.g. `Company`.
    const NOUN: &'static str;

    fn id(&self) -> &str;
    fn from_parts(id: String, draft: Self::Draft) -> Self;
    fn into_parts(self) -> (String, Self::Draft);
}

/// One generic client instead of a copy-pasted service object per entity.
/// Each operation issues exactly one request and surfaces failure to the
/// caller; error presentation is the workflow layer's job.
#[derive(Debug, Clone)]
pub struct EntityAdaptor<T> {
    client: ApiClient,
    _record: PhantomData<T>,
}

impl<T: EntityRecord> EntityAdaptor<T> {
    pub fn new(client: ApiClient) -> Self {
        EntityAdaptor {
            client,
            _record: PhantomData,
        }
    }

    /// `GET {base}/{entity}?offset={n}`. No page size is sent; the server
    /// default applies.
    pub async fn list(&self, offset: u32) -> Result<Vec<T>> {
        let url = self.client.url(&format!("/{}", T::SEGMENT));
        let response = self
            .client
            .http()
            .get(url)
            .query(&[("offset", offset)])
            .send()
            .await?;
        ApiClient::read_json(response).await
    }

    /// `GET {base}/{entity}/{id}`. An unknown id surfaces as whatever the
    /// server answers, usually a 404 mapped to `Error::Api`.
    pub async fn get(&self, id: &str) -> Result<T> {
        let url = self.client.url(&format!("/{}/{}", T::SEGMENT, id));
        let response = self.client.http().get(url).send().await?;
        ApiClient::read_json(response).await
    }

    /// `POST {base}/{entity}/create`. The payload excludes the id; the
    /// created record comes back with it filled in.
    pub async fn create(&self, draft: &T::Draft) -> Result<T> {
        let url = self.client.url(&format!("/{}/create", T::SEGMENT));
        let response = self.client.http().post(url).json(draft).send().await?;
        ApiClient::read_json(response).await
    }

    /// `PUT {base}/{entity}/{id}`. Full-record replace, not a patch.
    pub async fn update(&self, record: &T) -> Result<T> {
        let url = self.client.url(&format!("/{}/{}", T::SEGMENT, record.id()));
        let response = self.client.http().put(url).json(record).send().await?;
        ApiClient::read_json(response).await
    }

    /// `DELETE {base}/{entity}/{id}`. Confirmation is the caller's
    /// responsibility, see `views::detail::DeleteFlow`.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = self.client.url(&format!("/{}/{}", T::SEGMENT, id));
        let response = self.client.http().delete(url).send().await?;
        ApiClient::check(response).await?;
        Ok(())
    }
}
