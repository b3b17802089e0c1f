//! Client module - typed access to the records service
//!
//! [`RecordsApi`] turns entity operations into [`ApiRequest`]s and hands them
//! to a platform transport: `reqwest` outside the browser (`no-wasm`),
//! `gloo_net` inside it (`wasm`).

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

use crate::config::ApiConfig;
use crate::error::Result;
use crate::interface::{ApiRequest, Method, RequestApi};
use crate::model::dtos::RecordKey;
use crate::model::Entity;

/// Which request a save turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Created,
    Updated,
}

#[derive(Debug, Clone)]
pub struct RecordsApi<C> {
    client: C,
    config: ApiConfig,
}

impl<C: RequestApi> RecordsApi<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn list<E: Entity>(&self) -> Result<Vec<E>> {
        let url = self.config.url(E::ENDPOINTS.list);
        log::debug!("GET {url}");

        self.client
            .send(ApiRequest::get(url))
            .await?
            .ensure_success(|| format!("Failed to fetch {}", E::PLURAL))?
            .json()
    }

    pub async fn get<E: Entity>(&self, id: i64) -> Result<E> {
        let url = self.config.url(&E::ENDPOINTS.get_path(id));
        log::debug!("GET {url}");

        self.client
            .send(ApiRequest::get(url))
            .await?
            .ensure_success(|| format!("Failed to fetch {}", E::NOUN))?
            .json()
    }

    /// POST to the create endpoint for [`RecordKey::New`], PUT to the update
    /// endpoint otherwise. The response body is not read.
    pub async fn save<E: Entity>(&self, key: RecordKey, record: &E) -> Result<SaveAction> {
        let (method, path, action) = match key {
            RecordKey::New => (Method::Post, E::ENDPOINTS.create, SaveAction::Created),
            RecordKey::Existing(_) => (Method::Put, E::ENDPOINTS.update, SaveAction::Updated),
        };
        let url = self.config.url(path);
        let body = serde_json::to_value(record)?;
        log::debug!("{} {url} with body: {body}", method.as_str());

        self.client
            .send(ApiRequest::with_json(method, url, body))
            .await?
            .ensure_success(|| format!("Failed to save {}", E::NOUN))?;

        Ok(action)
    }

    pub async fn delete<E: Entity>(&self, id: i64) -> Result<()> {
        let url = self.config.url(&E::ENDPOINTS.delete_path(id));
        log::debug!("DELETE {url}");

        self.client
            .send(ApiRequest::delete(url))
            .await?
            .ensure_success(|| format!("Failed to delete {}", E::NOUN))?;

        Ok(())
    }
}
