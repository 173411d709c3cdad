use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::item::{Item, ItemDraft, ItemId};

/// The remote item collection.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait ItemApi {
    async fn list(&self) -> Result<Vec<Item>, ApiError>;
    async fn create(&self, draft: &ItemDraft) -> Result<(), ApiError>;
    async fn update(&self, id: &ItemId, draft: &ItemDraft) -> Result<(), ApiError>;
    async fn delete(&self, id: &ItemId) -> Result<(), ApiError>;
}

/// [`ItemApi`] over HTTP: `GET`/`POST` on the collection, `PUT`/`DELETE` on `{collection}/{id}`.
pub struct HttpItemApi {
    client: Client,
    config: ClientConfig,
}

impl HttpItemApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&ItemDraft>,
    ) -> Result<Response, ApiError> {
        debug!(%method, %url, "sending request");
        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(draft) = body {
            request = request.json(draft);
        }

        let response = request.send().await.map_err(|source| ApiError::Transport {
            method: method.clone(),
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl ItemApi for HttpItemApi {
    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        let url = self.config.collection_url();
        let response = self.send(Method::GET, url.clone(), None).await?;
        response
            .json::<Vec<Item>>()
            .await
            .map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            })
    }

    async fn create(&self, draft: &ItemDraft) -> Result<(), ApiError> {
        self.send(Method::POST, self.config.collection_url(), Some(draft))
            .await?;
        Ok(())
    }

    async fn update(&self, id: &ItemId, draft: &ItemDraft) -> Result<(), ApiError> {
        self.send(Method::PUT, self.config.item_url(id), Some(draft))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ApiError> {
        self.send(Method::DELETE, self.config.item_url(id), None).await?;
        Ok(())
    }
}
