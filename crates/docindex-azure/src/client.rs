use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use std::time::Duration;
use tracing::debug;

use docindex_core::config::SearchSettings;
use docindex_core::index::IndexDefinition;
use docindex_core::traits::{DocumentIndex, SearchService};
use docindex_core::{BatchResult, Document};

use crate::error::AzureError;
use crate::wire::{IndexBatchPayload, IndexBatchResponse, IndexPayload};

/// Shared HTTP state for one search service: base URL, admin key, API version.
#[derive(Clone)]
pub struct Connection {
    http: Client,
    base_url: String,
    api_key: String,
    api_version: String,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl Connection {
    pub fn new(base_url: &str, api_key: &str, api_version: &str, timeout: Duration) -> Result<Self, AzureError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            api_version: api_version.to_string(),
        })
    }

    pub fn from_settings(settings: &SearchSettings) -> Result<Self, AzureError> {
        Self::new(
            &settings.base_url(),
            &settings.admin_api_key,
            &settings.api_version,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/{}", self.base_url, path))
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
    }

    pub fn service(&self) -> SearchServiceClient {
        SearchServiceClient { conn: self.clone() }
    }

    pub fn index(&self, index_name: &str) -> SearchIndexClient {
        SearchIndexClient { conn: self.clone(), index_name: index_name.to_string() }
    }
}

/// Index management operations (`/indexes`).
#[derive(Debug, Clone)]
pub struct SearchServiceClient {
    conn: Connection,
}

/// Document operations on one index (`/indexes/<name>/docs`).
#[derive(Debug, Clone)]
pub struct SearchIndexClient {
    conn: Connection,
    index_name: String,
}

#[async_trait]
impl SearchService for SearchServiceClient {
    async fn index_exists(&self, name: &str) -> anyhow::Result<bool> {
        debug!(index = name, base_url = %self.conn.base_url, "GET index");
        let response = self.conn.request(Method::GET, &format!("indexes/{name}")).send().await.map_err(AzureError::from)?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(AzureError::from_response(response).await.into()),
        }
    }

    async fn create_index(&self, definition: &IndexDefinition) -> anyhow::Result<()> {
        debug!(index = %definition.name, fields = definition.fields.len(), "POST index");
        let response = self
            .conn
            .request(Method::POST, "indexes")
            .json(&IndexPayload::from(definition))
            .send()
            .await
            .map_err(AzureError::from)?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(AzureError::from_response(response).await.into())
        }
    }
}

#[async_trait]
impl DocumentIndex for SearchIndexClient {
    async fn upsert_batch(&self, documents: &[Document]) -> anyhow::Result<Vec<BatchResult>> {
        debug!(index = %self.index_name, count = documents.len(), "POST docs/index");
        let response = self
            .conn
            .request(Method::POST, &format!("indexes/{}/docs/index", self.index_name))
            .json(&IndexBatchPayload::upload(documents))
            .send()
            .await
            .map_err(AzureError::from)?;
        // 207 means some documents failed; the per-item results say which.
        match response.status() {
            StatusCode::OK | StatusCode::MULTI_STATUS => {
                let body = response.bytes().await.map_err(AzureError::from)?;
                let parsed: IndexBatchResponse = serde_json::from_slice(&body).map_err(AzureError::from)?;
                Ok(parsed.value.into_iter().map(BatchResult::from).collect())
            }
            _ => Err(AzureError::from_response(response).await.into()),
        }
    }
}
