//! HTTP client for the catalog query.

use serde::Deserialize;

use vitrine_catalog::Product;

use crate::config::ContentConfig;
use crate::query;

/// Failure of a catalog fetch.
///
/// Callers treat every variant the same way (log it, keep the empty
/// catalog); the split exists so operators can tell a dead network from a
/// misbehaving repository from a schema drift.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("content repository returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Response envelope of the query endpoint: records live under `result`.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Vec<Product>,
}

/// Read-only client for the content repository.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ContentClient {
    config: ContentConfig,
    http: reqwest::Client,
}

impl ContentClient {
    pub fn new(config: ContentConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Run the catalog query and return the records in repository order.
    ///
    /// One best-effort request: no retries, no partial results. A record
    /// that fails to decode fails the whole fetch.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.config.query_url();
        let groq = query::product_catalog_query();

        let resp = self
            .http
            .get(&url)
            .query(&[("query", groq.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: QueryResponse = resp
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!(count = envelope.result.len(), "fetched product records");
        Ok(envelope.result)
    }
}
