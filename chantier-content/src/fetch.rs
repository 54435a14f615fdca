//! Document retrieval from the static JSON store.

use async_trait::async_trait;
use chantier_core::{ContentError, ContentResult, Document};

use crate::config::{ConfigError, ContentConfig};

/// Source of content documents, keyed by logical path.
///
/// Implemented by [`HttpFetcher`] for production and by in-memory mocks in
/// tests. Implementations perform one retrieval per call and do not cache;
/// caching lives above this seam.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Retrieve and parse one JSON document.
    async fn fetch_document(&self, path: &str) -> ContentResult<Document>;
}

/// HTTP document fetcher.
///
/// One GET per call against `base_url` + path. The response body is parsed
/// as JSON whatever the Content-Type header says: static hosting frequently
/// serves JSON files as `text/plain` or `application/octet-stream`, so the
/// header is treated as advisory only.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(config: &ContentConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConfigError::ClientBuild {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl DocumentSource for HttpFetcher {
    async fn fetch_document(&self, path: &str) -> ContentResult<Document> {
        let response = self
            .client
            .get(self.url_for(path))
            .send()
            .await
            .map_err(|e| ContentError::Transport {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Fetch {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ContentError::Transport {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| ContentError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
