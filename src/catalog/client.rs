use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, error, warn};

use super::endpoint::Endpoint;
use super::error::{CatalogError, CatalogResult};
use crate::config::CatalogConfig;
use crate::schemas::CatalogPage;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Read access to the movie catalog.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_page(&self, endpoint: &Endpoint) -> CatalogResult<CatalogPage>;
}

/// TMDB v3 over HTTPS with bearer-token auth.
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
}

impl TmdbClient {
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| CatalogError::Network(format!("invalid API key header: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl CatalogClient for TmdbClient {
    async fn fetch_page(&self, endpoint: &Endpoint) -> CatalogResult<CatalogPage> {
        let url = endpoint.url(&self.base_url);
        debug!(%endpoint, "GET catalog page");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(%endpoint, error = %e, "catalog request failed");
            CatalogError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%endpoint, status = status.as_u16(), "catalog returned non-success status");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            warn!(%endpoint, error = %e, "failed to read catalog response body");
            CatalogError::Network(e.to_string())
        })?;

        parse_page(&body).inspect_err(|e| {
            error!(%endpoint, error = %e, "catalog response did not parse");
        })
    }
}

pub fn parse_page(body: &str) -> CatalogResult<CatalogPage> {
    serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))
}
