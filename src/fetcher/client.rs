//! Worker proxy client
//!
//! Resolves share identifiers through the public worker proxy. Each call is a
//! single GET: no retries, no timeout override and no custom headers.

use crate::fetcher::models::MetadataResult;
use crate::fetcher::traits::MetadataSource;
use crate::utils::config::AppSettings;
use crate::utils::error::TeraPeekError;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Characters left alone by a browser's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Metadata fetcher backed by the worker proxy
#[derive(Debug, Clone)]
pub struct MetadataFetcher {
    client: Client,
    worker_base_url: String,
    share_base_url: String,
}

impl MetadataFetcher {
    pub fn new(settings: &AppSettings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    pub fn with_client(client: Client, settings: &AppSettings) -> Self {
        Self {
            client,
            worker_base_url: settings.worker_base_url.trim_end_matches('/').to_string(),
            share_base_url: settings.share_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Canonical share link for an identifier, e.g. `https://terabox.com/s/<id>`
    pub fn canonical_share_url(&self, share_id: &str) -> String {
        format!(
            "{}/s/{}",
            self.share_base_url,
            utf8_percent_encode(share_id, URI_COMPONENT)
        )
    }

    /// Worker request URL: `<worker-base>/?url=<canonical share link>`
    pub fn request_url(&self, share_id: &str) -> String {
        format!(
            "{}/?url={}",
            self.worker_base_url,
            self.canonical_share_url(share_id)
        )
    }
}

#[async_trait]
impl MetadataSource for MetadataFetcher {
    fn id(&self) -> &'static str {
        "worker-proxy"
    }

    async fn fetch_metadata(&self, share_id: &str) -> Result<MetadataResult, TeraPeekError> {
        if share_id.trim().is_empty() {
            return Err(TeraPeekError::EmptyInput);
        }

        let url = self.request_url(share_id);
        info!("Fetching metadata for share id {}", share_id);
        debug!("Worker request: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Worker request failed: {}", e);
            TeraPeekError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Worker answered with status {}", status);
            return Err(TeraPeekError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let result = MetadataResult::from_slice(&body);
        if let Err(e) = &result {
            warn!("Rejected worker response for {}: {}", share_id, e);
        }
        result
    }

    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, TeraPeekError> {
        debug!("Fetching thumbnail: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TeraPeekError::RequestFailed {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
