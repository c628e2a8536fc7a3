//! Page fetcher implementations

use crate::classify::{classify, PageResult};
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::settings::EndpointSettings;
use crate::types::QueryParams;
use async_trait::async_trait;
use tracing::{debug, warn};

/// One request/response round trip for a single page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Check that a request could be built at all
    ///
    /// Called before a query starts so configuration problems surface
    /// without touching the network.
    fn check_ready(&self) -> Result<()> {
        Ok(())
    }

    /// Fetch and classify one page. Never fails outside the result.
    async fn fetch_page(&self, params: &QueryParams) -> PageResult;
}

/// Page fetcher backed by HTTP
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: HttpClient,
    endpoint: EndpointSettings,
}

impl HttpPageFetcher {
    /// Create a fetcher for the configured endpoint
    pub fn new(client: HttpClient, endpoint: EndpointSettings) -> Self {
        Self { client, endpoint }
    }

    /// Endpoint settings in use
    pub fn endpoint(&self) -> &EndpointSettings {
        &self.endpoint
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    fn check_ready(&self) -> Result<()> {
        Endpoint::from_settings(&self.endpoint).map(|_| ())
    }

    async fn fetch_page(&self, params: &QueryParams) -> PageResult {
        let url = match Endpoint::from_settings(&self.endpoint) {
            Ok(endpoint) => endpoint.url(params),
            Err(e) => {
                return PageResult::Misconfigured {
                    message: e.to_string(),
                }
            }
        };

        debug!(
            "Fetching page {} for '{}': {}",
            params.page_number, params.subject_id, url
        );

        let response = match self.client.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return PageResult::Unreachable {
                    message: e.to_string(),
                };
            }
        };

        let result = classify(response.status, &response.body);
        match &result {
            PageResult::Success { record_count, .. } => debug!(
                "Page {} returned {} records",
                params.page_number, record_count
            ),
            other => warn!(
                "Page {} classified as {} (HTTP {})",
                params.page_number,
                other.label(),
                response.status
            ),
        }
        result
    }
}
