//! HTTP page fetcher backed by reqwest

use tracing::{debug, warn};

use crate::version::error::FetchError;
use crate::version::fetcher::PageFetcher;

/// Fetches releases pages over HTTP
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Creates a new HttpPageFetcher sending the given User-Agent
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "text/html")
            .send()
            .await
            .inspect_err(|e| warn!("Request to {} failed: {}", url, e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("Releases page returned status {}: {}", status, url);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
