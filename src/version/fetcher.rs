//! Page fetcher trait for retrieving releases pages

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;

/// Trait for fetching the body of a releases page
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the page at `url`
    ///
    /// # Returns
    /// * `Ok(String)` - The page body, for a 200 response only
    /// * `Err(FetchError)` - On network failure or any other status
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}
