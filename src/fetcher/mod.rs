pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::FetchError;

pub use http_fetcher::HttpFetcher;

#[async_trait]
pub trait Fetcher {
    /// Fetch `url` and return the full response body as text.
    ///
    /// Exactly one outcome per call; implementations never retry.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
