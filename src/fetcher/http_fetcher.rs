use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::app::FetchError;
use crate::config::FetcherConfig;
use crate::fetcher::Fetcher;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

/// Reject anything the transport could not send before touching the network.
fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = validate_url(url)?;

        tracing::debug!("GET {}", parsed);

        let response = self
            .client
            .get(parsed.as_str())
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    FetchError::InvalidUrl {
                        url: url.to_string(),
                        reason: e.to_string(),
                    }
                } else {
                    tracing::warn!("Request to {} failed: {}", url, e);
                    FetchError::Network {
                        url: url.to_string(),
                        source: e,
                    }
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("{} returned HTTP {}", url, status);
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::warn!("Reading body from {} failed: {}", url, e);
            if e.is_timeout() {
                FetchError::Network {
                    url: url.to_string(),
                    source: e,
                }
            } else {
                FetchError::Read {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
