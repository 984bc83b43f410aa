use serde::{Deserialize, Serialize};
use std::time::Duration;

/// USGS query for felt earthquakes of magnitude 5+ in early 2016.
pub const DEFAULT_FEED_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&starttime=2016-01-01&endtime=2016-05-02&minfelt=50&minmagnitude=5";

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Feed URL used when none is given on the command line
    pub url: String,

    /// Whole-request timeout in seconds (default: 10)
    pub timeout_secs: u64,

    /// Connection timeout in seconds (default: 5)
    pub connect_timeout_secs: u64,

    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
            user_agent: format!("didyoufeelit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FetcherConfig::default();
        assert_eq!(config.url, DEFAULT_FEED_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent, "didyoufeelit/0.1.0");
    }

    #[test]
    fn test_default_url_requests_geojson() {
        let url = url::Url::parse(DEFAULT_FEED_URL).unwrap();
        assert_eq!(url.host_str(), Some("earthquake.usgs.gov"));
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "format" && v == "geojson"));
    }
}
