use thiserror::Error;

use crate::config::ConfigError;

/// Transport-layer failures raised by a [`Fetcher`](crate::fetcher::Fetcher).
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status {code} from {url}")]
    HttpStatus { code: u16, url: String },

    #[error("Failed to read response body from {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Decoding-layer failures raised by the [`FeedParser`](crate::parser::FeedParser).
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Unexpected feed shape: {0}")]
    UnexpectedShape(String),
}

/// Business-layer outcomes of the [`EventSelector`](crate::selector::EventSelector).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// The feed was valid but held no events.
    #[error("Feed contains no events")]
    NoEvents,
}

/// The first failure encountered by a pipeline run, unchanged.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Pipeline run was cancelled")]
    Cancelled,
}

impl PipelineError {
    /// True when the run succeeded end to end but the feed was empty.
    pub fn is_no_events(&self) -> bool {
        matches!(self, PipelineError::Selection(SelectionError::NoEvents))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
