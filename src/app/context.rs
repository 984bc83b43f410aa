use std::path::Path;
use std::sync::Arc;

use crate::app::error::{AppError, Result};
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::pipeline::FetchPipeline;
use crate::selector::EventSelector;

pub struct AppContext {
    pub config: Config,
    pub pipeline: Arc<FetchPipeline>,
}

impl AppContext {
    /// Build from the config file at `config_path`, or the default location.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;

        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::new(&config.fetcher).map_err(AppError::Client)?);
        let selector = EventSelector::new(config.intensity.clone());
        let pipeline = Arc::new(FetchPipeline::new(fetcher, selector));

        Ok(Self {
            config,
            pipeline,
        })
    }

    /// The URL to query when the caller gives none.
    pub fn feed_url(&self) -> &str {
        &self.config.fetcher.url
    }
}
