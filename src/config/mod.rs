//! Configuration management for didyoufeelit.
//!
//! Configuration is read from `~/.config/didyoufeelit/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

mod fetcher;

pub use fetcher::{FetcherConfig, DEFAULT_FEED_URL};

use crate::domain::IntensityScale;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub intensity: IntensityScale,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.intensity.validate().map_err(ConfigError::InvalidScale)
    }

    /// Get the default config file path: `~/.config/didyoufeelit/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("didyoufeelit").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::info!("Wrote default configuration to {}", path.display());
        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        format!(
            r##"# didyoufeelit configuration

[fetcher]
# Feed to query. Any GeoJSON endpoint with a top-level "features" array works.
url = "{url}"

# Whole-request timeout in seconds
timeout_secs = 10

# Connection timeout in seconds
connect_timeout_secs = 5

user_agent = "{user_agent}"

[intensity]
# Label used when the community intensity score is missing or out of range
not_available = "Not felt"

# Scores above this are treated as out of range
ceiling = 12.0

# Ordered (min, label) pairs. A score gets the label of the last level whose
# min is <= the score. Minimums must be strictly ascending.
levels = [
    {{ min = 0.0, label = "I did not feel it" }},
    {{ min = 2.0, label = "Weak" }},
    {{ min = 4.0, label = "Moderate" }},
    {{ min = 6.0, label = "Strong" }},
    {{ min = 8.0, label = "Severe" }},
]
"##,
            url = DEFAULT_FEED_URL,
            user_agent = FetcherConfig::default().user_agent
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid intensity scale: {0}")]
    InvalidScale(String),
}
