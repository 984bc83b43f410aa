//! # didyoufeelit
//!
//! Fetches a USGS GeoJSON earthquake feed and reports how strongly the
//! public felt its first event.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → FeedParser → EventSelector → Renderer
//! ```
//!
//! - [`fetcher`]: HTTP client returning the raw feed body
//! - [`parser`]: JSON decoding into a [`RawFeed`](parser::RawFeed)
//! - [`selector`]: first feature → [`Event`](domain::Event)
//! - [`pipeline`]: runs the three stages on a background task
//! - [`render`]: terminal and JSON output
//!
//! ## Quick Start
//!
//! ```bash
//! # Query the default USGS feed
//! didyoufeelit fetch
//!
//! # Query another feed, print JSON
//! didyoufeelit fetch --url "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&minfelt=10" --json
//!
//! # Show the intensity table in use
//! didyoufeelit scale
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// fetcher and pipeline.
pub mod app;

/// Command-line interface using clap.
///
/// - `fetch [--url <url>] [--json]` - Fetch a feed and render its first event
/// - `scale` - Print the intensity table
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/didyoufeelit/config.toml`, supporting:
/// - Feed URL and HTTP timeouts
/// - The intensity threshold/label table
pub mod config;

/// Core domain models.
///
/// - [`Event`](domain::Event): the felt earthquake handed to the renderer
/// - [`IntensityScale`](domain::IntensityScale): score → label lookup
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for body fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// GeoJSON feed decoding.
pub mod parser;

/// Fetch/parse/select orchestration.
pub mod pipeline;

/// Output of a pipeline outcome.
pub mod render;

/// Feature-to-event mapping.
pub mod selector;
