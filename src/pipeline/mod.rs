//! Fetch → parse → select, run off the caller's task.
//!
//! ```text
//! url → Fetcher → body → FeedParser → RawFeed → EventSelector → Event
//! ```
//!
//! Every run is independent. The first failure short-circuits and is
//! returned unchanged inside [`PipelineError`].
//!
//! ```rust,ignore
//! let pipeline = Arc::new(FetchPipeline::new(fetcher, EventSelector::default()));
//!
//! // Await a handle
//! let outcome = pipeline.spawn(url).wait().await;
//!
//! // Or hand the outcome to a callback
//! pipeline.spawn_with(url, |outcome| renderer.render(&outcome));
//! ```

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

use crate::app::PipelineError;
use crate::domain::Event;
use crate::fetcher::Fetcher;
use crate::parser::FeedParser;
use crate::selector::EventSelector;

pub type Outcome = Result<Event, PipelineError>;

pub struct FetchPipeline {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    parser: FeedParser,
    selector: EventSelector,
}

impl FetchPipeline {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, selector: EventSelector) -> Self {
        Self {
            fetcher,
            parser: FeedParser::new(),
            selector,
        }
    }

    pub fn selector(&self) -> &EventSelector {
        &self.selector
    }

    /// Run the whole pipeline on the current task.
    pub async fn run(&self, url: &str) -> Outcome {
        let result = self.run_stages(url).await;

        match &result {
            Ok(event) => info!(
                "Selected \"{}\" ({} reports, {})",
                event.title(),
                event.num_of_people(),
                event.perceived_strength()
            ),
            Err(e) if e.is_no_events() => info!("No events in feed {}", url),
            Err(e) => warn!("Pipeline for {} failed: {}", url, e),
        }

        result
    }

    async fn run_stages(&self, url: &str) -> Outcome {
        let body = self.fetcher.fetch(url).await?;
        let feed = self.parser.parse(&body)?;

        if let Some(generated) = feed.metadata.generated {
            debug!("Feed generated at {}", generated.to_rfc3339());
        }
        if let Some(count) = feed.metadata.count {
            if count != feed.features.len() as u64 {
                debug!(
                    "Feed reports {} events but carries {} features",
                    count,
                    feed.features.len()
                );
            }
        }

        Ok(self.selector.select(feed)?)
    }

    /// Run on a background task; the returned handle yields the outcome once.
    pub fn spawn(self: &Arc<Self>, url: impl Into<String>) -> PipelineHandle {
        let (tx, rx) = oneshot::channel();
        let pipeline = Arc::clone(self);
        let url = url.into();

        let task = tokio::spawn(async move {
            let outcome = pipeline.run(&url).await;
            if tx.send(outcome).is_err() {
                debug!("Handle for {} dropped before completion; discarding outcome", url);
            }
        });

        PipelineHandle {
            rx,
            abort: task.abort_handle(),
        }
    }

    /// Run on a background task and pass the outcome to `on_complete`
    /// exactly once.
    ///
    /// The task is detached: no handle is returned, so nothing can abort it
    /// between the run and the callback. Use [`spawn`](Self::spawn) when the
    /// run must be cancellable.
    pub fn spawn_with<F>(self: &Arc<Self>, url: impl Into<String>, on_complete: F)
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        let pipeline = Arc::clone(self);
        let url = url.into();

        tokio::spawn(async move {
            let outcome = pipeline.run(&url).await;
            on_complete(outcome);
        });
    }
}

/// One-shot receiver for a spawned pipeline run.
pub struct PipelineHandle {
    rx: oneshot::Receiver<Outcome>,
    abort: AbortHandle,
}

impl PipelineHandle {
    /// Abort the run, dropping any in-flight request.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }

    /// Wait for the outcome. A cancelled run yields [`PipelineError::Cancelled`].
    pub async fn wait(self) -> Outcome {
        match self.rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(PipelineError::Cancelled),
        }
    }
}
