//! Maps the representative feature of a feed to an [`Event`].

mod properties;

pub use properties::{RawProperties, UNKNOWN_TITLE};

use crate::app::SelectionError;
use crate::domain::{Event, IntensityScale};
use crate::parser::RawFeed;

#[derive(Debug, Clone, Default)]
pub struct EventSelector {
    scale: IntensityScale,
}

impl EventSelector {
    pub fn new(scale: IntensityScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> &IntensityScale {
        &self.scale
    }

    /// Take the first feature in feed order and map it to an [`Event`].
    pub fn select(&self, feed: RawFeed) -> Result<Event, SelectionError> {
        let first = feed.features.first().ok_or(SelectionError::NoEvents)?;
        Ok(self.map_feature(&RawProperties::from_feature(first)))
    }

    pub fn map_feature(&self, props: &RawProperties) -> Event {
        Event::new(
            props.title.clone(),
            props.felt,
            self.scale.label_for(props.cdi),
        )
    }
}
