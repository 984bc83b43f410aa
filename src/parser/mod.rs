use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::app::ParseError;

/// Feed-level metadata USGS publishes alongside the features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedMetadata {
    pub title: Option<String>,
    pub count: Option<u64>,
    pub generated: Option<DateTime<Utc>>,
}

/// A decoded feed whose feature records have not been interpreted yet.
#[derive(Debug, Clone, Default)]
pub struct RawFeed {
    pub features: Vec<Value>,
    pub metadata: FeedMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct FeedParser;

impl FeedParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, body: &str) -> Result<RawFeed, ParseError> {
        let value: Value = serde_json::from_str(body).map_err(ParseError::MalformedJson)?;

        let mut root = match value {
            Value::Object(root) => root,
            other => {
                return Err(ParseError::UnexpectedShape(format!(
                    "expected a top-level object, found {}",
                    kind_of(&other)
                )))
            }
        };

        let features = match root.remove("features") {
            Some(Value::Array(features)) => features,
            Some(other) => {
                return Err(ParseError::UnexpectedShape(format!(
                    "'features' must be an array, found {}",
                    kind_of(&other)
                )))
            }
            None => {
                return Err(ParseError::UnexpectedShape(
                    "missing 'features' key".to_string(),
                ))
            }
        };

        let metadata = match root.get("metadata") {
            Some(Value::Object(meta)) => parse_metadata(meta),
            _ => FeedMetadata::default(),
        };

        tracing::debug!(
            "Parsed feed {:?} with {} features",
            metadata.title.as_deref().unwrap_or("(untitled)"),
            features.len()
        );

        Ok(RawFeed { features, metadata })
    }
}

fn parse_metadata(meta: &Map<String, Value>) -> FeedMetadata {
    FeedMetadata {
        title: meta.get("title").and_then(Value::as_str).map(String::from),
        count: meta.get("count").and_then(Value::as_u64),
        generated: meta
            .get("generated")
            .and_then(Value::as_i64)
            .and_then(DateTime::from_timestamp_millis),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
