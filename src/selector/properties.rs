use serde_json::Value;

/// Used when a feature carries neither `title` nor `place`.
pub const UNKNOWN_TITLE: &str = "Unknown location";

/// The fields of one feature's `properties` that the selector consumes,
/// each decoded on its own with a fixed fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProperties {
    /// `title`, then `place`; [`UNKNOWN_TITLE`] when neither is a non-blank string.
    pub title: String,
    /// `felt`; 0 when absent, null, negative or non-numeric.
    pub felt: u64,
    /// `cdi`; `None` when absent, null, non-finite or non-numeric.
    pub cdi: Option<f64>,
}

impl RawProperties {
    /// Decode from a whole feature record. A feature without a `properties`
    /// object decodes to all defaults.
    pub fn from_feature(feature: &Value) -> Self {
        let props = feature.get("properties").filter(|p| p.is_object());

        Self {
            title: decode_title(props),
            felt: decode_felt(props.and_then(|p| p.get("felt"))),
            cdi: decode_score(props.and_then(|p| p.get("cdi"))),
        }
    }
}

fn decode_title(props: Option<&Value>) -> String {
    ["title", "place"]
        .iter()
        .filter_map(|key| props.and_then(|p| p.get(*key)).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_TITLE)
        .to_string()
}

fn decode_felt(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().and_then(whole_count))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_count))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn whole_count(n: f64) -> Option<u64> {
    (n.is_finite() && n >= 0.0).then(|| n.trunc() as u64)
}

fn decode_score(value: Option<&Value>) -> Option<f64> {
    let score = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    score.filter(|s| s.is_finite())
}
