use serde::Serialize;

/// A single felt earthquake, ready for display.
///
/// Constructed once per successful pipeline run and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    title: String,
    num_of_people: u64,
    perceived_strength: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        num_of_people: u64,
        perceived_strength: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            num_of_people,
            perceived_strength: perceived_strength.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of public "felt it" reports.
    pub fn num_of_people(&self) -> u64 {
        self.num_of_people
    }

    pub fn perceived_strength(&self) -> &str {
        &self.perceived_strength
    }

    /// The "N people felt it" message shown under the title.
    pub fn felt_message(&self) -> String {
        match self.num_of_people {
            1 => "1 person felt it".to_string(),
            n => format!("{} people felt it", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let event = Event::new("10km NE of Springfield", 102, "Moderate");
        assert_eq!(event.title(), "10km NE of Springfield");
        assert_eq!(event.num_of_people(), 102);
        assert_eq!(event.perceived_strength(), "Moderate");
    }

    #[test]
    fn test_felt_message_plural() {
        assert_eq!(Event::new("a", 0, "Not felt").felt_message(), "0 people felt it");
        assert_eq!(Event::new("a", 1, "Weak").felt_message(), "1 person felt it");
        assert_eq!(Event::new("a", 2500, "Strong").felt_message(), "2500 people felt it");
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let event = Event::new("Offshore", 7, "Weak");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["title"], "Offshore");
        assert_eq!(json["num_of_people"], 7);
        assert_eq!(json["perceived_strength"], "Weak");
    }
}
