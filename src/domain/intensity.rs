use serde::{Deserialize, Serialize};

/// One row of the intensity table: scores from `min` (inclusive) up to the
/// next level's `min` get `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityLevel {
    pub min: f64,
    pub label: String,
}

impl IntensityLevel {
    pub fn new(min: f64, label: impl Into<String>) -> Self {
        Self {
            min,
            label: label.into(),
        }
    }
}

/// Ordered lookup table from a community intensity score to a coarse label.
///
/// Scores that are absent, non-finite, below the first level or above
/// `ceiling` map to `not_available`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityScale {
    pub levels: Vec<IntensityLevel>,
    pub ceiling: f64,
    pub not_available: String,
}

impl Default for IntensityScale {
    fn default() -> Self {
        Self {
            levels: vec![
                IntensityLevel::new(0.0, "I did not feel it"),
                IntensityLevel::new(2.0, "Weak"),
                IntensityLevel::new(4.0, "Moderate"),
                IntensityLevel::new(6.0, "Strong"),
                IntensityLevel::new(8.0, "Severe"),
            ],
            ceiling: 12.0,
            not_available: "Not felt".to_string(),
        }
    }
}

impl IntensityScale {
    /// Map a score to its label.
    pub fn label_for(&self, score: Option<f64>) -> &str {
        let Some(score) = score.filter(|s| s.is_finite()) else {
            return &self.not_available;
        };

        if score > self.ceiling {
            return &self.not_available;
        }

        self.levels
            .iter()
            .rev()
            .find(|level| level.min <= score)
            .map(|level| level.label.as_str())
            .unwrap_or(self.not_available.as_str())
    }

    /// Every label this scale can produce, including `not_available`.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.levels
            .iter()
            .map(|level| level.label.as_str())
            .chain(std::iter::once(self.not_available.as_str()))
    }

    /// Check the table is usable: non-empty, strictly ascending, finite,
    /// with non-blank labels.
    pub fn validate(&self) -> Result<(), String> {
        if self.levels.is_empty() {
            return Err("intensity scale has no levels".to_string());
        }

        if self.not_available.trim().is_empty() {
            return Err("not_available label is blank".to_string());
        }

        for (i, level) in self.levels.iter().enumerate() {
            if !level.min.is_finite() {
                return Err(format!("level {} has a non-finite minimum", i));
            }
            if level.label.trim().is_empty() {
                return Err(format!("level {} has a blank label", i));
            }
        }

        if let Some(pair) = self.levels.windows(2).find(|w| w[0].min >= w[1].min) {
            return Err(format!(
                "levels must be strictly ascending: {} is not below {}",
                pair[0].min, pair[1].min
            ));
        }

        // levels is non-empty here
        let top = self.levels[self.levels.len() - 1].min;
        if !self.ceiling.is_finite() || self.ceiling < top {
            return Err(format!(
                "ceiling {} must be finite and at least the top level minimum {}",
                self.ceiling, top
            ));
        }

        Ok(())
    }
}
