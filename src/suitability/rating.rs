//! Status Tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse bucketing of a suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SuitabilityStatus {
    /// Thresholds: 80 / 60 / 40, lower bounds inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            SuitabilityStatus::Excellent
        } else if score >= 60.0 {
            SuitabilityStatus::Good
        } else if score >= 40.0 {
            SuitabilityStatus::Fair
        } else {
            SuitabilityStatus::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuitabilityStatus::Excellent => "excellent",
            SuitabilityStatus::Good => "good",
            SuitabilityStatus::Fair => "fair",
            SuitabilityStatus::Poor => "poor",
        }
    }

    /// Marker shown next to the status in text reports
    pub fn marker(&self) -> &'static str {
        match self {
            SuitabilityStatus::Excellent => "✅",
            SuitabilityStatus::Good => "📈",
            SuitabilityStatus::Fair | SuitabilityStatus::Poor => "⚠️",
        }
    }
}

impl fmt::Display for SuitabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
