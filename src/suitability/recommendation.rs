//! Crop Recommendation
//!
//! Per-crop output of the estimator, derived from the clamped score.

use serde::Serialize;

use super::crops::Crop;
use super::rating::SuitabilityStatus;
use crate::utils::{round_half_up, to_fixed_1};

/// Scores above this select the crop's favourable note.
pub const FAVOURABLE_NOTE_THRESHOLD: f64 = 70.0;

/// Suffix of the yield string
pub const YIELD_UNIT: &str = "tons/hectare";

/// Suitability result for one crop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    #[serde(rename = "name")]
    pub crop: Crop,

    /// Rounded score, 0-100
    pub suitability: u8,

    /// e.g. "24.6 tons/hectare"
    pub estimated_yield: String,

    pub status: SuitabilityStatus,

    pub notes: &'static str,

    /// Score clamped to [0, 100] before rounding (finite inputs)
    pub score: f64,

    /// Numeric yield before formatting (tons/hectare)
    pub yield_tons_per_hectare: f64,
}

impl CropRecommendation {
    /// Build from a score already clamped to [0, 100].
    ///
    /// Status, note and yield all use the unrounded score.
    pub fn from_score(crop: Crop, score: f64) -> Self {
        let profile = crop.profile();
        let yield_tons_per_hectare = profile.base_yield * (score / 100.0);

        let notes = if score > FAVOURABLE_NOTE_THRESHOLD {
            profile.notes.favourable
        } else {
            profile.notes.unfavourable
        };

        Self {
            crop,
            suitability: round_half_up(score) as u8,
            estimated_yield: format!("{} {}", to_fixed_1(yield_tons_per_hectare), YIELD_UNIT),
            status: SuitabilityStatus::from_score(score),
            notes,
            score,
            yield_tons_per_hectare,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_score() {
        let rec = CropRecommendation::from_score(Crop::Corn, 100.0);
        assert_eq!(rec.suitability, 100);
        assert_eq!(rec.estimated_yield, "8.2 tons/hectare");
        assert_eq!(rec.status, SuitabilityStatus::Excellent);
        assert_eq!(rec.notes, "Great conditions for corn");
    }

    #[test]
    fn test_note_threshold_is_exclusive() {
        let at = CropRecommendation::from_score(Crop::Wheat, 70.0);
        assert_eq!(at.notes, "Consider soil amendments for better yield");

        let above = CropRecommendation::from_score(Crop::Wheat, 70.4);
        assert_eq!(above.notes, "Excellent for wheat cultivation");
    }

    #[test]
    fn test_zero_score() {
        let rec = CropRecommendation::from_score(Crop::Apples, 0.0);
        assert_eq!(rec.suitability, 0);
        assert_eq!(rec.estimated_yield, "0.0 tons/hectare");
        assert_eq!(rec.status, SuitabilityStatus::Poor);
        assert_eq!(rec.notes, "Consider long-term soil improvement");
    }

    #[test]
    fn test_serialized_shape() {
        let rec = CropRecommendation::from_score(Crop::Carrots, 70.4);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["name"], "Carrots");
        assert_eq!(json["suitability"], 70);
        assert_eq!(json["estimatedYield"], "24.6 tons/hectare");
        assert_eq!(json["status"], "good");
        assert_eq!(json["notes"], "Perfect for root vegetables");
    }
}
