//! Suitability Estimator
//!
//! Scores every crop against a soil sample and ranks the results.
//!
//! Pure and synchronous: the same sample always produces the same ranking,
//! and no input makes it fail. Out-of-range measurements flow through the
//! arithmetic and end up clamped into [0, 100]. Samples are expected to hold
//! finite numbers; the collector and the HTTP layer reject NaN and infinities
//! before they get here.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};

use super::crops::Crop;
use super::factors::factor_breakdown;
use super::recommendation::CropRecommendation;
use crate::sample::SoilSample;

/// Upper bound of the suitability scale
pub const MAX_SCORE: f64 = 100.0;

/// Clamped score of one crop.
pub fn crop_score(crop: Crop, sample: &SoilSample) -> f64 {
    let breakdown = factor_breakdown(crop, sample);
    trace!(
        crop = crop.name(),
        ph = breakdown.ph,
        fertility = breakdown.fertility,
        temperature = breakdown.temperature,
        site = breakdown.site,
        "factor breakdown"
    );

    let score = breakdown.raw.clamp(0.0, MAX_SCORE);
    // Zero factors times negative nutrients give -0.0
    if score == 0.0 {
        0.0
    } else {
        score
    }
}

/// Rank all four crops for `sample`, best first.
///
/// Ties on rounded suitability keep enumeration order.
pub fn estimate(sample: &SoilSample) -> Vec<CropRecommendation> {
    let mut recommendations: Vec<CropRecommendation> = Crop::ALL
        .iter()
        .map(|&crop| {
            let score = crop_score(crop, sample);
            debug!(crop = crop.name(), score, "scored crop");
            CropRecommendation::from_score(crop, score)
        })
        .collect();

    // sort_by is stable
    recommendations.sort_by(|a, b| b.suitability.cmp(&a.suitability));
    recommendations
}

/// Estimate many samples in parallel, preserving input order.
pub fn estimate_batch(samples: &[SoilSample]) -> Vec<Vec<CropRecommendation>> {
    samples.par_iter().map(estimate).collect()
}

/// Ranked recommendations together with the sample they were computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityReport {
    pub sample: SoilSample,
    pub recommendations: Vec<CropRecommendation>,
    pub top_crop: Crop,
    pub generated_at: DateTime<Utc>,
}

impl SuitabilityReport {
    /// Highest-ranked recommendation
    pub fn top(&self) -> Option<&CropRecommendation> {
        self.recommendations.first()
    }

    pub fn get(&self, crop: Crop) -> Option<&CropRecommendation> {
        self.recommendations.iter().find(|r| r.crop == crop)
    }
}

/// Estimate and wrap the result in a [`SuitabilityReport`].
pub fn assess(sample: &SoilSample) -> SuitabilityReport {
    let recommendations = estimate(sample);
    let top_crop = recommendations
        .first()
        .map(|r| r.crop)
        .unwrap_or(Crop::Wheat);

    SuitabilityReport {
        sample: *sample,
        recommendations,
        top_crop,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SoilField;
    use crate::suitability::rating::SuitabilityStatus;

    fn crops(recs: &[CropRecommendation]) -> Vec<Crop> {
        recs.iter().map(|r| r.crop).collect()
    }

    #[test]
    fn test_default_sample_ranking() {
        let recs = estimate(&SoilSample::default());
        assert_eq!(
            crops(&recs),
            vec![Crop::Carrots, Crop::Apples, Crop::Corn, Crop::Wheat]
        );
        let suitability: Vec<u8> = recs.iter().map(|r| r.suitability).collect();
        assert_eq!(suitability, vec![70, 59, 50, 45]);
    }

    #[test]
    fn test_clamped_at_100() {
        // Corn fertility 200/80 = 2.5
        let sample = SoilSample {
            ph: 6.5,
            nitrogen: 200.0,
            temperature: 25.0,
            moisture: 60.0,
            ..SoilSample::default()
        };
        assert_eq!(crop_score(Crop::Corn, &sample), 100.0);
    }

    #[test]
    fn test_negative_nutrients_floor_at_zero() {
        let sample = SoilSample::default().with_field(SoilField::Nitrogen, -40.0);
        let score = crop_score(Crop::Wheat, &sample);
        assert_eq!(score, 0.0);
        assert!(score.is_sign_positive());

        let wheat = estimate(&sample)
            .into_iter()
            .find(|r| r.crop == Crop::Wheat)
            .unwrap();
        assert_eq!(wheat.suitability, 0);
        assert_eq!(wheat.estimated_yield, "0.0 tons/hectare");
        assert_eq!(wheat.status, SuitabilityStatus::Poor);
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        // Zero nutrients: every crop scores 0
        let sample = SoilSample {
            nitrogen: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            ..SoilSample::default()
        };
        let recs = estimate(&sample);
        assert_eq!(
            crops(&recs),
            vec![Crop::Wheat, Crop::Corn, Crop::Carrots, Crop::Apples]
        );
        assert!(recs.iter().all(|r| r.suitability == 0));
    }

    #[test]
    fn test_batch_preserves_order() {
        let samples = vec![
            SoilSample::default(),
            SoilSample::default().with_field(SoilField::Ph, 4.0),
            SoilSample::default().with_field(SoilField::Nitrogen, 100.0),
        ];
        let batch = estimate_batch(&samples);
        assert_eq!(batch.len(), 3);
        for (sample, recs) in samples.iter().zip(&batch) {
            assert_eq!(recs, &estimate(sample));
        }
    }

    #[test]
    fn test_assess_report() {
        let report = assess(&SoilSample::default());
        assert_eq!(report.top_crop, Crop::Carrots);
        assert_eq!(report.top().map(|r| r.crop), Some(Crop::Carrots));
        assert_eq!(report.get(Crop::Wheat).map(|r| r.suitability), Some(45));
        assert_eq!(report.sample, SoilSample::default());
    }
}
