//! Estimator Integration Tests
//!
//! End-to-end checks through the public API: reference soil samples with
//! known rankings, plus randomized samples across the documented ranges.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use soil_crop_estimator::{
    estimate, Crop, CropRecommendation, InputCollector, SoilField, SoilSample, SuitabilityStatus,
};

fn find(recs: &[CropRecommendation], crop: Crop) -> &CropRecommendation {
    recs.iter().find(|r| r.crop == crop).unwrap()
}

fn ranking(recs: &[CropRecommendation]) -> Vec<(Crop, u8)> {
    recs.iter().map(|r| (r.crop, r.suitability)).collect()
}

fn random_sample(rng: &mut StdRng) -> SoilSample {
    SoilField::ALL.iter().fold(SoilSample::default(), |sample, field| {
        let range = field.range();
        sample.with_field(*field, rng.gen_range(range.min..=range.max))
    })
}

// ============================================================================
// Reference samples
// ============================================================================

#[test]
fn test_wheat_at_ph_midpoint() {
    let sample = SoilSample {
        ph: 6.75,
        nitrogen: 100.0,
        phosphorus: 30.0,
        potassium: 40.0,
        moisture: 55.0,
        temperature: 20.0,
        organic_matter: 3.5,
    };
    let recs = estimate(&sample);

    let wheat = find(&recs, Crop::Wheat);
    assert_eq!(wheat.suitability, 90);
    assert_eq!(wheat.status, SuitabilityStatus::Excellent);
    // 4.5 * 0.9 is stored just below 4.05
    assert_eq!(wheat.estimated_yield, "4.0 tons/hectare");
    assert_eq!(wheat.notes, "Excellent for wheat cultivation");

    // Corn and carrots both clamp/round to 100; corn comes first
    assert_eq!(
        ranking(&recs),
        vec![
            (Crop::Corn, 100),
            (Crop::Carrots, 100),
            (Crop::Wheat, 90),
            (Crop::Apples, 59),
        ]
    );
    assert_eq!(find(&recs, Crop::Corn).estimated_yield, "8.2 tons/hectare");
    assert_eq!(find(&recs, Crop::Carrots).estimated_yield, "34.9 tons/hectare");
}

#[test]
fn test_very_acidic_soil_scores_low() {
    let sample = SoilSample::default().with_field(SoilField::Ph, 4.0);
    let recs = estimate(&sample);

    assert_eq!(
        ranking(&recs),
        vec![
            (Crop::Carrots, 26),
            (Crop::Apples, 25),
            (Crop::Corn, 22),
            (Crop::Wheat, 18),
        ]
    );
    assert!(recs.iter().all(|r| r.suitability < 40));
    assert!(matches!(
        recs[0].status,
        SuitabilityStatus::Poor | SuitabilityStatus::Fair
    ));
}

#[test]
fn test_default_sample_regression_baseline() {
    let recs = estimate(&SoilSample::default());

    assert_eq!(
        ranking(&recs),
        vec![
            (Crop::Carrots, 70),
            (Crop::Apples, 59),
            (Crop::Corn, 50),
            (Crop::Wheat, 45),
        ]
    );

    let statuses: Vec<SuitabilityStatus> = recs.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            SuitabilityStatus::Good,
            SuitabilityStatus::Fair,
            SuitabilityStatus::Fair,
            SuitabilityStatus::Fair,
        ]
    );

    assert_eq!(recs[0].estimated_yield, "24.6 tons/hectare");
    assert_eq!(recs[0].notes, "Perfect for root vegetables");
    assert_eq!(find(&recs, Crop::Corn).estimated_yield, "4.1 tons/hectare");
    assert_eq!(find(&recs, Crop::Wheat).estimated_yield, "2.0 tons/hectare");
}

#[test]
fn test_organic_matter_thresholds_are_inclusive() {
    let base = SoilSample {
        ph: 6.5,
        nitrogen: 60.0,
        temperature: 20.0,
        ..SoilSample::default()
    };

    let carrots_at = find(&estimate(&base.with_field(SoilField::OrganicMatter, 2.0)), Crop::Carrots).suitability;
    let carrots_below = find(&estimate(&base.with_field(SoilField::OrganicMatter, 1.9)), Crop::Carrots).suitability;
    assert_eq!(carrots_at, 76);
    assert_eq!(carrots_below, 53);

    let apples_at = find(&estimate(&base.with_field(SoilField::OrganicMatter, 3.0)), Crop::Apples).suitability;
    let apples_below = find(&estimate(&base.with_field(SoilField::OrganicMatter, 2.9)), Crop::Apples).suitability;
    assert_eq!(apples_at, 59);
    assert_eq!(apples_below, 48);
}

#[test]
fn test_collector_feeds_estimator() {
    let mut collector = InputCollector::new();
    collector.update(SoilField::Ph, 6.75).unwrap();
    collector.update(SoilField::Nitrogen, 100.0).unwrap();
    collector.update(SoilField::Moisture, 55.0).unwrap();
    collector.update(SoilField::Temperature, 20.0).unwrap();

    let mut completed = 0;
    let report = collector.submit(&mut |event: &soil_crop_estimator::AnalysisEvent| {
        if matches!(event, soil_crop_estimator::AnalysisEvent::Completed(_)) {
            completed += 1;
        }
    });

    assert_eq!(completed, 1);
    assert_eq!(report.recommendations, estimate(&collector.sample()));
    assert_eq!(report.top_crop, Crop::Corn);
}

// ============================================================================
// Randomized properties
// ============================================================================

#[test]
fn test_properties_over_random_samples() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..2_000 {
        let sample = random_sample(&mut rng);
        let recs = estimate(&sample);

        // One entry per crop
        assert_eq!(recs.len(), 4);
        let mut crops: Vec<Crop> = recs.iter().map(|r| r.crop).collect();
        crops.sort();
        assert_eq!(crops, Crop::ALL.to_vec());

        for rec in &recs {
            assert!(rec.suitability <= 100, "{:?}", sample);
            assert!((0.0..=100.0).contains(&rec.score), "{:?}", sample);
            assert_eq!(rec.status, SuitabilityStatus::from_score(rec.score));
            assert!(rec.estimated_yield.ends_with(" tons/hectare"));
        }

        // Non-increasing suitability
        assert!(recs.windows(2).all(|w| w[0].suitability >= w[1].suitability));

        // Idempotent
        assert_eq!(estimate(&sample), recs);
    }
}

#[test]
fn test_out_of_range_inputs_do_not_fail() {
    let extremes = [
        SoilSample {
            ph: -3.0,
            nitrogen: -500.0,
            phosphorus: -10.0,
            potassium: -10.0,
            moisture: -1.0,
            temperature: -40.0,
            organic_matter: -1.0,
        },
        SoilSample {
            ph: 14.0,
            nitrogen: 10_000.0,
            phosphorus: 10_000.0,
            potassium: 10_000.0,
            moisture: 500.0,
            temperature: 90.0,
            organic_matter: 50.0,
        },
    ];

    for sample in &extremes {
        let recs = estimate(sample);
        assert_eq!(recs.len(), 4);
        assert!(recs.iter().all(|r| r.suitability <= 100));
        assert!(recs.iter().all(|r| !r.estimated_yield.starts_with('-')));
    }
}
