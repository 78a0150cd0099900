//! Scoring Factors
//!
//! The four multiplicative factors behind a crop's raw score:
//!
//! 1. pH fitness, on the crop's 0-peak scale (peak is 85-95)
//! 2. Fertility, nutrient level relative to the crop's reference (≈1.0)
//! 3. Temperature fitness, 1.0 or a penalty multiplier
//! 4. Site factor (moisture band or organic matter), 1.0 or a penalty
//!
//! The pH factor carries the 0-100 scale; the others are near-1.0
//! multipliers. Fertility above the reference can push the product past
//! 100, which the estimator clamps.

use serde::Serialize;

use super::crops::{Band, Crop, Fertility, PhPreference, SiteFactor};
use crate::sample::SoilSample;

pub fn ph_factor(pref: &PhPreference, ph: f64) -> f64 {
    if ph >= pref.ideal_min && ph <= pref.ideal_max {
        pref.peak
    } else {
        (pref.peak - (ph - pref.midpoint).abs() * pref.slope).max(0.0)
    }
}

pub fn fertility_factor(fertility: Fertility, sample: &SoilSample) -> f64 {
    match fertility {
        Fertility::Nitrogen { reference } => sample.nitrogen / reference,
        Fertility::TotalNpk { reference } => {
            (sample.nitrogen + sample.phosphorus + sample.potassium) / reference
        }
        Fertility::PhosphorusPotassium { reference } => {
            (sample.phosphorus + sample.potassium) / reference
        }
    }
}

pub fn band_factor(band: &Band, value: f64) -> f64 {
    if band.contains(value) {
        1.0
    } else {
        band.penalty
    }
}

pub fn site_factor(site: SiteFactor, sample: &SoilSample) -> f64 {
    match site {
        SiteFactor::Moisture(band) => band_factor(&band, sample.moisture),
        SiteFactor::OrganicMatter { threshold, penalty } => {
            if sample.organic_matter >= threshold {
                1.0
            } else {
                penalty
            }
        }
    }
}

/// Individual factors for one crop, plus their unclamped product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub crop: Crop,
    pub ph: f64,
    pub fertility: f64,
    pub temperature: f64,
    pub site: f64,
    pub raw: f64,
}

/// Compute every factor of `crop`'s score for `sample`.
pub fn factor_breakdown(crop: Crop, sample: &SoilSample) -> FactorBreakdown {
    let profile = crop.profile();

    let ph = ph_factor(&profile.ph, sample.ph);
    let fertility = fertility_factor(profile.fertility, sample);
    let temperature = band_factor(&profile.temperature, sample.temperature);
    let site = site_factor(profile.site, sample);

    FactorBreakdown {
        crop,
        ph,
        fertility,
        temperature,
        site,
        raw: ph * fertility * temperature * site,
    }
}
