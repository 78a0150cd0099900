//! Crop Profiles
//!
//! Fixed growing preferences for the four crops the estimator scores.
//! Each profile holds the parameters of the four scoring factors, the
//! base yield at full suitability, and the two recommendation notes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Crops covered by the estimator, in enumeration order.
///
/// Enumeration order breaks ties when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Crop {
    Wheat,
    Corn,
    Carrots,
    Apples,
}

impl Crop {
    pub const ALL: [Crop; 4] = [Crop::Wheat, Crop::Corn, Crop::Carrots, Crop::Apples];

    pub fn name(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Corn => "Corn",
            Crop::Carrots => "Carrots",
            Crop::Apples => "Apples",
        }
    }

    pub fn profile(&self) -> &'static CropProfile {
        match self {
            Crop::Wheat => &WHEAT,
            Crop::Corn => &CORN,
            Crop::Carrots => &CARROTS,
            Crop::Apples => &APPLES,
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// pH preference: full `peak` inside [ideal_min, ideal_max], linear decay
/// of `slope` per pH unit away from `midpoint` outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhPreference {
    pub peak: f64,
    pub ideal_min: f64,
    pub ideal_max: f64,
    pub midpoint: f64,
    pub slope: f64,
}

/// Closed band with a multiplier applied when the value falls outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub penalty: f64,
}

impl Band {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Which nutrients drive fertility, and the reference level that maps to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fertility {
    /// nitrogen / reference
    Nitrogen { reference: f64 },
    /// (nitrogen + phosphorus + potassium) / reference
    TotalNpk { reference: f64 },
    /// (phosphorus + potassium) / reference
    PhosphorusPotassium { reference: f64 },
}

/// Crop-specific fourth factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SiteFactor {
    /// Moisture must lie within the band
    Moisture(Band),
    /// Organic matter must reach `threshold` (inclusive)
    OrganicMatter { threshold: f64, penalty: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropNotes {
    /// Used when the score exceeds 70
    pub favourable: &'static str,
    pub unfavourable: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropProfile {
    pub ph: PhPreference,
    pub fertility: Fertility,
    pub temperature: Band,
    pub site: SiteFactor,
    /// Yield at suitability 100 (tons/hectare)
    pub base_yield: f64,
    pub notes: CropNotes,
}

// ============================================================================
// Profiles
// ============================================================================

/// Wheat: pH 6.0-7.5, moderate nitrogen, cool-moderate temperatures
pub const WHEAT: CropProfile = CropProfile {
    ph: PhPreference { peak: 90.0, ideal_min: 6.0, ideal_max: 7.5, midpoint: 6.75, slope: 20.0 },
    fertility: Fertility::Nitrogen { reference: 100.0 },
    temperature: Band { min: 15.0, max: 25.0, penalty: 0.7 },
    site: SiteFactor::Moisture(Band { min: 40.0, max: 70.0, penalty: 0.8 }),
    base_yield: 4.5,
    notes: CropNotes {
        favourable: "Excellent for wheat cultivation",
        unfavourable: "Consider soil amendments for better yield",
    },
};

/// Corn: pH 6.0-6.8, high nitrogen, warm temperatures
pub const CORN: CropProfile = CropProfile {
    ph: PhPreference { peak: 95.0, ideal_min: 6.0, ideal_max: 6.8, midpoint: 6.4, slope: 25.0 },
    fertility: Fertility::Nitrogen { reference: 80.0 },
    temperature: Band { min: 20.0, max: 35.0, penalty: 0.6 },
    site: SiteFactor::Moisture(Band { min: 50.0, max: 80.0, penalty: 0.7 }),
    base_yield: 8.2,
    notes: CropNotes {
        favourable: "Great conditions for corn",
        unfavourable: "May need higher nitrogen levels",
    },
};

/// Carrots: pH 6.0-7.0, moderate fertility, cool weather
pub const CARROTS: CropProfile = CropProfile {
    ph: PhPreference { peak: 88.0, ideal_min: 6.0, ideal_max: 7.0, midpoint: 6.5, slope: 22.0 },
    fertility: Fertility::TotalNpk { reference: 150.0 },
    temperature: Band { min: 10.0, max: 25.0, penalty: 0.6 },
    site: SiteFactor::OrganicMatter { threshold: 2.0, penalty: 0.7 },
    base_yield: 35.0,
    notes: CropNotes {
        favourable: "Perfect for root vegetables",
        unfavourable: "Improve organic matter content",
    },
};

/// Apples: pH 6.0-7.0, balanced fertility, moderate conditions
pub const APPLES: CropProfile = CropProfile {
    ph: PhPreference { peak: 85.0, ideal_min: 6.0, ideal_max: 7.0, midpoint: 6.5, slope: 20.0 },
    fertility: Fertility::PhosphorusPotassium { reference: 100.0 },
    temperature: Band { min: 15.0, max: 30.0, penalty: 0.7 },
    site: SiteFactor::OrganicMatter { threshold: 3.0, penalty: 0.8 },
    base_yield: 25.0,
    notes: CropNotes {
        favourable: "Suitable for orchard development",
        unfavourable: "Consider long-term soil improvement",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ph_midpoints_centre_ideal_ranges() {
        for crop in Crop::ALL {
            let ph = crop.profile().ph;
            assert!(ph.ideal_min <= ph.midpoint && ph.midpoint <= ph.ideal_max, "{}", crop);
        }
    }

    #[test]
    fn test_enumeration_order() {
        let names: Vec<&str> = Crop::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Wheat", "Corn", "Carrots", "Apples"]);
        assert!(Crop::Wheat < Crop::Apples);
    }

    #[test]
    fn test_band_is_closed() {
        let band = WHEAT.temperature;
        assert!(band.contains(15.0));
        assert!(band.contains(25.0));
        assert!(!band.contains(25.1));
    }
}
