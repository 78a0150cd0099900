//! Soil Sample
//!
//! The seven soil measurements fed into the suitability estimator, plus the
//! per-field metadata (documented range, input step) used at input
//! boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SoilError};

/// One soil test result.
///
/// A transient value object: the estimator takes it by reference, the
/// collector replaces it wholesale on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    /// Soil pH (4.0 - 10.0)
    pub ph: f64,

    /// Nitrogen (mg/kg, 0 - 200)
    pub nitrogen: f64,

    /// Phosphorus (mg/kg, 0 - 100)
    pub phosphorus: f64,

    /// Potassium (mg/kg, 0 - 150)
    pub potassium: f64,

    /// Moisture (%, 0 - 100)
    pub moisture: f64,

    /// Temperature (°C, 0 - 50)
    pub temperature: f64,

    /// Organic matter (%, 0 - 10)
    pub organic_matter: f64,
}

impl Default for SoilSample {
    fn default() -> Self {
        Self {
            ph: 7.0,
            nitrogen: 50.0,
            phosphorus: 30.0,
            potassium: 40.0,
            moisture: 60.0,
            temperature: 25.0,
            organic_matter: 3.5,
        }
    }
}

impl SoilSample {
    /// Read a single field.
    pub fn get(&self, field: SoilField) -> f64 {
        match field {
            SoilField::Ph => self.ph,
            SoilField::Nitrogen => self.nitrogen,
            SoilField::Phosphorus => self.phosphorus,
            SoilField::Potassium => self.potassium,
            SoilField::Moisture => self.moisture,
            SoilField::Temperature => self.temperature,
            SoilField::OrganicMatter => self.organic_matter,
        }
    }

    /// Copy of this sample with one field replaced.
    pub fn with_field(self, field: SoilField, value: f64) -> Self {
        let mut next = self;
        match field {
            SoilField::Ph => next.ph = value,
            SoilField::Nitrogen => next.nitrogen = value,
            SoilField::Phosphorus => next.phosphorus = value,
            SoilField::Potassium => next.potassium = value,
            SoilField::Moisture => next.moisture = value,
            SoilField::Temperature => next.temperature = value,
            SoilField::OrganicMatter => next.organic_matter = value,
        }
        next
    }

    /// Check that every field is a real number, ignoring ranges.
    pub fn check_finite(&self) -> Result<()> {
        for field in SoilField::ALL {
            field.check_finite(self.get(field))?;
        }
        Ok(())
    }

    /// Check every field against its documented range.
    ///
    /// Returns the first violation in field order.
    pub fn validate(&self) -> Result<()> {
        for field in SoilField::ALL {
            field.check(self.get(field))?;
        }
        Ok(())
    }
}

/// Names of the seven soil measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoilField {
    Ph,
    Nitrogen,
    Phosphorus,
    Potassium,
    Moisture,
    Temperature,
    OrganicMatter,
}

/// Documented measurement range and input granularity of a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl SoilField {
    pub const ALL: [SoilField; 7] = [
        SoilField::Ph,
        SoilField::Nitrogen,
        SoilField::Phosphorus,
        SoilField::Potassium,
        SoilField::Moisture,
        SoilField::Temperature,
        SoilField::OrganicMatter,
    ];

    /// Wire name (matches the JSON key).
    pub fn name(&self) -> &'static str {
        match self {
            SoilField::Ph => "ph",
            SoilField::Nitrogen => "nitrogen",
            SoilField::Phosphorus => "phosphorus",
            SoilField::Potassium => "potassium",
            SoilField::Moisture => "moisture",
            SoilField::Temperature => "temperature",
            SoilField::OrganicMatter => "organicMatter",
        }
    }

    /// Human-readable label with unit
    pub fn label(&self) -> &'static str {
        match self {
            SoilField::Ph => "Soil pH",
            SoilField::Nitrogen => "Nitrogen (mg/kg)",
            SoilField::Phosphorus => "Phosphorus (mg/kg)",
            SoilField::Potassium => "Potassium (mg/kg)",
            SoilField::Moisture => "Moisture (%)",
            SoilField::Temperature => "Temperature (°C)",
            SoilField::OrganicMatter => "Organic Matter (%)",
        }
    }

    pub fn range(&self) -> FieldRange {
        let (min, max, step) = match self {
            SoilField::Ph => (4.0, 10.0, 0.1),
            SoilField::Nitrogen => (0.0, 200.0, 1.0),
            SoilField::Phosphorus => (0.0, 100.0, 1.0),
            SoilField::Potassium => (0.0, 150.0, 1.0),
            SoilField::Moisture => (0.0, 100.0, 1.0),
            SoilField::Temperature => (0.0, 50.0, 1.0),
            SoilField::OrganicMatter => (0.0, 10.0, 0.1),
        };
        FieldRange { min, max, step }
    }

    /// Reject NaN and infinities.
    pub fn check_finite(&self, value: f64) -> Result<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(SoilError::NotFinite { field: *self })
        }
    }

    /// Validate a single value for this field.
    pub fn check(&self, value: f64) -> Result<()> {
        self.check_finite(value)?;
        let range = self.range();
        if !range.contains(value) {
            return Err(SoilError::OutOfRange {
                field: *self,
                value,
                min: range.min,
                max: range.max,
            });
        }
        Ok(())
    }

    /// Parse a textual value for this field (no range check).
    pub fn parse_value(&self, raw: &str) -> Result<f64> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| SoilError::InvalidValue {
                field: *self,
                raw: raw.to_string(),
            })
    }
}

impl fmt::Display for SoilField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoilField {
    type Err = SoilError;

    /// Accepts the wire name plus snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "ph" => Ok(SoilField::Ph),
            "nitrogen" | "n" => Ok(SoilField::Nitrogen),
            "phosphorus" | "p" => Ok(SoilField::Phosphorus),
            "potassium" | "k" => Ok(SoilField::Potassium),
            "moisture" => Ok(SoilField::Moisture),
            "temperature" | "temp" => Ok(SoilField::Temperature),
            "organicmatter" | "om" => Ok(SoilField::OrganicMatter),
            _ => Err(SoilError::UnknownField(s.to_string())),
        }
    }
}
