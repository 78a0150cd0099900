//! Input Collector
//!
//! Holds the soil sample being edited and hands it to the estimator on
//! submission. Every edit replaces the held sample with an updated copy;
//! nothing is mutated in place.
//!
//! Listeners receive a [`AnalysisEvent::Submitted`] before estimation and a
//! [`AnalysisEvent::Completed`] after it. What they do with those (delay,
//! notify, scroll a view) has no effect on the result.

use tracing::{info, warn};

use crate::error::{Result, SoilError};
use crate::sample::{SoilField, SoilSample};
use crate::suitability::{assess, SuitabilityReport};

/// Notification emitted around an analysis.
#[derive(Debug, Clone)]
pub enum AnalysisEvent {
    Submitted(SoilSample),
    Completed(SuitabilityReport),
}

impl AnalysisEvent {
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisEvent::Submitted(_) => "Analysis Started",
            AnalysisEvent::Completed(_) => "Analysis Complete",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnalysisEvent::Submitted(_) => "Your soil parameters have been submitted for analysis.",
            AnalysisEvent::Completed(_) => {
                "Your soil analysis has been processed and crop recommendations are ready."
            }
        }
    }
}

/// Receiver of [`AnalysisEvent`]s.
pub trait AnalysisListener {
    fn on_event(&mut self, event: &AnalysisEvent);
}

impl<F> AnalysisListener for F
where
    F: FnMut(&AnalysisEvent),
{
    fn on_event(&mut self, event: &AnalysisEvent) {
        self(event)
    }
}

/// Current soil sample plus the edit/submit operations on it.
#[derive(Debug, Clone)]
pub struct InputCollector {
    sample: SoilSample,
    /// Reject values outside each field's documented range
    strict: bool,
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl InputCollector {
    /// Lenient collector starting from the default sample.
    pub fn new() -> Self {
        Self {
            sample: SoilSample::default(),
            strict: false,
        }
    }

    /// Collector that validates every edit.
    pub fn strict() -> Self {
        Self {
            sample: SoilSample::default(),
            strict: true,
        }
    }

    pub fn with_sample(mut self, sample: SoilSample) -> Self {
        self.sample = sample;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn sample(&self) -> SoilSample {
        self.sample
    }

    /// Replace one field. NaN and infinities are always rejected; in strict
    /// mode so is anything outside the field's range. A rejected value leaves
    /// the sample unchanged.
    pub fn update(&mut self, field: SoilField, value: f64) -> Result<SoilSample> {
        let checked = if self.strict {
            field.check(value)
        } else {
            field.check_finite(value)
        };
        if let Err(e) = checked {
            warn!(field = field.name(), value, "rejected soil input: {}", e);
            return Err(e);
        }
        self.sample = self.sample.with_field(field, value);
        Ok(self.sample)
    }

    /// Parse `name` and `raw` then apply as [`InputCollector::update`].
    pub fn update_str(&mut self, name: &str, raw: &str) -> Result<SoilSample> {
        let field: SoilField = name.parse()?;
        let value = field.parse_value(raw)?;
        self.update(field, value)
    }

    /// Apply a `FIELD=VALUE` override such as `organicMatter=2.5`.
    pub fn apply_assignment(&mut self, entry: &str) -> Result<SoilSample> {
        let (name, raw) = entry
            .split_once('=')
            .ok_or_else(|| SoilError::MalformedAssignment(entry.to_string()))?;
        self.update_str(name, raw)
    }

    pub fn reset(&mut self) {
        self.sample = SoilSample::default();
    }

    /// Run the estimator on the current sample, notifying `listener`.
    pub fn submit<L: AnalysisListener + ?Sized>(&self, listener: &mut L) -> SuitabilityReport {
        let sample = self.sample;
        info!(?sample, "soil analysis submitted");
        listener.on_event(&AnalysisEvent::Submitted(sample));

        let report = assess(&sample);
        info!(top_crop = %report.top_crop, "soil analysis complete");
        listener.on_event(&AnalysisEvent::Completed(report.clone()));

        report
    }
}
