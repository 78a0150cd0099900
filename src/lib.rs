//! Soil Crop Estimator
//!
//! Scores how well wheat, corn, carrots and apples suit a soil sample and
//! ranks them, with a yield estimate and a status tier per crop.
//!
//! - `sample`: the seven soil measurements and their documented ranges
//! - `suitability/`: crop profiles, scoring factors, the estimator
//! - `collector`: editable input state with submit notifications
//! - `formatters/`: Markdown and JSON reports
//! - `config`: server settings from the environment
//! - `api_server` (feature `api`): Axum JSON API

pub mod error;
pub mod sample;
pub mod utils;
pub mod suitability;
pub mod collector;
pub mod formatters;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::SoilError;
pub use sample::{FieldRange, SoilField, SoilSample};
pub use suitability::{
    assess, estimate, estimate_batch, factor_breakdown, Crop, CropRecommendation,
    SuitabilityReport, SuitabilityStatus,
};
pub use collector::{AnalysisEvent, AnalysisListener, InputCollector};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
