//! Crop Suitability Engine
//!
//! Scores four crops (wheat, corn, carrots, apples) against a soil sample
//! and ranks them.
//!
//! ## Scoring
//! Each crop's raw score is the product of four factors: pH fitness (on the
//! crop's 0-peak scale), fertility, temperature fitness and a site factor
//! (moisture or organic matter). The product is clamped to [0, 100]; status,
//! note and yield derive from the clamped score, suitability is its rounded
//! value.
//!
//! ## Architecture
//! - `crops.rs` - Crop enum + fixed growing profiles
//! - `factors.rs` - The four scoring factors
//! - `rating.rs` - Status tiers
//! - `recommendation.rs` - Per-crop output
//! - `estimator.rs` - Ranking, batch estimation, reports

pub mod crops;
pub mod factors;
pub mod rating;
pub mod recommendation;
pub mod estimator;

// Re-export public API
pub use crops::{Crop, CropProfile};
pub use factors::{factor_breakdown, FactorBreakdown};
pub use rating::SuitabilityStatus;
pub use recommendation::CropRecommendation;
pub use estimator::{assess, crop_score, estimate, estimate_batch, SuitabilityReport};
