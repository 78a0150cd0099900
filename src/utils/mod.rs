//! Utility modules for suitability estimation
//!
//! - Rounding: score rounding and one-decimal yield formatting

pub mod rounding;

// Re-export commonly used functions
pub use rounding::{round_half_up, to_fixed_1};
