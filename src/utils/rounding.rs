//! Rounding Utilities
//!
//! Display rounding for suitability scores and yield figures.
//!
//! Scores round half up (24.5 → 25). Yields are printed with one decimal
//! digit, rounding the exact binary value of the double: 4.5 × 0.9 is stored
//! as 4.04999…, so it prints as "4.0". Values whose binary expansion is an
//! exact tie (1.25, 0.75) round away from zero, which `format!("{:.1}")`
//! alone would not do.

/// Round to the nearest integer, halves upward.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Format with exactly one fractional digit.
pub fn to_fixed_1(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let scaled = value * 10.0;
    // mul_add is exact here: zero residue means `scaled` holds value × 10 without rounding
    let exact_tie = scaled.fract().abs() == 0.5 && value.mul_add(10.0, -scaled) == 0.0;

    let text = if exact_tie {
        let away_from_zero = scaled.abs().ceil().copysign(value);
        format!("{:.1}", away_from_zero / 10.0)
    } else {
        format!("{:.1}", value)
    };

    // "-0.0" only arises from negative values that round to zero
    if text == "-0.0" {
        "0.0".to_string()
    } else {
        text
    }
}
