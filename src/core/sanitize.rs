//! Numeric input sanitization
//!
//! These normalizers sit at the boundary between free-text form input and
//! the domain model, so the model never stores an invalid number. Bad input
//! is never an error: data entry stays uninterrupted and the value is
//! coerced to a safe default instead.

/// Coerce raw quantity input to an integer of at least 1.
///
/// Non-numeric and negative input both coerce to 1.
pub fn quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().map(|q| q.max(1)).unwrap_or(1)
}

/// Coerce raw unit-price input to a non-negative amount.
///
/// Non-numeric and negative input both coerce to 0.
pub fn price(raw: &str) -> f64 {
    non_negative(raw)
}

/// Coerce raw down-payment input to a non-negative amount.
///
/// Same rule as [`price`]: non-numeric and negative input coerce to 0.
pub fn down_payment(raw: &str) -> f64 {
    non_negative(raw)
}

fn non_negative(raw: &str) -> f64 {
    // f64::max treats NaN as absent, so "NaN" input also lands on 0.
    raw.trim().parse::<f64>().map(|v| v.max(0.0)).unwrap_or(0.0)
}
