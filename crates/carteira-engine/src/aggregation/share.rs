//! Percentage shares against an arbitrary denominator.

/// Returns `value` as a percentage of `denominator`.
///
/// A non-positive (or non-finite) denominator yields 0 rather than an error,
/// so an empty or not-yet-loaded portfolio reads as 0%. A non-finite value
/// also yields 0.
#[inline]
#[must_use]
pub fn share(value: f64, denominator: f64) -> f64 {
    if !denominator.is_finite() || denominator <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / denominator) * 100.0
}

/// Returns the return on cost as a percentage: `(current - applied) / applied`.
#[inline]
#[must_use]
pub fn return_percent(current_value: f64, applied_value: f64) -> f64 {
    share(current_value - applied_value, applied_value)
}
