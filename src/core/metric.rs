//! Bounded percentage metrics.
//!
//! A [`Metric`] is a value in `[0.0, 100.0]`, rounded to two decimal places
//! on every mutation. The simulation tracks two of them: cleanliness and
//! health.

use serde::{Deserialize, Serialize};

/// Upper bound of every metric.
pub const FULL: f64 = 100.0;

/// A bounded `[0, 100]` percentage value.
///
/// All mutation goes through [`Metric::adjust`], which clamps to the bounds
/// and rounds to two decimal places, so a `Metric` read at any point holds a
/// well-formed display value.
///
/// # Example
///
/// ```rust
/// use brushup::core::Metric;
///
/// let mut clean = Metric::full();
/// clean.adjust(-12.5);
/// assert_eq!(clean.value(), 87.5);
/// clean.adjust(1000.0);
/// assert_eq!(clean.value(), 100.0);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metric(f64);

impl Metric {
    /// Create a metric, clamping and rounding the given value.
    pub fn new(value: f64) -> Self {
        Metric(quantize(value))
    }

    /// A metric at the upper bound (the default for a fresh session).
    pub fn full() -> Self {
        Metric(FULL)
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Apply a signed delta, clamping to `[0, 100]` and rounding to two
    /// decimal places.
    pub fn adjust(&mut self, delta: f64) {
        self.0 = quantize(self.0 + delta);
    }

    /// Whether the metric has bottomed out.
    pub fn is_depleted(&self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::full()
    }
}

fn quantize(value: f64) -> f64 {
    let clamped = value.clamp(0.0, FULL);
    (clamped * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_metric_reads_one_hundred() {
        assert_eq!(Metric::full().value(), 100.0);
        assert!(!Metric::full().is_depleted());
    }

    #[test]
    fn adjust_clamps_at_upper_bound() {
        let mut metric = Metric::full();
        metric.adjust(25.0);
        assert_eq!(metric.value(), 100.0);
    }

    #[test]
    fn adjust_clamps_at_lower_bound() {
        let mut metric = Metric::new(10.0);
        metric.adjust(-25.0);
        assert_eq!(metric.value(), 0.0);
        assert!(metric.is_depleted());
    }

    #[test]
    fn adjust_rounds_to_two_decimals() {
        let mut metric = Metric::new(50.0);
        metric.adjust(-12.5);
        metric.adjust(-12.5);
        assert_eq!(metric.value(), 25.0);

        let mut odd = Metric::new(0.0);
        odd.adjust(33.333_333);
        assert_eq!(odd.value(), 33.33);
    }

    #[test]
    fn new_quantizes_input() {
        assert_eq!(Metric::new(150.0).value(), 100.0);
        assert_eq!(Metric::new(-3.0).value(), 0.0);
        assert_eq!(Metric::new(12.345).value(), 12.35);
    }

    #[test]
    fn metric_serializes_transparently() {
        let metric = Metric::new(87.5);
        let json = serde_json::to_string(&metric).unwrap();
        assert_eq!(json, "87.5");
        let back: Metric = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metric);
    }
}
