use serde::{Deserialize, Serialize};

/// A confidence interval for a mean or a difference of means.
///
/// One-sided intervals carry an infinite bound on the open side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceInterval {
    #[serde(rename = "ci_level")]
    pub level: f64,
    #[serde(rename = "ci_lower", with = "crate::domain::extended_float")]
    pub lower: f64,
    #[serde(rename = "ci_upper", with = "crate::domain::extended_float")]
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn new(level: f64, lower: f64, upper: f64) -> Self {
        Self { level, lower, upper }
    }

    /// Bounds are inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let ci = ConfidenceInterval::new(0.95, 1.0, 2.0);
        assert!(ci.contains(1.0));
        assert!(ci.contains(2.0));
        assert!(!ci.contains(2.000001));
        assert_eq!(ci.width(), 1.0);
    }

    #[test]
    fn test_one_sided_interval_is_unbounded() {
        let ci = ConfidenceInterval::new(0.95, 3.0, f64::INFINITY);
        assert!(!ci.is_bounded());
        assert!(ci.contains(1e300));
    }
}
