use serde::{Deserialize, Serialize};

/// One physical generating unit: output bounds plus the coefficients of its
/// quadratic cost curve `0.5·a·p² + b·p + d`.
///
/// Immutable value type; validated once at the solve boundary, never
/// re-checked during table construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSpec {
    /// Minimum output in whole power units while the unit is running.
    pub min_output: f64,
    /// Maximum output in whole power units.
    pub max_output: f64,
    /// Quadratic coefficient of the cost curve.
    pub a: f64,
    /// Linear coefficient of the cost curve.
    pub b: f64,
    /// No-load (constant) cost term.
    pub d: f64,
}

impl GeneratorSpec {
    pub fn new(min_output: f64, max_output: f64, a: f64, b: f64, d: f64) -> Self {
        Self {
            min_output,
            max_output,
            a,
            b,
            d,
        }
    }

    /// All five fields finite, bounds non-negative and ordered.
    pub fn is_valid(&self) -> bool {
        [self.min_output, self.max_output, self.a, self.b, self.d]
            .iter()
            .all(|v| v.is_finite())
            && self.min_output >= 0.0
            && self.min_output <= self.max_output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_spec_accepted() {
        assert!(GeneratorSpec::new(0.0, 100.0, 2.0, 10.0, 5.0).is_valid());
    }

    #[test]
    fn inverted_bounds_rejected() {
        assert!(!GeneratorSpec::new(10.0, 5.0, 1.0, 1.0, 0.0).is_valid());
    }

    #[test]
    fn non_finite_fields_rejected() {
        assert!(!GeneratorSpec::new(0.0, f64::NAN, 1.0, 1.0, 0.0).is_valid());
        assert!(!GeneratorSpec::new(0.0, 10.0, f64::INFINITY, 1.0, 0.0).is_valid());
    }

    #[test]
    fn negative_minimum_rejected() {
        assert!(!GeneratorSpec::new(-1.0, 10.0, 1.0, 1.0, 0.0).is_valid());
    }
}
