use crate::domain::GeneratorSpec;

/// Generation cost of producing `p` units on a unit with quadratic
/// coefficient `a`, linear coefficient `b` and no-load cost `d`.
///
/// A unit producing nothing incurs no cost at all: the `d` term is
/// suppressed at `p = 0` along with the polynomial part. Pure and total
/// over all real `p`.
pub fn generation_cost(a: f64, b: f64, d: f64, p: f64) -> f64 {
    if p == 0.0 {
        return 0.0;
    }
    0.5 * a * p * p + b * p + d
}

/// Cost of drawing `p` whole units from `spec`.
pub(crate) fn unit_cost(spec: &GeneratorSpec, p: u32) -> f64 {
    generation_cost(spec.a, spec.b, spec.d, f64::from(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_output_is_free_even_with_no_load_cost() {
        assert_eq!(generation_cost(2.0, 10.0, 5.0, 0.0), 0.0);
        assert_eq!(generation_cost(0.0, 0.0, 123.0, 0.0), 0.0);
    }

    #[test]
    fn quadratic_curve_at_fifty_units() {
        // 0.5 * 2 * 2500 + 10 * 50 + 5
        assert_eq!(generation_cost(2.0, 10.0, 5.0, 50.0), 3005.0);
    }

    #[test]
    fn unit_cost_matches_free_function() {
        let g = GeneratorSpec::new(0.0, 100.0, 1.0, 2.0, 3.0);
        assert_eq!(unit_cost(&g, 4), generation_cost(1.0, 2.0, 3.0, 4.0));
    }
}
