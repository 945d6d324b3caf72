use std::ops::RangeInclusive;

use crate::domain::GeneratorSpec;

use super::cost::unit_cost;

/// Staged minimum-cost table and its companion choice table.
///
/// `dp[i][j]` is the cheapest way to supply exactly `j` units from
/// generators `0..=i`, with `f64::INFINITY` as the unreachable sentinel.
/// `path[i][j]` records the output drawn from generator `i` in that
/// optimum, `None` where the cell is unreachable. Both are built once per
/// solve and never mutated afterwards.
pub struct DispatchTable {
    pub dp: Vec<Vec<f64>>,
    pub path: Vec<Vec<Option<u32>>>,
}

impl DispatchTable {
    pub fn reachable(&self, stage: usize, load: u32) -> bool {
        self.dp[stage][load as usize].is_finite()
    }
}

/// Whole-unit candidate outputs for `spec` given `cap` units of headroom.
/// Empty when the rounded bounds cross (e.g. both bounds strictly between
/// the same two integers).
fn candidate_range(spec: &GeneratorSpec, cap: u32) -> RangeInclusive<u32> {
    let lo = spec.min_output.ceil().max(0.0) as u32;
    let hi = spec.max_output.floor().min(f64::from(cap)) as u32;
    lo..=hi
}

/// Build the full `N × (L+1)` tables for a validated fleet.
///
/// Replacement happens only on strict improvement, so among tied optima the
/// lowest qualifying output for the current generator is kept (candidates
/// are enumerated in ascending order). The build itself never fails; an
/// unreachable `dp[N-1][L]` is the terminal infeasibility condition and is
/// checked by the caller.
pub fn build_table(generators: &[GeneratorSpec], load: u32) -> DispatchTable {
    let stages = generators.len();
    let width = load as usize + 1;
    let mut dp = vec![vec![f64::INFINITY; width]; stages];
    let mut path = vec![vec![None; width]; stages];

    // Base stage: only the first generator's own range is reachable.
    for p in candidate_range(&generators[0], load) {
        dp[0][p as usize] = unit_cost(&generators[0], p);
        path[0][p as usize] = Some(p);
    }

    for i in 1..stages {
        for j in 0..=load {
            for p in candidate_range(&generators[i], j) {
                let prior = dp[i - 1][(j - p) as usize];
                if !prior.is_finite() {
                    continue;
                }
                let candidate = prior + unit_cost(&generators[i], p);
                if candidate < dp[i][j as usize] {
                    dp[i][j as usize] = candidate;
                    path[i][j as usize] = Some(p);
                }
            }
        }
    }

    DispatchTable { dp, path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_stage_covers_exactly_the_first_generator_range() {
        let gens = vec![GeneratorSpec::new(2.0, 4.0, 1.0, 0.0, 0.0)];
        let table = build_table(&gens, 6);

        assert!(!table.reachable(0, 0));
        assert!(!table.reachable(0, 1));
        for j in 2..=4 {
            assert!(table.reachable(0, j));
            assert_eq!(table.path[0][j as usize], Some(j));
        }
        assert!(!table.reachable(0, 5));
        assert!(!table.reachable(0, 6));
    }

    #[test]
    fn candidate_range_is_capped_by_headroom() {
        let g = GeneratorSpec::new(0.0, 50.0, 1.0, 1.0, 1.0);
        assert_eq!(candidate_range(&g, 7), 0..=7);
        assert_eq!(candidate_range(&g, 60), 0..=50);
    }

    #[test]
    fn fractional_bounds_round_inwards() {
        let g = GeneratorSpec::new(1.2, 3.8, 1.0, 1.0, 1.0);
        assert_eq!(candidate_range(&g, 10), 2..=3);
        // Bounds trapped between the same two integers admit nothing.
        let narrow = GeneratorSpec::new(1.4, 1.6, 1.0, 1.0, 1.0);
        assert!(candidate_range(&narrow, 10).is_empty());
    }

    #[test]
    fn ties_keep_the_lowest_output_of_the_later_stage() {
        // Linear identical units: every split of 10 costs 10, so the first
        // candidate (p = 0 for the second unit) must win.
        let gens = vec![
            GeneratorSpec::new(0.0, 10.0, 0.0, 1.0, 0.0),
            GeneratorSpec::new(0.0, 10.0, 0.0, 1.0, 0.0),
        ];
        let table = build_table(&gens, 10);
        assert_eq!(table.dp[1][10], 10.0);
        assert_eq!(table.path[1][10], Some(0));
    }
}
