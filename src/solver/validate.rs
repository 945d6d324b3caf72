use crate::domain::GeneratorSpec;

use super::DispatchError;

/// Up-front feasibility screen, run before any table is allocated.
///
/// Only the cheap global bound checks happen here; interior infeasibility
/// (a load inside `[Σmin, Σmax]` that no exact combination reaches) is
/// caught by the unreachable final table cell after the build.
pub fn check_feasibility(generators: &[GeneratorSpec], load: u32) -> Result<(), DispatchError> {
    if generators.is_empty() {
        return Err(DispatchError::EmptyFleet);
    }
    if load == 0 {
        return Err(DispatchError::ZeroLoad);
    }
    for (idx, spec) in generators.iter().enumerate() {
        if !spec.is_valid() {
            // 1-based index in the reason, matching plan entries
            return Err(DispatchError::InvalidGenerator(idx + 1));
        }
    }

    let total_max: f64 = generators.iter().map(|g| g.max_output).sum();
    let total_min: f64 = generators.iter().map(|g| g.min_output).sum();
    if f64::from(load) > total_max {
        return Err(DispatchError::ExceedsCapacity);
    }
    if f64::from(load) < total_min {
        return Err(DispatchError::BelowMinimum);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fleet() -> Vec<GeneratorSpec> {
        vec![
            GeneratorSpec::new(10.0, 50.0, 1.0, 5.0, 0.0),
            GeneratorSpec::new(5.0, 30.0, 2.0, 2.0, 1.0),
        ]
    }

    #[test]
    fn admits_load_within_fleet_range() {
        assert_eq!(check_feasibility(&fleet(), 40), Ok(()));
    }

    #[rstest]
    #[case(0, DispatchError::ZeroLoad)]
    #[case(81, DispatchError::ExceedsCapacity)]
    #[case(14, DispatchError::BelowMinimum)]
    fn rejects_out_of_range_loads(#[case] load: u32, #[case] expected: DispatchError) {
        assert_eq!(check_feasibility(&fleet(), load), Err(expected));
    }

    #[test]
    fn rejects_empty_fleet() {
        assert_eq!(check_feasibility(&[], 10), Err(DispatchError::EmptyFleet));
    }

    #[test]
    fn names_the_offending_generator() {
        let mut gens = fleet();
        gens[1].a = f64::NAN;
        assert_eq!(
            check_feasibility(&gens, 40),
            Err(DispatchError::InvalidGenerator(2))
        );
    }

    #[test]
    fn boundary_loads_are_feasible() {
        assert_eq!(check_feasibility(&fleet(), 15), Ok(()));
        assert_eq!(check_feasibility(&fleet(), 80), Ok(()));
    }
}
