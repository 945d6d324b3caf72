use crate::domain::{GenerationPlan, GeneratorSpec, PlanEntry};

use super::{cost::unit_cost, table::DispatchTable, DispatchError};

/// Walk the completed tables from the final stage back to the first,
/// recovering each generator's share of the load.
///
/// An unreachable final cell means no exact combination exists and the
/// whole solve fails; a reachable final cell guarantees every choice cell
/// visited on the way down is populated.
pub fn extract_plan(
    generators: &[GeneratorSpec],
    table: &DispatchTable,
    load: u32,
) -> Result<GenerationPlan, DispatchError> {
    let stages = generators.len();
    let total_cost = table.dp[stages - 1][load as usize];
    if !total_cost.is_finite() {
        return Err(DispatchError::NoFeasiblePlan);
    }

    let mut entries = Vec::with_capacity(stages);
    let mut remaining = load;
    for i in (0..stages).rev() {
        let output = table.path[i][remaining as usize].ok_or(DispatchError::NoFeasiblePlan)?;
        entries.push(PlanEntry {
            generator: i + 1,
            output,
            cost: unit_cost(&generators[i], output),
        });
        remaining -= output;
    }
    debug_assert_eq!(remaining, 0, "plan outputs must consume the whole load");
    entries.reverse();

    Ok(GenerationPlan {
        entries,
        total_cost,
    })
}
