//! Exact single-period economic dispatch.
//!
//! The pipeline is strictly staged: [`check_feasibility`] admits or rejects
//! the problem before anything is allocated, [`build_table`] fills the
//! minimum-cost and choice tables, and the backtracker recovers the
//! per-generator plan from the final cell. Each solve owns its
//! tables exclusively and retains nothing across calls, so independent
//! requests can run side by side without coordination.

mod backtrack;
mod cost;
mod table;
mod validate;

pub use cost::generation_cost;
pub use table::{build_table, DispatchTable};
pub use validate::check_feasibility;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{GenerationPlan, GeneratorSpec};

/// Why a solve produced no plan. Input errors are caught before any table
/// is built; infeasibility can additionally surface from the completed
/// table when no exact combination reaches the load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("no generators supplied")]
    EmptyFleet,

    #[error("invalid numeric input at generator {0}")]
    InvalidGenerator(usize),

    #[error("load must be greater than zero")]
    ZeroLoad,

    #[error("load exceeds total maximum capacity")]
    ExceedsCapacity,

    #[error("load below total minimum requirement")]
    BelowMinimum,

    #[error("no feasible generation plan found")]
    NoFeasiblePlan,
}

impl DispatchError {
    /// True for malformed input, recoverable by correcting the request;
    /// false for loads the fleet genuinely cannot meet.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyFleet | Self::InvalidGenerator(_) | Self::ZeroLoad
        )
    }
}

/// Compute the least-cost dispatch of `load` whole units across the fleet.
///
/// Synchronous and stateless: the call runs to completion, and the returned
/// plan is the only thing that outlives it. Time is `O(N·L²)` worst case,
/// space `O(N·L)`.
pub fn solve_dispatch(
    generators: &[GeneratorSpec],
    load: u32,
) -> Result<GenerationPlan, DispatchError> {
    check_feasibility(generators, load)?;
    debug!(fleet = generators.len(), load, "building dispatch tables");

    let table = table::build_table(generators, load);
    let plan = backtrack::extract_plan(generators, &table, load)?;

    info!(
        fleet = generators.len(),
        load,
        total_cost = plan.total_cost,
        "dispatch solved"
    );
    Ok(plan)
}
