use serde::{Deserialize, Serialize};

/// One generator's slice of the dispatch. `generator` is the 1-based fleet
/// position, `cost` the generation cost at the chosen output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub generator: usize,
    pub output: u32,
    pub cost: f64,
}

/// The least-cost dispatch for one solve: one entry per generator in fleet
/// order, outputs summing exactly to the requested load.
///
/// `total_cost` is the optimum taken straight from the cost table; it is
/// never rounded here (rounding is a presentation concern for callers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationPlan {
    pub entries: Vec<PlanEntry>,
    pub total_cost: f64,
}

impl GenerationPlan {
    /// Sum of all plan outputs. Equals the solved load for any plan this
    /// crate produces.
    pub fn total_output(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.output)).sum()
    }
}
