use std::time::Instant;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::{error::ApiError, response::ApiResponse, AppState},
    domain::{GeneratorSpec, PlanEntry},
    solver,
};

const SOLVER_VERSION: &str = "dp-exact-0.1";

/// Request to dispatch a load across a fleet
#[derive(Debug, Deserialize, Validate)]
pub struct DispatchRequest {
    #[validate(length(min = 1, message = "at least one generator is required"))]
    pub generators: Vec<GeneratorSpec>,
    pub load: u32,
}

/// Solved dispatch, full precision. Clients round for display.
#[derive(Debug, Serialize)]
pub struct DispatchReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub entries: Vec<PlanEntry>,
    pub total_cost: f64,
    pub solver_version: String,
    pub duration_ms: u64,
}

/// POST /api/v1/dispatch - Solve one economic dispatch problem
pub async fn solve(
    State(state): State<AppState>,
    Json(request): Json<DispatchRequest>,
) -> Result<Json<ApiResponse<DispatchReport>>, ApiError> {
    request.validate()?;

    let limits = &state.cfg.solver;
    if request.generators.len() > limits.max_generators {
        return Err(ApiError::BadRequest(format!(
            "fleet size {} exceeds the configured maximum of {}",
            request.generators.len(),
            limits.max_generators
        )));
    }
    if request.load > limits.max_load {
        return Err(ApiError::BadRequest(format!(
            "load {} exceeds the configured maximum of {}",
            request.load, limits.max_load
        )));
    }

    tracing::info!(
        fleet = request.generators.len(),
        load = request.load,
        "dispatch requested"
    );

    let started = Instant::now();
    let plan = solver::solve_dispatch(&request.generators, request.load)?;
    let duration_ms = started.elapsed().as_millis() as u64;

    let report = DispatchReport {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        entries: plan.entries,
        total_cost: plan.total_cost,
        solver_version: SOLVER_VERSION.to_string(),
        duration_ms,
    };

    Ok(Json(ApiResponse::success(report)))
}
