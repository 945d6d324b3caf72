//! Exact DP-based single-period economic dispatch.
//!
//! The [`solver`] module is the core: given a fleet of
//! [`domain::GeneratorSpec`]s and an integer load, it computes the
//! least-cost whole-unit dispatch by dynamic programming over discretized
//! power levels. The [`api`] module is a thin axum transport around
//! [`solver::solve_dispatch`].

pub mod api;
pub mod config;
pub mod domain;
pub mod solver;
pub mod telemetry;
