//! API response types.

use serde::Serialize;

use crate::dispatch::{DispatchEntry, PlanSummary};

/// Plan together with its aggregate figures.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// Production per unit, in dispatch order.
    pub plan: Vec<DispatchEntry>,
    /// Aggregate figures for the plan.
    pub summary: PlanSummary,
}

/// Error response body for 4xx and 5xx replies.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
