//! Dispatch pipeline: validate, stage, rank, commit.

use serde::Deserialize;
use tracing::{info, warn};

use super::commit::commit;
use super::error::DispatchError;
use super::fuel::DEFAULT_CO2_TONS_PER_MWH;
use super::payload::RequestPayload;
use super::ranking::rank;
use super::staging::stage;
use super::types::{DispatchPlan, DispatchRequest, OUTPUT_UNIT_MW};
use super::validate::validate;

/// Tunable engine parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchSettings {
    /// CO2 emitted by gas-fired units (ton per MWh).
    pub co2_tons_per_mwh: f64,
    /// Fail with `InsufficientCapacity` instead of returning a short plan.
    pub reject_infeasible: bool,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            co2_tons_per_mwh: DEFAULT_CO2_TONS_PER_MWH,
            reject_infeasible: false,
        }
    }
}

/// Computes the merit-order production plan for a validated request.
///
/// The plan lists every unit exactly once, in dispatch order. When the fleet
/// cannot cover the load the plan carries a shortfall; it is only an error if
/// `settings.reject_infeasible` is set.
///
/// # Errors
///
/// Returns `NonFiniteCost` if a unit's derived cost is NaN, and
/// `InsufficientCapacity` for short plans when rejection is enabled. A cost
/// that overflows to infinity is not an error; the unit ranks last.
pub fn compute_dispatch_plan(
    request: &DispatchRequest,
    settings: &DispatchSettings,
) -> Result<DispatchPlan, DispatchError> {
    let staged = stage(request, settings.co2_tons_per_mwh);
    if let Some(bad) = staged.iter().find(|s| s.net_cost_per_mwh.is_nan()) {
        return Err(DispatchError::NonFiniteCost {
            unit: bad.unit.name.clone(),
        });
    }
    for s in staged.iter().filter(|s| s.net_cost_per_mwh.is_infinite()) {
        warn!(
            unit = %s.unit.name,
            efficiency = s.unit.efficiency,
            "net cost overflows, unit ranked last"
        );
    }

    let ranked = rank(staged);
    let plan = commit(request.load_mw, &ranked);

    if plan.is_feasible() {
        info!(
            load_mw = request.load_mw,
            units = plan.commitments.len(),
            committed_mw = plan.committed_units() as f64 * OUTPUT_UNIT_MW,
            "dispatch plan computed"
        );
    } else {
        warn!(
            load_mw = request.load_mw,
            shortfall_mw = plan.shortfall_mw(),
            "fleet cannot cover load"
        );
        if settings.reject_infeasible {
            return Err(DispatchError::InsufficientCapacity {
                load_mw: request.load_mw,
                shortfall_mw: plan.shortfall_mw(),
            });
        }
    }

    Ok(plan)
}

/// Validates a raw payload and computes its plan.
///
/// # Errors
///
/// Any validation error from [`validate`], or an error from
/// [`compute_dispatch_plan`].
pub fn plan_from_payload(
    payload: &RequestPayload,
    settings: &DispatchSettings,
) -> Result<DispatchPlan, DispatchError> {
    let request = validate(payload)?;
    info!(
        load_mw = request.load_mw,
        units = request.units.len(),
        "request validated"
    );
    compute_dispatch_plan(&request, settings)
}
