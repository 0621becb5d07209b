//! Greedy capacity commitment over a ranked unit list.

use tracing::{debug, warn};

use super::types::{Commitment, DispatchPlan, NormalizedUnit, mw_to_units};

/// Output units to commit to one unit given the residual demand.
///
/// A unit that runs at all runs at or above its minimum, so a residual below
/// the minimum is rounded up to it. A unit whose minimum exceeds its maximum
/// cannot run within its limits and is left idle.
pub fn commit_units(remaining: i64, min_units: i64, max_units: i64) -> i64 {
    if remaining <= 0 || min_units > max_units {
        0
    } else if remaining > max_units {
        max_units
    } else {
        remaining.max(min_units)
    }
}

/// Walks the ranked units once, assigning production until the load is met.
///
/// The residual demand starts at the staged target of the first unit, and
/// at the load itself for an empty fleet. Units visited after the load is covered are committed at zero. If the
/// fleet runs out of capacity first, the uncovered remainder is recorded as
/// the plan's shortfall.
pub fn commit(load_mw: u32, ranked: &[NormalizedUnit]) -> DispatchPlan {
    let mut remaining = ranked
        .first()
        .map_or_else(|| mw_to_units(f64::from(load_mw)), |first| first.target_units);
    let mut commitments = Vec::with_capacity(ranked.len());

    for staged in ranked {
        if staged.min_units > staged.max_units && remaining > 0 {
            warn!(
                unit = %staged.unit.name,
                net_min_mw = staged.net_min_mw,
                net_max_mw = staged.net_max_mw,
                "minimum output exceeds maximum, unit left idle"
            );
        }

        let committed_units = commit_units(remaining, staged.min_units, staged.max_units);
        remaining -= committed_units;

        debug!(
            unit = %staged.unit.name,
            committed_units,
            remaining_units = remaining,
            "committed unit"
        );

        commitments.push(Commitment {
            name: staged.unit.name.clone(),
            fuel: staged.unit.fuel,
            net_cost_per_mwh: staged.net_cost_per_mwh,
            min_units: staged.min_units,
            max_units: staged.max_units,
            committed_units,
        });
    }

    DispatchPlan {
        load_mw,
        commitments,
        shortfall_units: remaining.max(0),
    }
}
