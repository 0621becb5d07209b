//! Unit staging: derives net efficiency, net cost, and discretised capacity.

use tracing::debug;

use super::fuel::resolve;
use super::types::{DispatchRequest, GenerationUnit, NormalizedUnit, mw_to_units};

/// Divides, treating a zero divisor as yielding zero.
fn div_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Stages a single unit against the request's prices and load.
pub fn normalize_unit(
    unit: &GenerationUnit,
    request: &DispatchRequest,
    co2_tons_per_mwh: f64,
) -> NormalizedUnit {
    let cost = resolve(unit.fuel, &request.fuels, co2_tons_per_mwh);

    let net_efficiency = unit.efficiency * cost.derating;
    let net_fuel_cost_per_mwh = div_or_zero(cost.fuel_cost_per_mwh, net_efficiency);
    let net_cost_per_mwh =
        div_or_zero(net_fuel_cost_per_mwh, unit.efficiency) + cost.co2_cost_per_mwh;

    let net_max_mw = f64::from(unit.pmax_mw) * cost.derating;
    let net_min_mw = f64::from(unit.pmin_mw) * cost.derating;

    let staged = NormalizedUnit {
        unit: unit.clone(),
        fuel_cost_per_mwh: cost.fuel_cost_per_mwh,
        co2_cost_per_mwh: cost.co2_cost_per_mwh,
        derating: cost.derating,
        net_efficiency,
        net_fuel_cost_per_mwh,
        net_cost_per_mwh,
        net_min_mw,
        net_max_mw,
        min_units: mw_to_units(net_min_mw),
        max_units: mw_to_units(net_max_mw),
        target_units: mw_to_units(f64::from(request.load_mw)),
    };

    debug!(
        unit = %staged.unit.name,
        fuel = %staged.unit.fuel,
        net_cost_per_mwh = staged.net_cost_per_mwh,
        net_min_mw = staged.net_min_mw,
        net_max_mw = staged.net_max_mw,
        "staged unit"
    );

    staged
}

/// Stages every unit of the request, preserving caller order.
pub fn stage(request: &DispatchRequest, co2_tons_per_mwh: f64) -> Vec<NormalizedUnit> {
    request
        .units
        .iter()
        .map(|unit| normalize_unit(unit, request, co2_tons_per_mwh))
        .collect()
}
