//! Fuel cost resolution per fuel category.

use super::types::{FuelPrices, FuelType};

/// Default CO2 emission factor for gas-fired plants (ton CO2 per MWh).
pub const DEFAULT_CO2_TONS_PER_MWH: f64 = 0.3;

/// Effective costs and availability for one fuel category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelCost {
    /// Fuel cost (€/MWh of fuel).
    pub fuel_cost_per_mwh: f64,
    /// Emission allowance cost (€/MWh produced).
    pub co2_cost_per_mwh: f64,
    /// Output derating: wind availability for wind units, otherwise 1.0.
    pub derating: f64,
}

/// Resolves the effective fuel cost, CO2 cost, and derating of a fuel type.
///
/// # Arguments
///
/// * `fuel` - Fuel category of the unit
/// * `prices` - Prices for the dispatch period
/// * `co2_tons_per_mwh` - Emission factor applied to gas-fired units
///
/// # Examples
///
/// ```
/// use merit_plan::dispatch::fuel::{DEFAULT_CO2_TONS_PER_MWH, resolve};
/// use merit_plan::dispatch::types::{FuelPrices, FuelType};
///
/// let prices = FuelPrices {
///     gas_eur_per_mwh: 13.4,
///     kerosine_eur_per_mwh: 50.8,
///     co2_eur_per_ton: 20.0,
///     wind_percent: 60.0,
/// };
/// let gas = resolve(FuelType::GasFired, &prices, DEFAULT_CO2_TONS_PER_MWH);
/// assert_eq!(gas.fuel_cost_per_mwh, 13.4);
/// assert!((gas.co2_cost_per_mwh - 6.0).abs() < 1e-9);
/// ```
pub fn resolve(fuel: FuelType, prices: &FuelPrices, co2_tons_per_mwh: f64) -> FuelCost {
    match fuel {
        FuelType::GasFired => FuelCost {
            fuel_cost_per_mwh: prices.gas_eur_per_mwh,
            co2_cost_per_mwh: prices.co2_eur_per_ton * co2_tons_per_mwh,
            derating: 1.0,
        },
        FuelType::Turbojet => FuelCost {
            fuel_cost_per_mwh: prices.kerosine_eur_per_mwh,
            co2_cost_per_mwh: 0.0,
            derating: 1.0,
        },
        FuelType::WindTurbine => FuelCost {
            fuel_cost_per_mwh: 0.0,
            co2_cost_per_mwh: 0.0,
            derating: prices.wind_percent / 100.0,
        },
    }
}
