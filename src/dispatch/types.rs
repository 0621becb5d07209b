//! Core dispatch types: fuel prices, generation units, requests, and plans.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::DispatchError;

/// Size of one discrete output unit in MW.
pub const OUTPUT_UNIT_MW: f64 = 0.1;

/// Number of output units per MW (inverse of [`OUTPUT_UNIT_MW`]).
pub const UNITS_PER_MW: i64 = 10;

/// Tolerance applied before flooring MW values into output units, so that
/// binary representation error (e.g. `36.0 * 0.6 = 21.599999…`) never drops
/// a whole unit.
const UNIT_ROUNDING_EPSILON: f64 = 1e-6;

/// Converts a non-negative MW quantity into whole output units.
///
/// # Examples
///
/// ```
/// use merit_plan::dispatch::types::mw_to_units;
///
/// assert_eq!(mw_to_units(21.6), 216);
/// assert_eq!(mw_to_units(36.0 * 0.6), 216);
/// assert_eq!(mw_to_units(0.0), 0);
/// ```
pub fn mw_to_units(mw: f64) -> i64 {
    (mw / OUTPUT_UNIT_MW + UNIT_ROUNDING_EPSILON).floor() as i64
}

/// Converts output units to integer MW, truncating any fractional remainder.
pub fn units_to_whole_mw(units: i64) -> u32 {
    u32::try_from(units.max(0) / UNITS_PER_MW).unwrap_or(u32::MAX)
}

/// Market prices and wind conditions for one dispatch period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelPrices {
    /// Gas price (€/MWh).
    pub gas_eur_per_mwh: f64,
    /// Kerosine price (€/MWh).
    pub kerosine_eur_per_mwh: f64,
    /// CO2 emission allowance price (€/ton).
    pub co2_eur_per_ton: f64,
    /// Wind availability in percent (0–100).
    pub wind_percent: f64,
}

/// Fuel category of a generation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    /// Gas-fired plant, burns gas and emits CO2.
    GasFired,
    /// Turbojet, burns kerosine.
    Turbojet,
    /// Wind turbine, output derated by wind availability.
    WindTurbine,
}

impl FuelType {
    /// All supported fuel types.
    pub const ALL: [Self; 3] = [Self::GasFired, Self::Turbojet, Self::WindTurbine];

    /// Wire name of this fuel type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GasFired => "gasfired",
            Self::Turbojet => "turbojet",
            Self::WindTurbine => "windturbine",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == s)
            .ok_or_else(|| DispatchError::UnsupportedFuelType {
                unit: String::new(),
                fuel: s.to_string(),
            })
    }
}

/// A generation unit as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationUnit {
    /// Unit name, non-empty.
    pub name: String,
    /// Fuel category.
    pub fuel: FuelType,
    /// Conversion efficiency (0.0–1.0).
    pub efficiency: f64,
    /// Minimum output when running (MW).
    pub pmin_mw: u32,
    /// Maximum output (MW).
    pub pmax_mw: u32,
}

/// A validated dispatch request.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    /// Total load to cover (MW, > 0).
    pub load_mw: u32,
    /// Prices for the dispatch period.
    pub fuels: FuelPrices,
    /// Generation fleet in caller order.
    pub units: Vec<GenerationUnit>,
}

/// A generation unit enriched with derived cost and capacity figures.
///
/// Created once per request during staging, reordered by ranking, and read
/// by the committer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedUnit {
    /// The unit as supplied.
    pub unit: GenerationUnit,
    /// Fuel cost (€/MWh of fuel).
    pub fuel_cost_per_mwh: f64,
    /// CO2 cost (€/MWh produced).
    pub co2_cost_per_mwh: f64,
    /// Availability multiplier: 1.0 except for wind.
    pub derating: f64,
    /// `efficiency * derating`.
    pub net_efficiency: f64,
    /// `fuel_cost_per_mwh / net_efficiency`, or 0 when net efficiency is 0.
    pub net_fuel_cost_per_mwh: f64,
    /// All-in marginal cost used for ranking (€/MWh).
    pub net_cost_per_mwh: f64,
    /// Derated minimum output (MW).
    pub net_min_mw: f64,
    /// Derated maximum output (MW).
    pub net_max_mw: f64,
    /// Derated minimum output in output units.
    pub min_units: i64,
    /// Derated maximum output in output units.
    pub max_units: i64,
    /// Requested load in output units.
    pub target_units: i64,
}

/// One line of the production plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchEntry {
    /// Unit name.
    pub name: String,
    /// Committed production (MW, truncated).
    pub p: u32,
}

/// Production committed to a single unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Commitment {
    /// Unit name.
    pub name: String,
    /// Fuel category.
    pub fuel: FuelType,
    /// Net cost per MWh the unit was ranked by.
    pub net_cost_per_mwh: f64,
    /// Derated minimum in output units.
    pub min_units: i64,
    /// Derated maximum in output units.
    pub max_units: i64,
    /// Committed production in output units.
    pub committed_units: i64,
}

impl Commitment {
    /// Committed production in MW, before truncation.
    pub fn committed_mw(&self) -> f64 {
        self.committed_units as f64 * OUTPUT_UNIT_MW
    }

    /// Committed production in whole MW.
    pub fn p(&self) -> u32 {
        units_to_whole_mw(self.committed_units)
    }
}

/// A production plan in dispatch (merit) order.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchPlan {
    /// Requested load (MW).
    pub load_mw: u32,
    /// Commitments in dispatch order.
    pub commitments: Vec<Commitment>,
    /// Load left uncovered after every unit ran, in output units.
    pub shortfall_units: i64,
}

impl DispatchPlan {
    /// The plan as `{name, p}` entries, in dispatch order.
    pub fn entries(&self) -> Vec<DispatchEntry> {
        self.commitments
            .iter()
            .map(|c| DispatchEntry {
                name: c.name.clone(),
                p: c.p(),
            })
            .collect()
    }

    /// Whether the fleet covered the requested load.
    pub fn is_feasible(&self) -> bool {
        self.shortfall_units <= 0
    }

    /// Unserved load (MW), zero when feasible.
    pub fn shortfall_mw(&self) -> f64 {
        self.shortfall_units.max(0) as f64 * OUTPUT_UNIT_MW
    }

    /// Total committed production in output units.
    pub fn committed_units(&self) -> i64 {
        self.commitments.iter().map(|c| c.committed_units).sum()
    }
}
