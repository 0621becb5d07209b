//! Wire payload for dispatch requests.
//!
//! Scalar fields are kept as raw JSON values so that validation can accept
//! both numbers and numeric strings and report exactly which field is wrong,
//! instead of failing on the first serde type mismatch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dispatch request exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    /// Load to cover (MW).
    #[serde(default)]
    pub load: Value,
    /// Fuel prices and wind availability.
    #[serde(default)]
    pub fuels: FuelsPayload,
    /// Generation fleet; `None` when the key is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powerplants: Option<Vec<PowerPlantPayload>>,
}

/// Fuel prices as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelsPayload {
    /// Gas price (€/MWh).
    #[serde(rename = "gas(euro/MWh)", default)]
    pub gas: Value,
    /// Kerosine price (€/MWh).
    #[serde(rename = "kerosine(euro/MWh)", default)]
    pub kerosine: Value,
    /// CO2 allowance price (€/ton).
    #[serde(rename = "co2(euro/ton)", default)]
    pub co2: Value,
    /// Wind availability (%).
    #[serde(rename = "wind(%)", default)]
    pub wind: Value,
}

/// One generation unit as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerPlantPayload {
    /// Unit name.
    #[serde(default)]
    pub name: Value,
    /// Fuel type wire name.
    #[serde(rename = "type", default)]
    pub fuel_type: Value,
    /// Efficiency (0.0–1.0).
    #[serde(default)]
    pub efficiency: Value,
    /// Minimum output (MW).
    #[serde(default)]
    pub pmin: Value,
    /// Maximum output (MW).
    #[serde(default)]
    pub pmax: Value,
}
