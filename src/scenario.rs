//! Dispatch request loading and built-in request presets.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::ConfigError;
use crate::dispatch::RequestPayload;
use crate::dispatch::payload::{FuelsPayload, PowerPlantPayload};

/// Available preset names.
pub const PRESETS: &[&str] = &["canonical", "calm", "shortfall"];

fn plant(name: &str, fuel: &str, efficiency: f64, pmin: u32, pmax: u32) -> PowerPlantPayload {
    PowerPlantPayload {
        name: Value::from(name),
        fuel_type: Value::from(fuel),
        efficiency: Value::from(efficiency),
        pmin: Value::from(pmin),
        pmax: Value::from(pmax),
    }
}

/// Six-unit reference fleet: two large and one smaller gas plant, a turbojet,
/// and two wind parks.
fn reference_fleet() -> Vec<PowerPlantPayload> {
    vec![
        plant("gasfiredbig1", "gasfired", 0.53, 100, 460),
        plant("gasfiredbig2", "gasfired", 0.53, 100, 460),
        plant("gasfiredsomewhatsmaller", "gasfired", 0.37, 40, 210),
        plant("tj1", "turbojet", 0.3, 0, 16),
        plant("windpark1", "windturbine", 1.0, 0, 150),
        plant("windpark2", "windturbine", 1.0, 0, 36),
    ]
}

fn reference_request(load: u32, wind_percent: f64) -> RequestPayload {
    RequestPayload {
        load: Value::from(load),
        fuels: FuelsPayload {
            gas: Value::from(13.4),
            kerosine: Value::from(50.8),
            co2: Value::from(20),
            wind: Value::from(wind_percent),
        },
        powerplants: Some(reference_fleet()),
    }
}

/// The reference request: 480 MW with 60% wind.
pub fn canonical() -> RequestPayload {
    reference_request(480, 60.0)
}

/// No wind at all; 910 MW must come from thermal units.
pub fn calm() -> RequestPayload {
    reference_request(910, 0.0)
}

/// 2000 MW, beyond the reference fleet's capacity.
pub fn shortfall() -> RequestPayload {
    reference_request(2000, 60.0)
}

/// Loads a request from a named preset.
///
/// # Errors
///
/// Returns a `ConfigError` if the preset name is unknown.
pub fn from_preset(name: &str) -> Result<RequestPayload, ConfigError> {
    match name {
        "canonical" => Ok(canonical()),
        "calm" => Ok(calm()),
        "shortfall" => Ok(shortfall()),
        _ => Err(ConfigError {
            field: "preset".to_string(),
            message: format!(
                "unknown preset \"{name}\", available: {}",
                PRESETS.join(", ")
            ),
        }),
    }
}

/// Parses a request from a JSON file.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read or is not a request.
pub fn from_json_file(path: &Path) -> Result<RequestPayload, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError {
        field: "request".to_string(),
        message: format!("cannot read \"{}\": {e}", path.display()),
    })?;
    from_json_str(&content)
}

/// Parses a request from a JSON string.
///
/// # Errors
///
/// Returns a `ConfigError` if the JSON is malformed.
pub fn from_json_str(s: &str) -> Result<RequestPayload, ConfigError> {
    serde_json::from_str(s).map_err(|e| ConfigError {
        field: "request".to_string(),
        message: e.to_string(),
    })
}
