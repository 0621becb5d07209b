//! Request validation: raw wire payload into a typed [`DispatchRequest`].

use serde_json::Value;

use super::error::DispatchError;
use super::payload::{FuelsPayload, PowerPlantPayload, RequestPayload};
use super::types::{DispatchRequest, FuelPrices, FuelType, GenerationUnit};

/// Reads a finite float from a JSON number or numeric string.
fn as_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Reads an integral float that fits in `u32` and is non-negative.
fn as_whole(value: &Value) -> Option<u32> {
    let v = as_float(value)?;
    if v.fract() != 0.0 || v < 0.0 || v > f64::from(u32::MAX) {
        return None;
    }
    Some(v as u32)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "nothing".to_string(),
        other => other.to_string(),
    }
}

fn validate_load(value: &Value) -> Result<u32, DispatchError> {
    as_whole(value)
        .filter(|&load| load > 0)
        .ok_or_else(|| DispatchError::InvalidLoad {
            value: describe(value),
        })
}

fn fuel_price(field: &'static str, value: &Value) -> Result<f64, DispatchError> {
    let price = as_float(value).ok_or_else(|| DispatchError::InvalidFuelPrices {
        field,
        reason: format!("must be a number, got {}", describe(value)),
    })?;
    if price < 0.0 {
        return Err(DispatchError::InvalidFuelPrices {
            field,
            reason: format!("must be >= 0, got {price}"),
        });
    }
    Ok(price)
}

fn validate_fuels(fuels: &FuelsPayload) -> Result<FuelPrices, DispatchError> {
    let prices = FuelPrices {
        gas_eur_per_mwh: fuel_price("gas(euro/MWh)", &fuels.gas)?,
        kerosine_eur_per_mwh: fuel_price("kerosine(euro/MWh)", &fuels.kerosine)?,
        co2_eur_per_ton: fuel_price("co2(euro/ton)", &fuels.co2)?,
        wind_percent: fuel_price("wind(%)", &fuels.wind)?,
    };
    if prices.wind_percent > 100.0 {
        return Err(DispatchError::InvalidFuelPrices {
            field: "wind(%)",
            reason: format!("must be <= 100, got {}", prices.wind_percent),
        });
    }
    Ok(prices)
}

fn validate_unit(index: usize, plant: &PowerPlantPayload) -> Result<GenerationUnit, DispatchError> {
    let name = match &plant.name {
        Value::String(s) if !s.is_empty() => s.clone(),
        other => {
            return Err(DispatchError::InvalidUnitSpec {
                index,
                name: "<unnamed>".to_string(),
                field: "name",
                reason: format!("must be a non-empty string, got {}", describe(other)),
            });
        }
    };
    let invalid = |field: &'static str, reason: String| DispatchError::InvalidUnitSpec {
        index,
        name: name.clone(),
        field,
        reason,
    };

    let fuel_name = match &plant.fuel_type {
        Value::String(s) if !s.is_empty() => s,
        other => {
            return Err(invalid(
                "type",
                format!("must be a non-empty string, got {}", describe(other)),
            ));
        }
    };
    let fuel = fuel_name
        .parse::<FuelType>()
        .map_err(|_| DispatchError::UnsupportedFuelType {
            unit: name.clone(),
            fuel: fuel_name.clone(),
        })?;

    let efficiency = as_float(&plant.efficiency)
        .filter(|e| (0.0..=1.0).contains(e))
        .ok_or_else(|| {
            invalid(
                "efficiency",
                format!("must be in [0.0, 1.0], got {}", describe(&plant.efficiency)),
            )
        })?;
    let pmin_mw = as_whole(&plant.pmin).ok_or_else(|| {
        invalid(
            "pmin",
            format!("must be a non-negative integer, got {}", describe(&plant.pmin)),
        )
    })?;
    let pmax_mw = as_whole(&plant.pmax).ok_or_else(|| {
        invalid(
            "pmax",
            format!("must be a non-negative integer, got {}", describe(&plant.pmax)),
        )
    })?;

    Ok(GenerationUnit {
        name,
        fuel,
        efficiency,
        pmin_mw,
        pmax_mw,
    })
}

/// Validates a raw payload, failing on the first offending field.
///
/// # Errors
///
/// Returns `InvalidLoad`, `InvalidFuelPrices`, `MissingPowerPlants`,
/// `InvalidUnitSpec`, or `UnsupportedFuelType` identifying the field that
/// failed.
pub fn validate(payload: &RequestPayload) -> Result<DispatchRequest, DispatchError> {
    let load_mw = validate_load(&payload.load)?;
    let fuels = validate_fuels(&payload.fuels)?;
    let plants = payload
        .powerplants
        .as_deref()
        .ok_or(DispatchError::MissingPowerPlants)?;
    let units = plants
        .iter()
        .enumerate()
        .map(|(index, plant)| validate_unit(index, plant))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DispatchRequest {
        load_mw,
        fuels,
        units,
    })
}
