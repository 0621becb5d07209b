//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use merit_plan::dispatch::types::{FuelPrices, FuelType, GenerationUnit};
use merit_plan::dispatch::{DispatchRequest, validate::validate};
use merit_plan::scenario;

/// Reference fuel prices (gas 13.4, kerosine 50.8, CO2 20, wind 60%).
pub fn reference_prices() -> FuelPrices {
    FuelPrices {
        gas_eur_per_mwh: 13.4,
        kerosine_eur_per_mwh: 50.8,
        co2_eur_per_ton: 20.0,
        wind_percent: 60.0,
    }
}

/// Builds a generation unit.
pub fn unit(name: &str, fuel: FuelType, efficiency: f64, pmin: u32, pmax: u32) -> GenerationUnit {
    GenerationUnit {
        name: name.to_string(),
        fuel,
        efficiency,
        pmin_mw: pmin,
        pmax_mw: pmax,
    }
}

/// The canonical 480 MW request, validated.
pub fn canonical_request() -> DispatchRequest {
    validate(&scenario::canonical()).expect("canonical preset should validate")
}

/// Random fleet of 1–12 units with random prices and load. About one unit in
/// ten has `pmin > pmax`.
pub fn random_request(seed: u64) -> DispatchRequest {
    let mut rng = StdRng::seed_from_u64(seed);
    let n_units = rng.random_range(1..=12);

    let units = (0..n_units)
        .map(|i| {
            let fuel = FuelType::ALL[rng.random_range(0..FuelType::ALL.len())];
            let efficiency = match fuel {
                FuelType::WindTurbine => 1.0,
                _ => rng.random_range(0.2..=0.6),
            };
            let pmax = rng.random_range(0..=500);
            let pmin = if rng.random_bool(0.1) {
                rng.random_range(pmax + 1..=pmax + 100)
            } else {
                rng.random_range(0..=pmax)
            };
            unit(&format!("unit{i}"), fuel, efficiency, pmin, pmax)
        })
        .collect();

    DispatchRequest {
        load_mw: rng.random_range(1..=1500),
        fuels: FuelPrices {
            gas_eur_per_mwh: rng.random_range(0.0..=60.0),
            kerosine_eur_per_mwh: rng.random_range(0.0..=120.0),
            co2_eur_per_ton: rng.random_range(0.0..=80.0),
            wind_percent: f64::from(rng.random_range(0..=100u32)),
        },
        units,
    }
}
