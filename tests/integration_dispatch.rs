//! Integration tests for the dispatch pipeline.

mod common;

use merit_plan::dispatch::staging::stage;
use merit_plan::dispatch::types::{DispatchEntry, FuelType, UNITS_PER_MW};
use merit_plan::dispatch::{DispatchError, DispatchPlan, DispatchSettings, compute_dispatch_plan};

fn plan_for(request: &merit_plan::dispatch::DispatchRequest) -> DispatchPlan {
    compute_dispatch_plan(request, &DispatchSettings::default()).expect("plan should compute")
}

fn entry(name: &str, p: u32) -> DispatchEntry {
    DispatchEntry {
        name: name.to_string(),
        p,
    }
}

#[test]
fn canonical_scenario_dispatches_wind_then_cheapest_gas() {
    let plan = plan_for(&common::canonical_request());

    assert_eq!(
        plan.entries(),
        vec![
            entry("windpark1", 90),
            entry("windpark2", 21),
            entry("gasfiredbig1", 368),
            entry("gasfiredbig2", 0),
            entry("gasfiredsomewhatsmaller", 0),
            entry("tj1", 0),
        ]
    );
    assert!(plan.is_feasible());
    assert_eq!(plan.committed_units(), 480 * UNITS_PER_MW);
}

#[test]
fn plan_lists_every_unit_once() {
    let request = common::canonical_request();
    let plan = plan_for(&request);

    let mut planned: Vec<_> = plan.entries().into_iter().map(|e| e.name).collect();
    let mut supplied: Vec<_> = request.units.iter().map(|u| u.name.clone()).collect();
    planned.sort();
    supplied.sort();
    assert_eq!(planned, supplied);
}

#[test]
fn wind_at_half_availability_gives_exactly_half() {
    let mut request = common::canonical_request();
    request.fuels.wind_percent = 50.0;
    request.units = vec![common::unit("wind", FuelType::WindTurbine, 1.0, 0, 100)];
    request.load_mw = 500;

    let staged = stage(&request, 0.3);
    assert_eq!(staged[0].net_max_mw, 50.0);

    let plan = plan_for(&request);
    assert_eq!(plan.entries(), vec![entry("wind", 50)]);
}

#[test]
fn minimum_floor_overshoots_load() {
    let mut request = common::canonical_request();
    request.load_mw = 30;
    request.units = vec![common::unit("gas", FuelType::GasFired, 0.5, 100, 400)];

    let plan = plan_for(&request);
    assert_eq!(plan.entries(), vec![entry("gas", 100)]);
    assert!(plan.is_feasible());
}

#[test]
fn infeasible_load_runs_everything_at_max() {
    let mut request = common::canonical_request();
    request.load_mw = 5000;

    let plan = plan_for(&request);
    for c in &plan.commitments {
        assert_eq!(c.committed_units, c.max_units, "{} should run at max", c.name);
    }
    assert!(!plan.is_feasible());
    assert!((plan.shortfall_mw() - (5000.0 - 1257.6)).abs() < 1e-6);
}

#[test]
fn infeasible_load_rejected_when_configured() {
    let mut request = common::canonical_request();
    request.load_mw = 5000;
    let settings = DispatchSettings {
        reject_infeasible: true,
        ..DispatchSettings::default()
    };

    let result = compute_dispatch_plan(&request, &settings);
    assert!(matches!(
        result,
        Err(DispatchError::InsufficientCapacity { load_mw: 5000, .. })
    ));
}

#[test]
fn inverted_limits_leave_unit_idle_and_short() {
    let mut request = common::canonical_request();
    request.load_mw = 120;
    request.units = vec![
        common::unit("g", FuelType::GasFired, 0.5, 200, 100),
        common::unit("tj", FuelType::Turbojet, 0.3, 0, 50),
    ];

    let plan = plan_for(&request);
    assert_eq!(plan.entries(), vec![entry("g", 0), entry("tj", 50)]);
    assert!(!plan.is_feasible());
    assert!((plan.shortfall_mw() - 70.0).abs() < 1e-9);
}

#[test]
fn random_fleets_include_inverted_units() {
    let inverted = (0..200)
        .flat_map(|seed| common::random_request(seed).units)
        .filter(|u| u.pmin_mw > u.pmax_mw)
        .count();
    assert!(inverted > 0);
}

#[test]
fn higher_co2_price_reorders_gas_behind_turbojet() {
    let mut request = common::canonical_request();
    request.fuels.co2_eur_per_ton = 2000.0;

    let plan = plan_for(&request);
    let order: Vec<_> = plan.commitments.iter().map(|c| c.name.as_str()).collect();
    let tj = order.iter().position(|n| *n == "tj1");
    let gas = order.iter().position(|n| *n == "gasfiredbig1");
    assert!(tj < gas, "turbojet should now be cheaper: {order:?}");
}

#[test]
fn random_fleets_respect_capacity_and_minimum() {
    for seed in 0..200 {
        let request = common::random_request(seed);
        let plan = plan_for(&request);

        for c in &plan.commitments {
            assert!(
                (0..=c.max_units).contains(&c.committed_units),
                "seed {seed}: {} exceeds capacity",
                c.name
            );
            assert!(
                c.committed_units == 0 || c.committed_units >= c.min_units,
                "seed {seed}: {} runs below its minimum",
                c.name
            );
            if c.min_units > c.max_units {
                assert_eq!(c.committed_units, 0, "seed {seed}: {} has inverted limits", c.name);
            }
            assert!(
                i64::from(c.p()) <= c.max_units / UNITS_PER_MW,
                "seed {seed}: {} reports more than its derated max",
                c.name
            );
        }
    }
}

#[test]
fn random_fleets_cover_load_when_feasible() {
    for seed in 0..200 {
        let request = common::random_request(seed);
        let plan = plan_for(&request);

        // units with inverted limits never run, so they add no capacity
        let capacity: i64 = plan
            .commitments
            .iter()
            .filter(|c| c.min_units <= c.max_units)
            .map(|c| c.max_units)
            .sum();
        let load = i64::from(request.load_mw) * UNITS_PER_MW;
        let committed = plan.committed_units();

        if capacity >= load {
            assert!(plan.is_feasible(), "seed {seed}: feasible fleet fell short");
            assert!(committed >= load, "seed {seed}: load not covered");

            let largest_min = plan
                .commitments
                .iter()
                .filter(|c| c.committed_units > 0)
                .map(|c| c.min_units)
                .max()
                .unwrap_or(0);
            let surplus = committed - load;
            assert!(
                surplus == 0 || surplus < largest_min,
                "seed {seed}: surplus {surplus} not explained by a minimum floor"
            );
        } else {
            assert_eq!(committed, capacity, "seed {seed}: short fleet not at max");
            assert_eq!(plan.shortfall_units, load - capacity);
        }
    }
}

#[test]
fn random_fleets_are_deterministic() {
    for seed in 0..50 {
        let request = common::random_request(seed);
        assert_eq!(plan_for(&request), plan_for(&request), "seed {seed}");
    }
}

#[test]
fn random_fleets_emit_merit_order() {
    for seed in 0..100 {
        let request = common::random_request(seed);
        let plan = plan_for(&request);

        for pair in plan.commitments.windows(2) {
            assert!(
                pair[0].net_cost_per_mwh <= pair[1].net_cost_per_mwh,
                "seed {seed}: {} before cheaper {}",
                pair[0].name,
                pair[1].name
            );
        }
    }
}
