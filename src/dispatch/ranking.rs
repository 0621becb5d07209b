//! Merit-order ranking of staged units.

use std::cmp::Ordering;

use super::types::NormalizedUnit;

/// Dispatch priority: cheapest first, then larger derated capacity, then
/// larger derated minimum.
pub fn merit_order(a: &NormalizedUnit, b: &NormalizedUnit) -> Ordering {
    a.net_cost_per_mwh
        .total_cmp(&b.net_cost_per_mwh)
        .then_with(|| b.max_units.cmp(&a.max_units))
        .then_with(|| b.min_units.cmp(&a.min_units))
}

/// Sorts staged units into dispatch order.
///
/// The sort is stable: units that tie on every key keep their caller order.
pub fn rank(mut units: Vec<NormalizedUnit>) -> Vec<NormalizedUnit> {
    units.sort_by(merit_order);
    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::types::{FuelType, GenerationUnit};

    fn staged(name: &str, cost: f64, max_units: i64, min_units: i64) -> NormalizedUnit {
        NormalizedUnit {
            unit: GenerationUnit {
                name: name.to_string(),
                fuel: FuelType::GasFired,
                efficiency: 0.5,
                pmin_mw: 0,
                pmax_mw: 0,
            },
            fuel_cost_per_mwh: 0.0,
            co2_cost_per_mwh: 0.0,
            derating: 1.0,
            net_efficiency: 0.5,
            net_fuel_cost_per_mwh: 0.0,
            net_cost_per_mwh: cost,
            net_min_mw: min_units as f64 / 10.0,
            net_max_mw: max_units as f64 / 10.0,
            min_units,
            max_units,
            target_units: 0,
        }
    }

    fn names(units: &[NormalizedUnit]) -> Vec<&str> {
        units.iter().map(|u| u.unit.name.as_str()).collect()
    }

    #[test]
    fn cheapest_first() {
        let ranked = rank(vec![
            staged("dear", 90.0, 100, 0),
            staged("cheap", 10.0, 100, 0),
            staged("mid", 50.0, 100, 0),
        ]);
        assert_eq!(names(&ranked), ["cheap", "mid", "dear"]);
    }

    #[test]
    fn larger_capacity_breaks_cost_ties() {
        let ranked = rank(vec![
            staged("small", 10.0, 100, 0),
            staged("large", 10.0, 900, 0),
        ]);
        assert_eq!(names(&ranked), ["large", "small"]);
    }

    #[test]
    fn larger_minimum_breaks_capacity_ties() {
        let ranked = rank(vec![
            staged("low_min", 10.0, 500, 10),
            staged("high_min", 10.0, 500, 200),
        ]);
        assert_eq!(names(&ranked), ["high_min", "low_min"]);
    }

    #[test]
    fn full_ties_keep_caller_order() {
        let ranked = rank(vec![
            staged("first", 10.0, 500, 10),
            staged("second", 10.0, 500, 10),
            staged("third", 10.0, 500, 10),
        ]);
        assert_eq!(names(&ranked), ["first", "second", "third"]);
    }
}
