//! Post-hoc aggregate figures for a production plan.

use std::fmt;

use serde::Serialize;

use super::types::{DispatchPlan, OUTPUT_UNIT_MW, UNITS_PER_MW};

/// Aggregate indicators derived from a complete plan.
///
/// Computed from the plan's commitments so that the reported figures always
/// agree with the per-unit production.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    /// Requested load (MW).
    pub load_mw: u32,
    /// Committed production at output-unit resolution (MW).
    pub committed_mw: f64,
    /// Sum of the reported, truncated `p` values (MW).
    pub reported_mw: u32,
    /// Production above the load caused by minimum-output floors (MW).
    pub surplus_mw: f64,
    /// Load the fleet could not cover (MW).
    pub shortfall_mw: f64,
    /// Number of units with non-zero production.
    pub running_units: usize,
    /// Cost of one hour of the plan (€).
    pub hourly_cost_eur: f64,
    /// Net cost of the most expensive running unit (€/MWh).
    pub marginal_cost_eur_per_mwh: f64,
}

impl PlanSummary {
    /// Computes all figures from the plan.
    pub fn from_plan(plan: &DispatchPlan) -> Self {
        let load_units = i64::from(plan.load_mw) * UNITS_PER_MW;
        let committed_units = plan.committed_units();
        let running: Vec<_> = plan
            .commitments
            .iter()
            .filter(|c| c.committed_units > 0)
            .collect();

        Self {
            load_mw: plan.load_mw,
            committed_mw: committed_units as f64 * OUTPUT_UNIT_MW,
            reported_mw: plan.commitments.iter().map(|c| c.p()).sum(),
            surplus_mw: (committed_units - load_units).max(0) as f64 * OUTPUT_UNIT_MW,
            shortfall_mw: plan.shortfall_mw(),
            running_units: running.len(),
            hourly_cost_eur: running
                .iter()
                .map(|c| c.committed_mw() * c.net_cost_per_mwh)
                .sum(),
            marginal_cost_eur_per_mwh: running
                .iter()
                .map(|c| c.net_cost_per_mwh)
                .fold(0.0, f64::max),
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Plan Summary ---")?;
        writeln!(f, "Load:                  {} MW", self.load_mw)?;
        writeln!(
            f,
            "Committed:             {:.1} MW ({} MW reported)",
            self.committed_mw, self.reported_mw
        )?;
        writeln!(f, "Surplus:               {:.1} MW", self.surplus_mw)?;
        writeln!(f, "Shortfall:             {:.1} MW", self.shortfall_mw)?;
        writeln!(f, "Running units:         {}", self.running_units)?;
        writeln!(f, "Hourly cost:           {:.2} EUR", self.hourly_cost_eur)?;
        write!(
            f,
            "Marginal cost:         {:.2} EUR/MWh",
            self.marginal_cost_eur_per_mwh
        )
    }
}
