//! Dispatch error taxonomy.

use thiserror::Error;

/// Errors raised while validating a request or computing a plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// The load is missing, non-numeric, non-integral, or not positive.
    #[error("load must be a positive integer, got {value}")]
    InvalidLoad {
        /// The offending value as received.
        value: String,
    },

    /// A fuel price field is missing, non-numeric, negative, or out of range.
    #[error("fuels.{field}: {reason}")]
    InvalidFuelPrices {
        /// Wire name of the field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The request has no `powerplants` list.
    #[error("powerplants is required")]
    MissingPowerPlants,

    /// A generation unit field is missing or malformed.
    #[error("powerplants[{index}] ({name}): {field} {reason}")]
    InvalidUnitSpec {
        /// Position of the unit in the request.
        index: usize,
        /// Unit name, or `<unnamed>` when the name itself is invalid.
        name: String,
        /// Wire name of the field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A unit references a fuel category outside the supported set.
    #[error("unit \"{unit}\" has unsupported fuel type \"{fuel}\"")]
    UnsupportedFuelType {
        /// Unit name.
        unit: String,
        /// The fuel type as received.
        fuel: String,
    },

    /// The fleet cannot cover the load and infeasible plans are rejected.
    #[error("fleet cannot cover {load_mw} MW, short by {shortfall_mw:.1} MW")]
    InsufficientCapacity {
        /// Requested load (MW).
        load_mw: u32,
        /// Unserved load (MW).
        shortfall_mw: f64,
    },

    /// A derived cost is NaN and cannot be ranked.
    #[error("unit \"{unit}\" produced an undefined net cost")]
    NonFiniteCost {
        /// Unit name.
        unit: String,
    },
}

impl DispatchError {
    /// Whether the caller can fix this by correcting the request.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::NonFiniteCost { .. })
    }
}
