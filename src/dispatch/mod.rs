//! Merit-order dispatch engine.
//!
//! The pipeline is a chain of pure stages, each taking the previous stage's
//! output: [`validate`] → [`staging`] (which uses [`fuel`]) → [`ranking`] →
//! [`commit`]. [`engine::compute_dispatch_plan`] runs the whole chain.

/// Greedy capacity commitment.
pub mod commit;
pub mod engine;
pub mod error;
/// Fuel cost resolution.
pub mod fuel;
pub mod payload;
/// Merit-order ranking.
pub mod ranking;
pub mod staging;
pub mod summary;
pub mod types;
pub mod validate;

pub use engine::{DispatchSettings, compute_dispatch_plan, plan_from_payload};
pub use error::DispatchError;
pub use payload::RequestPayload;
pub use summary::PlanSummary;
pub use types::{DispatchEntry, DispatchPlan, DispatchRequest};
