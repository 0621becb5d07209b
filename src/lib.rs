//! Merit-order dispatch of a power-generation fleet.

/// REST API for production plans.
#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod dispatch;
pub mod io;
pub mod logging;
pub mod scenario;
