//! REST API for production plans.
//!
//! Provides three endpoints:
//! - `GET /`: service title
//! - `POST /productionplan`: `[{name, p}]` in dispatch order
//! - `POST /productionplan/summary`: the plan plus aggregate figures

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::dispatch::DispatchSettings;

pub use handlers::SHORTFALL_HEADER;
pub use types::{ErrorResponse, PlanResponse};

/// Service title returned by `GET /`.
pub const TITLE: &str = "Power production plan";

/// Immutable application state shared across all request handlers.
///
/// Constructed once at startup and wrapped in `Arc`; no locks needed since
/// every request is computed independently.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Engine parameters applied to every request.
    pub settings: DispatchSettings,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/productionplan", post(handlers::production_plan))
        .route(
            "/productionplan/summary",
            post(handlers::production_plan_summary),
        )
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "starting {TITLE}");
    axum::serve(listener, app).await
}
