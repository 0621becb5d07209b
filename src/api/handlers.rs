//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use super::types::{ErrorResponse, PlanResponse};
use super::{AppState, TITLE};
use crate::dispatch::{
    DispatchEntry, DispatchError, DispatchPlan, PlanSummary, RequestPayload, plan_from_payload,
};

/// Header carrying the unserved load (MW) when the fleet falls short.
pub const SHORTFALL_HEADER: &str = "x-dispatch-shortfall-mw";

/// Failure of a plan request, mapped to a status code and JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// The body is not JSON or does not have the request's shape.
    Body(JsonRejection),
    /// Validation or computation failed.
    Dispatch(DispatchError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Body(rejection) => {
                warn!(error = %rejection.body_text(), "rejected request body");
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
            }
            Self::Dispatch(err) if err.is_client_error() => {
                warn!(error = %err, "request validation failed");
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Self::Dispatch(err) => {
                error!(error = %err, "plan computation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

fn compute(
    state: &AppState,
    payload: Result<Json<RequestPayload>, JsonRejection>,
) -> Result<DispatchPlan, ApiError> {
    let Json(payload) = payload.map_err(ApiError::Body)?;
    plan_from_payload(&payload, &state.settings).map_err(ApiError::Dispatch)
}

fn shortfall_headers(plan: &DispatchPlan) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if !plan.is_feasible() {
        if let Ok(value) = HeaderValue::from_str(&format!("{:.1}", plan.shortfall_mw())) {
            headers.insert(SHORTFALL_HEADER, value);
        }
    }
    headers
}

/// Returns the service title.
///
/// `GET /` → 200 + plain text
pub async fn index() -> &'static str {
    TITLE
}

/// Computes a production plan.
///
/// `POST /productionplan` → 200 + `Vec<DispatchEntry>` JSON
/// invalid request → 422 + `ErrorResponse`
/// internal failure → 500 + `ErrorResponse`
pub async fn production_plan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RequestPayload>, JsonRejection>,
) -> Result<(HeaderMap, Json<Vec<DispatchEntry>>), ApiError> {
    let plan = compute(&state, payload)?;
    Ok((shortfall_headers(&plan), Json(plan.entries())))
}

/// Computes a production plan and its summary.
///
/// `POST /productionplan/summary` → 200 + `PlanResponse` JSON
pub async fn production_plan_summary(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RequestPayload>, JsonRejection>,
) -> Result<(HeaderMap, Json<PlanResponse>), ApiError> {
    let plan = compute(&state, payload)?;
    Ok((
        shortfall_headers(&plan),
        Json(PlanResponse {
            plan: plan.entries(),
            summary: PlanSummary::from_plan(&plan),
        }),
    ))
}
