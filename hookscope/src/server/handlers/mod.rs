mod capture;
mod requests;

pub use capture::capture_request;
pub use requests::{clear_requests, list_requests};

use crate::server::{models::HealthResponse, AppState};
use axum::{extract::State, Json};

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        captured: state.capture_log.len(),
    })
}
