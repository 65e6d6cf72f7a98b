use axum::{extract::State, http::StatusCode, Json};

use crate::{server::AppState, Record};

// GET /api/requests
pub async fn list_requests(State(state): State<AppState>) -> Json<Vec<Record>> {
    let records = state.capture_log.snapshot();
    tracing::debug!(count = records.len(), "Listing captured requests");
    Json(records)
}

// POST /api/clear
pub async fn clear_requests(State(state): State<AppState>) -> StatusCode {
    state.capture_log.clear();
    StatusCode::OK
}
