pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

pub use self::config::{Configuration, ServerConfiguration};
pub use self::error::ServerError;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};

use crate::CaptureLog;

#[derive(Clone)]
pub struct AppState {
    pub capture_log: Arc<CaptureLog>,
}

impl AppState {
    pub fn new(capture_log: Arc<CaptureLog>) -> Self {
        Self { capture_log }
    }
}

/// Build the application router
///
/// `/health`, `/api/requests`, `/api/clear` and `/ui/*` are reserved; any other
/// path and method is captured. Body size is bounded by `max_body_bytes` alone.
pub fn router(state: AppState, config: &ServerConfiguration) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/requests", get(handlers::list_requests))
        .route("/api/clear", post(handlers::clear_requests))
        .nest_service("/ui", ServeDir::new(&config.static_dir))
        .fallback(handlers::capture_request)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.max_body_bytes)),
        )
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
