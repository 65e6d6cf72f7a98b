use serde::Serialize;

// Any captured path
pub const CAPTURE_ACK: &str = "Webhook received";

// Health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub captured: usize,
}
