mod responses;

pub use responses::{HealthResponse, CAPTURE_ACK};
