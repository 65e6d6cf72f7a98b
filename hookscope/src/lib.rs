// Data model shared by the capture log and the HTTP layer
pub mod common;

// Bounded in-memory request history
mod capture_log;

pub use capture_log::{CaptureLog, CAPACITY};
pub use common::{NewRecord, Record};

// HTTP server (public for binary)
#[cfg(feature = "server")]
pub mod server;
