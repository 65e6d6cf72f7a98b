pub mod models;

pub use models::{NewRecord, Record};
