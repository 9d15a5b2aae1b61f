//! Error handling for the redaction pipeline.

pub mod types;

pub use types::{EngineError, RedactError, RedactResult};
