// Library root — exposes the pipeline for integration tests and embedders.
// The binary entry point is src/main.rs.

pub mod bootstrap;
pub mod comms;
pub mod core;
pub mod knowledge;
pub mod llm;
pub mod pipeline;

pub use crate::bootstrap::logger;
pub use crate::core::{config, error};
