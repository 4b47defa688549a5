//! Application-wide error types.

use thiserror::Error;

use crate::knowledge::KnowledgeError;
use crate::llm::ProviderError;
use crate::pipeline::QueryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("query failed: {0}")]
    Query(#[from] QueryError),

    #[error("comms error: {0}")]
    Comms(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_error_display() {
        let e = AppError::Config("missing field".into());
        assert!(e.to_string().contains("missing field"));
    }

    #[test]
    fn comms_error_display() {
        let e = AppError::Comms("bind failed".into());
        assert!(e.to_string().starts_with("comms error"));
    }

    #[test]
    fn provider_error_converts() {
        let e: AppError = ProviderError::UnknownProvider("bogus".into()).into();
        assert!(e.to_string().contains("bogus"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let e: AppError = io_err.into();
        assert!(e.to_string().contains("io error"));
        let _: &dyn Error = &e;
    }
}
