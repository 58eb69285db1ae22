//! Analysis error types

use thiserror::Error;

/// Errors returned by the analysis entry points
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
