use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a benchmark run.
///
/// Verification problems are never errors; they are logged and counted in a
/// [`crate::verify::VerifyReport`].
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Failed to open {}: {source}", .path.display())]
    ReportOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    ReportWrite(#[from] std::io::Error),

    #[error("Invalid trial count '{0}': expected a positive integer")]
    InvalidTrials(String),

    #[error("Invalid value '{value}' for {option}")]
    InvalidNumber { option: &'static str, value: String },

    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Method '{name}' not found. Available: {available:?}")]
    UnknownMethod {
        name: String,
        available: Vec<&'static str>,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;
