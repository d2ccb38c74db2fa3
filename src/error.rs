use std::io;

/// Errors raised while running or reporting a benchmark
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The sink refused bytes. Fatal for the whole run.
    #[error("Failed to write benchmark output: {0}")]
    Write(#[from] io::Error),
    #[error("Test '{test}' stopped producing output before the buffer was full")]
    StalledGenerator { test: String },
    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T, E = BenchError> = std::result::Result<T, E>;
