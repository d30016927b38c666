use thiserror::Error;

use common::error::Error as ArbDetectorError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse rate CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("Currency code listed more than once: {0}")]
    DuplicateCurrency(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] ArbDetectorError),

    #[error("Detection task failed: {0}")]
    TaskFailed(String),
}
