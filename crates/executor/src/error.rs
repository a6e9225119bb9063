use thiserror::Error;

use common::error::Error as GraphError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid edge on line {line}: {source}")]
    InvalidEdge {
        line: usize,
        #[source]
        source: GraphError,
    },

    #[error("Invalid generator settings: {0}")]
    InvalidGenerator(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] GraphError),
}
