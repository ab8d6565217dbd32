use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Schema mismatch: missing in target {missing_in_target:?}, missing in source {missing_in_source:?}"
    )]
    SchemaMismatch {
        missing_in_target: Vec<String>,
        missing_in_source: Vec<String>,
    },

    #[error("Row arity error: expected {expected} cells, got {actual}")]
    RowArity { expected: usize, actual: usize },

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
