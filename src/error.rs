use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemqlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid item ID: {0}")]
    InvalidId(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// First error reported by a remote GraphQL endpoint, verbatim.
    #[error("{0}")]
    Remote(String),
}

pub type Result<T> = std::result::Result<T, ItemqlError>;
