use thiserror::Error;

/// Reasons a draft entry is refused before it reaches the store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} cannot be negative: {value}")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Odometer end must be greater than start")]
    NonPositiveDistance,
}

#[derive(Error, Debug)]
pub enum FuelogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Mirror error: {0}")]
    Mirror(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FuelogError>;
