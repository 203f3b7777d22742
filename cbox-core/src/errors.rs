use thiserror::Error;

/// Error type for invalid operations.
///
/// None of these are transient: the model performs no I/O, so retrying a
/// failed call with the same inputs fails the same way.
#[derive(Error, Debug)]
pub enum CBoxError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Insufficient data. Required {required} values, got {available}")]
    InsufficientData { required: usize, available: usize },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Serialization failed: {0}")]
    Serialization(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type for `Result<T, CBoxError>`.
pub type CBoxResult<T> = Result<T, CBoxError>;
