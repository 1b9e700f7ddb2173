use thiserror::Error;

use crate::parameters::{BoundsError, ParameterError, SerializationError};

/// Error types for the lipid-bilayer library
///
/// Slab computations never fail; non-finite results from a degenerate area
/// per molecule are returned as ordinary floats. Errors come from the
/// parameter API and from loading configuration.
#[derive(Error, Debug)]
pub enum BilayerError {
    /// Error for parameter-related problems
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// Error for boundary constraint violations
    #[error("Bounds error: {0}")]
    Bounds(#[from] BoundsError),

    /// Invalid configuration data
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error wrapper
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<SerializationError> for BilayerError {
    fn from(err: SerializationError) -> Self {
        match err {
            SerializationError::IoError(e) => BilayerError::IoError(e),
            SerializationError::JsonError(e) => BilayerError::JsonError(e),
        }
    }
}

/// Result type alias for lipid-bilayer operations
pub type Result<T> = std::result::Result<T, BilayerError>;
