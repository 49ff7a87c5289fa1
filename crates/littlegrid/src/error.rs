//! Error types for the grid crate.
//!
//! Formatting and pagination never fail; errors only come from loading a
//! configuration and from row-targeted calls such as action dispatch.

use thiserror::Error;

/// Errors that can occur when configuring or driving a grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// Configuration could not be deserialized.
    #[error("invalid grid configuration: {0}")]
    Config(String),

    /// No action handler is registered under this name.
    #[error("no action handler registered for '{0}'")]
    HandlerNotFound(String),

    /// A row-targeted call referenced a row outside the data.
    #[error("row {index} is out of range for {len} rows")]
    RowOutOfRange { index: usize, len: usize },
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for GridError {
    fn from(err: serde_yaml::Error) -> Self {
        GridError::Config(err.to_string())
    }
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
