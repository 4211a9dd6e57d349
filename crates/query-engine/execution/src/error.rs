//! Errors for query execution.

use thiserror::Error;

/// Query execution error.
#[derive(Debug, Error)]
pub enum Error {
    /// The data store rejected the query and answered with an error body.
    /// `status` is the status code nested in that body, when there is one.
    #[error("{message}")]
    Response {
        status: Option<u16>,
        message: String,
    },
    #[error("unable to reach the data store: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response from the data store: {0}")]
    Decode(String),
    #[error("{0}")]
    Conversion(#[from] ConversionError),
    /// Failures of other query executors.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// A row could not be turned into a feature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("row {row} has {found} values but there are {expected} columns")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has an invalid WKT geometry: {message}")]
    InvalidWkt { row: usize, message: String },
    #[error("row {row} has an invalid geometry: {message}")]
    InvalidGeometry { row: usize, message: String },
}
