//! Errors returned to callers, and the policy that turns data store failures into them.

use query_engine_execution::error::Error;

const INVALID_INPUT: &str = "invalid input";
const DEFAULT_CODE: u16 = 500;

/// A failed request.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The data store answered with an error. The message is safe to show to the caller.
    #[error("{message}")]
    Coded { message: String, code: u16 },
    /// Anything else, passed on untouched.
    #[error(transparent)]
    Unclassified(anyhow::Error),
}

impl QueryError {
    pub fn code(&self) -> Option<u16> {
        match self {
            QueryError::Coded { code, .. } => Some(*code),
            QueryError::Unclassified(_) => None,
        }
    }
}

/// Classify a failed query and log it.
///
/// Only errors the data store answered with get a code. A 400 never carries the
/// data store's own message, since it may echo the request back.
pub fn classify(error: Error) -> QueryError {
    match error {
        Error::Response { status, message } => {
            tracing::error!("Provider error: data-store query failure, {message}");
            let code = status.unwrap_or(DEFAULT_CODE);
            let message = if code == 400 {
                INVALID_INPUT.to_string()
            } else {
                message
            };
            QueryError::Coded { message, code }
        }
        other => unclassified(other),
    }
}

/// Log an error that has no code and pass it on.
pub fn unclassified<E>(error: E) -> QueryError
where
    E: std::error::Error + Send + Sync + 'static,
{
    tracing::error!("Provider error: {error}");
    QueryError::Unclassified(error.into())
}
