//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use crate::environment;

/// The registration options were rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("client connection configuration object is required")]
    MissingConnection,
    #[error("invalid \"{field}\", must be of type object")]
    NotAnObject { field: String },
    #[error("invalid \"{map}\", value for \"{key}\" must be a string")]
    NotAString { map: String, key: String },
    #[error("invalid \"{field}\", {message}")]
    Invalid { field: String, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {}:{line}:{column}: {message}", .file_path.display())]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("invalid configuration in {}: {error}", .file_path.display())]
    ValidationError {
        file_path: PathBuf,
        error: ConfigurationError,
    },
    #[error("unsupported configuration version {0}")]
    UnsupportedVersion(u32),
    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("invalid configuration field \"{field}\": {message}")]
    MissingEnvironmentVariable { field: String, message: String },
    #[error("invalid node url \"{node}\": {message}")]
    InvalidNodeUrl { node: String, message: String },
}

impl MakeRuntimeConfigurationError {
    pub(crate) fn missing(field: &str, error: &environment::Error) -> Self {
        Self::MissingEnvironmentVariable {
            field: field.to_string(),
            message: error.to_string(),
        }
    }
}
