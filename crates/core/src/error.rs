//! Workspace-level error type

use thiserror::Error;

/// Errors surfaced across crate boundaries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid value for {field}: {value}")]
    InvalidConfiguration { field: String, value: String },

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Calendar error: {0}")]
    Calendar(String),
}

impl Error {
    pub(crate) fn invalid(field: &str, value: impl ToString) -> Self {
        Error::InvalidConfiguration {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
