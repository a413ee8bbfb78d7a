use thiserror::Error;

/// Text processing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextProcessingError {
    #[error("Number part has {length} digits, the maximum is {max}")]
    MaximumLength { length: usize, max: usize },

    #[error("The value must be numeric, [{0}] is given")]
    InvalidNumber(String),

    #[error("The string value must contain at least one digit, [{0}] is given")]
    DigitsNotFound(String),
}

impl From<TextProcessingError> for arabic_core::Error {
    fn from(err: TextProcessingError) -> Self {
        arabic_core::Error::TextProcessing(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;
