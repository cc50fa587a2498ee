use thiserror::Error;

/// Errors raised while validating bookmark requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field cannot be empty: {0}")]
    EmptyField(&'static str),
}
