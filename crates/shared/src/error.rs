use thiserror::Error;

/// Raised when a string does not name one of the fixed categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project category: {0:?}")]
pub struct UnknownCategory(pub String);
