use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("index {index} out of bounds for slice of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input is empty, expected an element count")]
    MissingCount,
    #[error("invalid element count '{token}'")]
    InvalidCount { token: String },
    #[error("invalid value '{token}' at position {position}")]
    InvalidValue { position: usize, token: String },
    #[error("expected {expected} values, found {found}")]
    CountMismatch { expected: usize, found: usize },
}
