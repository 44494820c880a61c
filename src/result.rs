use thiserror::Error;

/// Errors produced by fallible dictionary operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DictError {
    #[error("key not found in dictionary (keys are compared case-insensitively)")]
    KeyNotFound,
    #[error("cannot pop an item from an empty dictionary")]
    EmptyCollection,
}

pub type DictResult<T> = Result<T, DictError>;
