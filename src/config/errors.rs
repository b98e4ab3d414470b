use std::io;
use thiserror::Error;

pub type ValuesResult<T> = Result<T, ValuesError>;

#[derive(Error, Debug)]
pub enum ValuesError {
    /// A field received a value of the wrong shape (not a number, not a vector).
    #[error("{field} must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("{field} {requirement}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
    },

    #[error("missing key: {0}")]
    MissingKey(String),

    #[error("expected {expected} values, got {found}")]
    SequenceLength { expected: usize, found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ValuesError {
    pub(crate) fn not_a_number(field: impl Into<String>) -> Self {
        ValuesError::InvalidType {
            field: field.into(),
            expected: "a number",
        }
    }

    pub(crate) fn not_a_vector(field: impl Into<String>) -> Self {
        ValuesError::InvalidType {
            field: field.into(),
            expected: "a vector",
        }
    }

    /// True for the errors raised by field validation rather than by I/O or decoding.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ValuesError::InvalidType { .. } | ValuesError::OutOfRange { .. }
        )
    }
}
