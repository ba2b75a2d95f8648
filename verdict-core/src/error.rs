//! Error types for payload validation and verdict formatting

use thiserror::Error;

/// The status payload does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Payload root is not a JSON object
    #[error("payload is not a record (got {found})")]
    NotARecord { found: &'static str },

    /// `homeworks` is missing or is not an array
    #[error("items not a sequence (`homeworks` is {found})")]
    ItemsNotSequence { found: &'static str },

    /// An entry of `homeworks` is not a JSON object
    #[error("item #{index} is not a record (got {found})")]
    ItemNotRecord { index: usize, found: &'static str },
}

/// A tracked item cannot be rendered into a verdict
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("required field `{0}` is missing or empty")]
    FieldMissing(&'static str),

    #[error("unknown homework status `{status}`")]
    UnknownStatus { status: String },
}
