use crate::model::{Field, Kind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SprintError {
    #[error("Unknown command: '{0}'. Type 'help' to see all commands")]
    UnknownCommand(String),

    #[error("Missing value for flag {0}")]
    MissingValue(String),

    #[error("Flag values cannot contain '/'. Check that every flag is separated by a space")]
    IllegalValue,

    #[error("Invalid parameters for '{0}'")]
    InvalidParameters(&'static str),

    #[error("Missing required field: {} ({})", .0.flag(), .0.label())]
    MissingField(Field),

    #[error("Please provide the index of an internship")]
    MissingIndex,

    #[error("Index must be a number, got '{0}'")]
    InvalidIndex(String),

    #[error("Index {index} is out of range. You have {count} internship(s)")]
    IndexOutOfRange { index: i64, count: usize },

    #[error("Unable to edit internship: {flag} does not apply to {kind} internships")]
    FieldTypeMismatch { flag: &'static str, kind: Kind },

    #[error("This internship already exists in your list")]
    Duplicate,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SprintError>;
