//! Error types for prepdeck-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while compiling the markdown card database.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid card file name: {name}")]
    InvalidName { name: String },

    #[error("invalid ID in {name}: {value}")]
    InvalidId { name: String, value: String },

    #[error("card {name} must have question, answer and tags separated by ---")]
    InvalidFormat { name: String },

    #[error("duplicate ID {id} in {name}")]
    DuplicateId { id: i64, name: String },
}

/// Errors that can occur while decoding a dataset payload.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons an interview submission is rejected before grading starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("answer is blank")]
    Blank,

    #[error("no card is loaded")]
    NoCard,

    #[error("current card was already answered")]
    AlreadyAnswered,

    #[error("a grading request is already in flight")]
    InFlight,

    #[error("interview is finished")]
    Finished,
}
