//! Error types for Heartseal

use thiserror::Error;

/// Main error type for Heartseal operations.
///
/// Nothing in the proposal flow is fatal; these errors are recovered
/// locally by whoever calls the failing operation.
#[derive(Error, Debug)]
pub enum ProposalError {
    /// A required proposal field was empty
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A link or base URL could not be parsed
    #[error("Invalid link: {0}")]
    InvalidLink(String),

    /// The location bar refused a history update
    #[error("Location update failed: {0}")]
    Location(String),

    /// The blessing collaborator failed or returned nothing usable
    #[error("Blessing error: {0}")]
    Blessing(String),

    /// Configuration file could not be understood
    #[error("Config error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<url::ParseError> for ProposalError {
    fn from(err: url::ParseError) -> Self {
        ProposalError::InvalidLink(err.to_string())
    }
}

impl From<reqwest::Error> for ProposalError {
    fn from(err: reqwest::Error) -> Self {
        ProposalError::Blessing(err.to_string())
    }
}

/// Result type alias using ProposalError
pub type ProposalResult<T> = Result<T, ProposalError>;
