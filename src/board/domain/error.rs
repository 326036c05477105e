//! Error types for board domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The username is empty, too long, or contains unsupported characters.
    #[error("invalid username '{0}', expected letters, digits and @/./+/-/_ only")]
    InvalidUsername(String),
}

/// Error returned while parsing task statuses from requests or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
