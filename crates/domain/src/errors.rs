use thiserror::Error;

use crate::wire::WireError;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(#[from] WireError),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Record lookup timed out for {0}")]
    LookupTimeout(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// True when the question was well formed but nothing answers it.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::RecordNotFound(_))
    }
}
