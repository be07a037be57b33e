//! Error types for the user client.

use page_framework::{RecordId, TransportError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(RecordId),

    #[error("User validation error: {0}")]
    Invalid(#[from] ValidationError),

    #[error("User rejected: {0}")]
    Rejected(String),

    #[error("User service communication error: {0}")]
    Communication(String),
}

impl UserError {
    pub fn for_record(id: RecordId, e: TransportError) -> Self {
        match e.status() {
            Some(404) => Self::NotFound(id),
            _ => e.into(),
        }
    }
}

impl From<TransportError> for UserError {
    fn from(e: TransportError) -> Self {
        match e.status() {
            Some(400..=499) => {
                Self::Rejected(e.detail().map(str::to_owned).unwrap_or_else(|| e.to_string()))
            }
            _ => Self::Communication(e.to_string()),
        }
    }
}
