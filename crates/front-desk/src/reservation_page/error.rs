//! Error types for the reservation client.

use page_framework::{RecordId, TransportError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReservationError {
    #[error("Reservation not found: {0}")]
    NotFound(RecordId),

    #[error("Reservation validation error: {0}")]
    Invalid(#[from] ValidationError),

    /// The backend refused the request (4xx), with its detail if any.
    #[error("Reservation rejected: {0}")]
    Rejected(String),

    #[error("Reservation service communication error: {0}")]
    Communication(String),
}

impl ReservationError {
    /// Like the `From` conversion, but a 404 names the missing reservation.
    pub fn for_record(id: RecordId, e: TransportError) -> Self {
        match e.status() {
            Some(404) => Self::NotFound(id),
            _ => e.into(),
        }
    }
}

impl From<TransportError> for ReservationError {
    fn from(e: TransportError) -> Self {
        match e.status() {
            Some(400..=499) => {
                Self::Rejected(e.detail().map(str::to_owned).unwrap_or_else(|| e.to_string()))
            }
            _ => Self::Communication(e.to_string()),
        }
    }
}
