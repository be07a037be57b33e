//! # Framework Errors
//!
//! Error types shared by every page. They are split by layer:
//!
//! - [`TransportError`]: what went wrong on the wire (or in the gateway task).
//! - [`ValidationError`]: a form draft that must not leave the page.
//! - [`PageError`]: what a page operation reports back to the UI.

use crate::resource::RecordId;
use std::fmt;

/// Failure of a single request against the REST backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// No usable response: connection refused, reset, undecodable body...
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    /// The backend answered, but the answer breaks an invariant
    /// (e.g. a create response without a real identifier).
    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("gateway closed")]
    GatewayClosed,

    #[error("gateway dropped response channel")]
    GatewayDropped,
}

impl TransportError {
    /// The structured detail message sent by the backend, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A form draft rejected before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field `{0}` is required")]
    Required(&'static str),

    #[error("field `{field}` must be at least {min}")]
    OutOfRange { field: &'static str, min: String },

    #[error("field `{0}` is not a valid date")]
    InvalidDate(&'static str),

    #[error("end date {end} is before start date {start}")]
    DateOrder { start: String, end: String },

    #[error("field `{0}` is not a valid email address")]
    InvalidEmail(&'static str),

    #[error("field `{field}` does not accept `{value}`")]
    NotAllowed { field: &'static str, value: String },
}

/// The page operation a transport failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Lookup(&'static str),
    Create,
    Update,
    Delete,
    Action(&'static str),
}

impl Operation {
    /// Message shown when the backend gives no detail of its own.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Load => "No se pudo cargar el listado",
            Self::Lookup(_) => "No se pudieron cargar los datos relacionados",
            Self::Create => "No se pudo crear",
            Self::Update => "No se pudo actualizar",
            Self::Delete => "No se pudo eliminar",
            Self::Action(_) => "Error al cambiar el estado",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Lookup(source) => write!(f, "lookup {source}"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::Action(segment) => write!(f, "action {segment}"),
        }
    }
}

/// Errors surfaced by [`PageController`](crate::PageController) operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The triggering control is disabled while a request is in flight.
    #[error("another request is still in flight")]
    Busy,

    #[error("record not found: {0}")]
    NotFound(RecordId),

    #[error("page closed")]
    Closed,

    #[error("{operation} failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: TransportError,
    },
}

impl PageError {
    pub fn transport(operation: Operation, source: TransportError) -> Self {
        Self::Transport { operation, source }
    }

    /// Text shown to the user: the backend detail when there is one,
    /// otherwise a generic message for the failed operation.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { operation, source } => source
                .detail()
                .map(str::to_owned)
                .unwrap_or_else(|| operation.fallback_message().to_owned()),
            other => other.to_string(),
        }
    }
}
