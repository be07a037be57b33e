//! # Resource Trait
//!
//! A [`Resource`] is one REST collection managed by a page: its record type,
//! the payloads sent to the backend, the status actions it supports, and the
//! optimistic prediction of what the backend will answer.
//!
//! The framework never invents persisted state. The predictions below only
//! exist between the moment a mutation is issued and the moment the backend
//! answers; they are replaced (or rolled back) as soon as it does.

use crate::error::ValidationError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Identifier of a record.
///
/// Positive values are assigned by the backend. Zero and negative values are
/// provisional: they are handed out by a page for optimistic creates and are
/// never sent over the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn is_provisional(self) -> bool {
        self.0 <= 0
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A status transition exposed by the backend as `PUT {path}/{id}/{segment}`.
pub trait ResourceAction: Debug + Clone + Send + Sync + 'static {
    /// Last path segment of the action endpoint.
    fn segment(&self) -> &'static str;
}

/// Marker for resources that have no status actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAction {}

impl ResourceAction for NoAction {
    fn segment(&self) -> &'static str {
        match *self {}
    }
}

/// A record type backed by a REST collection.
///
/// # Associated Types
///
/// * `Create` - the body of `POST {PATH}/`. Also used as the page's form draft,
///   hence `Default`.
/// * `Update` - the body of `PUT {PATH}/{id}`.
/// * `Action` - the status actions of the resource, or [`NoAction`].
///
/// # Optimistic Predictions
///
/// `provisional`, `apply_update` and `apply_action` predict the record the
/// backend will return, so the page can show it before the answer arrives.
pub trait Resource:
    Clone + Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    type Create: Default + Clone + Debug + Serialize + Send + Sync + 'static;
    type Update: Clone + Debug + Serialize + Send + Sync + 'static;
    type Action: ResourceAction;

    /// Collection path, without trailing slash (e.g. `/api/clientes`).
    const PATH: &'static str;

    /// Prefix of the placeholder label shown while a reference is unresolved.
    const LABEL: &'static str;

    fn id(&self) -> RecordId;

    /// The record shown while a create is in flight.
    fn provisional(id: RecordId, params: &Self::Create) -> Self;

    fn apply_update(&mut self, update: &Self::Update);

    fn apply_action(&mut self, _action: &Self::Action) {}

    /// Turns a persisted record back into an editable draft.
    fn draft(&self) -> Self::Create;

    fn validate_create(params: &Self::Create) -> Result<(), ValidationError>;

    fn validate_update(_update: &Self::Update) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provisional_ids_are_not_positive() {
        assert!(RecordId(-1).is_provisional());
        assert!(RecordId(0).is_provisional());
        assert!(!RecordId(7).is_provisional());
    }

    #[test]
    fn record_id_is_transparent_on_the_wire() {
        let id: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(id, RecordId(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
