//! # Resource Messages
//!
//! Messages sent from a [`ResourceClient`](crate::ResourceClient) to the task
//! serving it (an [`HttpGateway`](crate::HttpGateway) in production, a mock in
//! tests). Each variant maps to one REST call and carries a oneshot sender for
//! the answer.

use crate::error::TransportError;
use crate::resource::{RecordId, Resource};
use tokio::sync::oneshot;

/// One-shot response channel used by the gateway.
pub type Response<T> = oneshot::Sender<Result<T, TransportError>>;

/// Requests understood by a resource gateway.
///
/// - **List**: `GET {PATH}/` with optional query parameters.
/// - **Create**: `POST {PATH}/`, answers the persisted record.
/// - **Update**: `PUT {PATH}/{id}`, answers the persisted record.
/// - **Delete**: `DELETE {PATH}/{id}`.
/// - **Action**: `PUT {PATH}/{id}/{segment}`, answers the persisted record.
#[derive(Debug)]
pub enum ResourceRequest<T: Resource> {
    List {
        query: ListQuery,
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: RecordId,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: RecordId,
        respond_to: Response<()>,
    },
    Action {
        id: RecordId,
        action: T::Action,
        respond_to: Response<T>,
    },
}

/// Query string parameters for a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
