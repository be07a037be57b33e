//! # Resource Client
//!
//! The typed handle pages use to reach the backend.

use crate::error::TransportError;
use crate::message::{ListQuery, ResourceRequest};
use crate::resource::{RecordId, Resource};
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// Forwards list/create/update/delete/action requests over a Tokio mpsc
/// channel and waits for the answer on a oneshot channel. It holds only a
/// sender, so it is cheap to clone and can be shared across tasks.
///
/// If the serving task is gone the call fails with
/// [`TransportError::GatewayClosed`]; if it drops the request without
/// answering, with [`TransportError::GatewayDropped`].
#[derive(Debug)]
pub struct ResourceClient<T: Resource> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Resource> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn list(&self, query: ListQuery) -> Result<Vec<T>, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::List { query, respond_to }).await?;
        response.await.map_err(|_| TransportError::GatewayDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Create { params, respond_to })
            .await?;
        response.await.map_err(|_| TransportError::GatewayDropped)?
    }

    pub async fn update(&self, id: RecordId, update: T::Update) -> Result<T, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| TransportError::GatewayDropped)?
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Delete { id, respond_to }).await?;
        response.await.map_err(|_| TransportError::GatewayDropped)?
    }

    pub async fn perform_action(
        &self,
        id: RecordId,
        action: T::Action,
    ) -> Result<T, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| TransportError::GatewayDropped)?
    }

    async fn send(&self, request: ResourceRequest<T>) -> Result<(), TransportError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| TransportError::GatewayClosed)
    }
}
