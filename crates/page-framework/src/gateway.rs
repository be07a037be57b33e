//! # HTTP Gateway
//!
//! The server half of a [`ResourceClient`] channel. One gateway runs per
//! resource; it turns each [`ResourceRequest`] into a REST call.

use crate::client::ResourceClient;
use crate::error::TransportError;
use crate::message::ResourceRequest;
use crate::resource::{RecordId, Resource, ResourceAction};
use crate::transport::HttpTransport;
use reqwest::Method;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// ## HttpGateway
///
/// Receives requests from its clients and answers them from the backend.
///
/// **Concurrency Model**: the receive loop is sequential, but every request
/// is served by its own spawned task, so a slow list never holds up the
/// lookups or mutations queued behind it. The gateway keeps no state of its
/// own; the backend is the only source of truth.
///
/// ```rust,ignore
/// let transport = HttpTransport::new("http://localhost:8000");
/// let (gateway, client) = HttpGateway::<Client>::new(transport, 32);
/// tokio::spawn(gateway.run());
/// let clients = client.list(ListQuery::new()).await?;
/// ```
pub struct HttpGateway<T: Resource> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    transport: HttpTransport,
}

impl<T: Resource> HttpGateway<T> {
    /// Creates the gateway and the client that talks to it.
    ///
    /// `buffer_size` is the channel capacity; when it is full, client calls
    /// wait for room.
    pub fn new(transport: HttpTransport, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let gateway = Self {
            receiver,
            transport,
        };
        (gateway, ResourceClient::new(sender))
    }

    /// Serves requests until every client has been dropped.
    pub async fn run(mut self) {
        let resource = T::PATH;
        info!(resource, "Gateway started");

        let mut served = 0usize;
        while let Some(request) = self.receiver.recv().await {
            served += 1;
            let transport = self.transport.clone();
            tokio::spawn(serve::<T>(transport, request));
        }

        info!(resource, served, "Shutdown");
    }
}

fn collection_path<T: Resource>() -> String {
    format!("{}/", T::PATH)
}

fn item_path<T: Resource>(id: RecordId) -> String {
    format!("{}/{}", T::PATH, id)
}

async fn serve<T: Resource>(transport: HttpTransport, request: ResourceRequest<T>) {
    let resource = T::PATH;
    match request {
        ResourceRequest::List { query, respond_to } => {
            debug!(resource, params = query.params().len(), "List");
            let result = transport
                .get_json::<Vec<T>>(&collection_path::<T>(), query.params())
                .await;
            match &result {
                Ok(records) => info!(resource, count = records.len(), "Listed"),
                Err(e) => warn!(resource, error = %e, "List failed"),
            }
            let _ = respond_to.send(result);
        }
        ResourceRequest::Create { params, respond_to } => {
            debug!(resource, ?params, "Create");
            let result = transport
                .send_json::<_, T>(Method::POST, &collection_path::<T>(), &params)
                .await
                .and_then(|record| {
                    if record.id().is_provisional() {
                        Err(TransportError::Invariant(format!(
                            "create answered without a persisted id ({})",
                            record.id()
                        )))
                    } else {
                        Ok(record)
                    }
                });
            match &result {
                Ok(record) => info!(resource, id = %record.id(), "Created"),
                Err(e) => warn!(resource, error = %e, "Create failed"),
            }
            let _ = respond_to.send(result);
        }
        ResourceRequest::Update {
            id,
            update,
            respond_to,
        } => {
            debug!(resource, %id, ?update, "Update");
            let result = transport
                .send_json::<_, T>(Method::PUT, &item_path::<T>(id), &update)
                .await;
            match &result {
                Ok(_) => info!(resource, %id, "Updated"),
                Err(e) => warn!(resource, %id, error = %e, "Update failed"),
            }
            let _ = respond_to.send(result);
        }
        ResourceRequest::Delete { id, respond_to } => {
            debug!(resource, %id, "Delete");
            let result = transport.delete(&item_path::<T>(id)).await;
            match &result {
                Ok(()) => info!(resource, %id, "Deleted"),
                Err(e) => warn!(resource, %id, error = %e, "Delete failed"),
            }
            let _ = respond_to.send(result);
        }
        ResourceRequest::Action {
            id,
            action,
            respond_to,
        } => {
            debug!(resource, %id, ?action, "Action");
            let path = format!("{}/{}", item_path::<T>(id), action.segment());
            let result = transport
                .send_json::<_, T>(Method::PUT, &path, &json!({}))
                .await;
            match &result {
                Ok(_) => info!(resource, %id, action = action.segment(), "Action ok"),
                Err(e) => warn!(resource, %id, error = %e, "Action failed"),
            }
            let _ = respond_to.send(result);
        }
    }
}
