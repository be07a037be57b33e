//! # ResourceApi Trait
//!
//! Common interface for resource-specific clients, adding default `list` and
//! `delete` methods built on top of a generic [`ResourceClient`].

use crate::{ListQuery, RecordId, Resource, ResourceClient, TransportError};
use async_trait::async_trait;

/// Trait for resource-specific client wrappers.
///
/// Wrappers add the typed calls of their resource (e.g. `confirm` on
/// reservations) and inherit the plain ones from here.
///
/// ```rust,ignore
/// struct ReservationClient { inner: ResourceClient<Reservation> }
///
/// #[async_trait]
/// impl ResourceApi<Reservation> for ReservationClient {
///     type Error = TransportError;
///     fn inner(&self) -> &ResourceClient<Reservation> { &self.inner }
///     fn map_error(e: TransportError) -> Self::Error { e }
/// }
///
/// // list() and delete() are provided
/// let all = client.list(ListQuery::new()).await?;
/// ```
#[async_trait]
pub trait ResourceApi<T: Resource>: Send + Sync {
    /// The wrapper's error type.
    type Error: Send + Sync;

    /// Access the inner generic `ResourceClient`.
    fn inner(&self) -> &ResourceClient<T>;

    fn map_error(e: TransportError) -> Self::Error;

    /// Fetch every record matching `query`.
    #[tracing::instrument(skip(self), fields(resource = T::PATH))]
    async fn list(&self, query: ListQuery) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self), fields(resource = T::PATH))]
    async fn delete(&self, id: RecordId) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
