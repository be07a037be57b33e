use crate::model::{Reservation, ReservationDraft};
use crate::reservation_page::{ReservationAction, ReservationError};
use async_trait::async_trait;
use page_framework::{RecordId, Resource, ResourceApi, ResourceClient, TransportError};
use tracing::{debug, instrument};

/// Client for the reservations endpoint, outside of any page.
#[derive(Clone)]
pub struct ReservationClient {
    inner: ResourceClient<Reservation>,
}

impl ReservationClient {
    pub fn new(inner: ResourceClient<Reservation>) -> Self {
        Self { inner }
    }

    /// Validates the draft locally before it is sent.
    #[instrument(skip(self, draft))]
    pub async fn book(&self, draft: ReservationDraft) -> Result<Reservation, ReservationError> {
        Reservation::validate_create(&draft)?;
        debug!(?draft, "Sending request");
        self.inner.create(draft).await.map_err(ReservationError::from)
    }

    #[instrument(skip(self))]
    pub async fn reschedule(
        &self,
        id: RecordId,
        draft: ReservationDraft,
    ) -> Result<Reservation, ReservationError> {
        Reservation::validate_update(&draft)?;
        debug!("Sending request");
        self.inner
            .update(id, draft)
            .await
            .map_err(|e| ReservationError::for_record(id, e))
    }

    #[instrument(skip(self))]
    pub async fn confirm(&self, id: RecordId) -> Result<Reservation, ReservationError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ReservationAction::Confirm)
            .await
            .map_err(|e| ReservationError::for_record(id, e))
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: RecordId) -> Result<Reservation, ReservationError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ReservationAction::Cancel)
            .await
            .map_err(|e| ReservationError::for_record(id, e))
    }
}

#[async_trait]
impl ResourceApi<Reservation> for ReservationClient {
    type Error = ReservationError;

    fn inner(&self) -> &ResourceClient<Reservation> {
        &self.inner
    }

    fn map_error(e: TransportError) -> Self::Error {
        e.into()
    }
}
