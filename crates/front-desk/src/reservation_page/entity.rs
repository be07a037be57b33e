//! [`Resource`] implementation for [`Reservation`].

use super::actions::ReservationAction;
use crate::model::{Reservation, ReservationDraft, ReservationStatus};
use page_framework::{validate, RecordId, Resource, ValidationError};

impl Resource for Reservation {
    type Create = ReservationDraft;
    type Update = ReservationDraft;
    type Action = ReservationAction;

    const PATH: &'static str = "/api/reservas";
    const LABEL: &'static str = "Reserva";

    fn id(&self) -> RecordId {
        self.id
    }

    /// Only called after [`validate_create`](Resource::validate_create), so
    /// every field is set.
    fn provisional(id: RecordId, params: &ReservationDraft) -> Self {
        let start = params.start.unwrap_or_default();
        Self {
            id,
            client_id: params.client_id.unwrap_or_default(),
            room_id: params.room_id.unwrap_or_default(),
            start,
            end: params.end.unwrap_or(start),
            status: ReservationStatus::Pending,
        }
    }

    fn apply_update(&mut self, update: &ReservationDraft) {
        if let Some(client_id) = update.client_id {
            self.client_id = client_id;
        }
        if let Some(room_id) = update.room_id {
            self.room_id = room_id;
        }
        if let Some(start) = update.start {
            self.start = start;
        }
        if let Some(end) = update.end {
            self.end = end;
        }
        self.status = update.status;
    }

    fn apply_action(&mut self, action: &ReservationAction) {
        self.status = match action {
            ReservationAction::Confirm => ReservationStatus::Confirmed,
            ReservationAction::Cancel => ReservationStatus::Cancelled,
        };
    }

    fn draft(&self) -> ReservationDraft {
        let status = match self.status {
            ReservationStatus::Unknown => ReservationStatus::Pending,
            status => status,
        };
        ReservationDraft {
            client_id: Some(self.client_id),
            room_id: Some(self.room_id),
            start: Some(self.start),
            end: Some(self.end),
            status,
        }
    }

    /// Client, room and both dates are required; the stay may not end
    /// before it starts.
    fn validate_create(params: &ReservationDraft) -> Result<(), ValidationError> {
        validate::required_ref("cliente_id", params.client_id)?;
        validate::required_ref("habitacion_id", params.room_id)?;
        let start = validate::required_date("fecha_inicio", params.start)?;
        let end = validate::required_date("fecha_fin", params.end)?;
        validate::date_order(start, end)
    }

    fn validate_update(update: &ReservationDraft) -> Result<(), ValidationError> {
        Self::validate_create(update)
    }
}
