//! Status actions of the reservations page.
//!
//! Both actions are `PUT /api/reservas/{id}/<segment>` with an empty body and
//! answer the updated reservation.

use super::view::ReservationView;
use crate::model::{Reservation, Room};
use page_framework::{PageController, PageError, RecordId, ResourceAction, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationAction {
    Confirm,
    Cancel,
}

impl ResourceAction for ReservationAction {
    fn segment(&self) -> &'static str {
        match self {
            Self::Confirm => "confirmar",
            Self::Cancel => "cancelar",
        }
    }
}

/// Rooms that can be offered for a new booking: flagged available and not
/// held by any reservation that is still alive. `except` is the reservation
/// being edited, whose own room stays selectable.
pub fn available_rooms<'a>(
    rooms: &'a [Room],
    reservations: &[Reservation],
    except: Option<RecordId>,
) -> Vec<&'a Room> {
    rooms
        .iter()
        .filter(|room| room.available)
        .filter(|room| {
            !reservations.iter().any(|r| {
                r.room_id == room.id && !r.status.is_cancelled() && Some(r.id) != except
            })
        })
        .collect()
}

/// Reservation-specific operations on a reservations page.
pub trait ReservationsPageExt {
    fn confirm(&mut self, id: RecordId) -> Result<Ticket, PageError>;

    fn cancel(&mut self, id: RecordId) -> Result<Ticket, PageError>;

    /// Rooms offered by the form, from the loaded room lookup.
    fn available_rooms(&self) -> Vec<&Room>;
}

impl ReservationsPageExt for PageController<ReservationView> {
    fn confirm(&mut self, id: RecordId) -> Result<Ticket, PageError> {
        self.act(id, ReservationAction::Confirm)
    }

    fn cancel(&mut self, id: RecordId) -> Result<Ticket, PageError> {
        self.act(id, ReservationAction::Cancel)
    }

    fn available_rooms(&self) -> Vec<&Room> {
        available_rooms(
            self.lookups().rooms.items(),
            self.records(),
            self.form().editing(),
        )
    }
}
