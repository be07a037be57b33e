use crate::model::{Client, Reservation, Room};
use chrono::NaiveDate;
use page_framework::{Lookup, LookupFetch, Lookups, RecordId, ResourceClient, ViewModel};

/// Clients the reservation lookups are fetched with.
#[derive(Clone)]
pub struct ReservationSources {
    pub clients: ResourceClient<Client>,
    pub rooms: ResourceClient<Room>,
}

#[derive(Debug, Default)]
pub struct ReservationLookups {
    pub clients: Lookup<Client>,
    pub rooms: Lookup<Room>,
}

impl Lookups for ReservationLookups {
    type Sources = ReservationSources;

    fn fetches(sources: &ReservationSources) -> Vec<LookupFetch<Self>> {
        vec![
            LookupFetch::<Self>::of(&sources.clients, |l| &mut l.clients),
            LookupFetch::<Self>::of(&sources.rooms, |l| &mut l.rooms),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationView {
    pub id: RecordId,
    pub client: String,
    pub room: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: &'static str,
    pub badge: &'static str,
}

impl ViewModel for ReservationView {
    type Record = Reservation;
    type Lookups = ReservationLookups;

    fn build(reservation: &Reservation, lookups: &ReservationLookups) -> Self {
        Self {
            id: reservation.id,
            client: lookups.clients.label(reservation.client_id, |c| c.name.clone()),
            room: lookups.rooms.label(reservation.room_id, |r| r.number.clone()),
            start: reservation.start,
            end: reservation.end,
            status: reservation.status.as_str(),
            badge: reservation.status.badge(),
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn searchable(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.id, self.client, self.room, self.start, self.end, self.status
        )
    }
}
