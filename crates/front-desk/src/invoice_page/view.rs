use crate::model::{Client, Invoice, InvoiceStatus, Reservation};
use chrono::NaiveDate;
use page_framework::{Lookup, LookupFetch, Lookups, RecordId, ResourceClient, ViewModel};

#[derive(Clone)]
pub struct InvoiceSources {
    pub clients: ResourceClient<Client>,
    pub reservations: ResourceClient<Reservation>,
}

#[derive(Debug, Default)]
pub struct InvoiceLookups {
    pub clients: Lookup<Client>,
    pub reservations: Lookup<Reservation>,
}

impl Lookups for InvoiceLookups {
    type Sources = InvoiceSources;

    fn fetches(sources: &InvoiceSources) -> Vec<LookupFetch<Self>> {
        vec![
            LookupFetch::<Self>::of(&sources.clients, |l| &mut l.clients),
            LookupFetch::<Self>::of(&sources.reservations, |l| &mut l.reservations),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceView {
    pub id: RecordId,
    pub client: String,
    pub reservation: String,
    pub total: f64,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    pub badge: &'static str,
}

impl ViewModel for InvoiceView {
    type Record = Invoice;
    type Lookups = InvoiceLookups;

    fn build(invoice: &Invoice, lookups: &InvoiceLookups) -> Self {
        let reservation = lookups.reservations.get(invoice.reservation_id);
        let status = InvoiceStatus::of(reservation);
        Self {
            id: invoice.id,
            client: lookups.clients.label(invoice.client_id, |c| c.name.clone()),
            reservation: lookups
                .reservations
                .label(invoice.reservation_id, Reservation::label),
            total: invoice.total,
            date: invoice.date,
            status,
            badge: status.badge(),
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn searchable(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.id, self.client, self.reservation, self.total, self.date, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReservationStatus;
    use page_framework::build_views;

    fn invoice() -> Invoice {
        Invoice {
            id: RecordId(4),
            client_id: RecordId(1),
            reservation_id: RecordId(2),
            total: 150.0,
            date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        }
    }

    #[test]
    fn status_is_pending_until_reservation_arrives() {
        let mut lookups = InvoiceLookups::default();
        let views: Vec<InvoiceView> = build_views(&[invoice()], &lookups);
        assert_eq!(views[0].status, InvoiceStatus::Pending);
        assert_eq!(views[0].reservation, "Reserva #2");

        lookups.reservations.replace(vec![Reservation {
            id: RecordId(2),
            client_id: RecordId(1),
            room_id: RecordId(9),
            start: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            status: ReservationStatus::Cancelled,
        }]);
        let views: Vec<InvoiceView> = build_views(&[invoice()], &lookups);
        assert_eq!(views[0].status, InvoiceStatus::Cancelled);
        assert_eq!(views[0].badge, "srh-b-busy");
        assert_eq!(views[0].reservation, "#2 (2025-03-01 → 2025-03-05)");
    }
}
