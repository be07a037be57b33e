use super::reservation::{Reservation, ReservationStatus};
use chrono::NaiveDate;
use page_framework::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: RecordId,
    #[serde(rename = "cliente_id")]
    pub client_id: RecordId,
    #[serde(rename = "reserva_id")]
    pub reservation_id: RecordId,
    pub total: f64,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
}

/// Invoice status. Never stored: it follows the referenced reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Issued,
    Cancelled,
    Pending,
}

impl InvoiceStatus {
    /// A reservation that is not loaded yet counts as pending.
    pub fn of(reservation: Option<&Reservation>) -> Self {
        match reservation.map(|r| r.status) {
            Some(ReservationStatus::Cancelled) => Self::Cancelled,
            Some(ReservationStatus::Confirmed) => Self::Issued,
            _ => Self::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Issued => "emitida",
            Self::Cancelled => "cancelada",
            Self::Pending => "pendiente",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Self::Issued => "srh-b-ok",
            Self::Cancelled => "srh-b-busy",
            Self::Pending => "srh-b-warn",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceDraft {
    #[serde(rename = "cliente_id")]
    pub client_id: Option<RecordId>,
    #[serde(rename = "reserva_id")]
    pub reservation_id: Option<RecordId>,
    pub total: f64,
    #[serde(rename = "fecha")]
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(status: ReservationStatus) -> Reservation {
        Reservation {
            id: RecordId(2),
            client_id: RecordId(1),
            room_id: RecordId(1),
            start: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            status,
        }
    }

    #[test]
    fn status_follows_reservation() {
        let cancelled = reservation(ReservationStatus::Cancelled);
        let confirmed = reservation(ReservationStatus::Confirmed);
        let pending = reservation(ReservationStatus::Pending);
        let unknown = reservation(ReservationStatus::Unknown);

        assert_eq!(InvoiceStatus::of(Some(&cancelled)), InvoiceStatus::Cancelled);
        assert_eq!(InvoiceStatus::of(Some(&confirmed)), InvoiceStatus::Issued);
        assert_eq!(InvoiceStatus::of(Some(&pending)), InvoiceStatus::Pending);
        assert_eq!(InvoiceStatus::of(Some(&unknown)), InvoiceStatus::Pending);
        assert_eq!(InvoiceStatus::of(None), InvoiceStatus::Pending);
    }

    #[test]
    fn status_labels() {
        assert_eq!(InvoiceStatus::Issued.to_string(), "emitida");
        assert_eq!(InvoiceStatus::Cancelled.badge(), "srh-b-busy");
    }
}
