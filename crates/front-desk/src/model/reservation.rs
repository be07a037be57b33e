use chrono::NaiveDate;
use page_framework::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "cancelada")]
    Cancelled,
    /// Any status string this client does not know. Shown as pending.
    #[serde(other)]
    Unknown,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmada",
            Self::Cancelled => "cancelada",
            Self::Pending | Self::Unknown => "pendiente",
        }
    }

    /// CSS badge used by the reservation table.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Confirmed => "srh-b-ok",
            Self::Cancelled => "srh-b-busy",
            Self::Pending | Self::Unknown => "srh-b-warn",
        }
    }

    pub fn is_cancelled(self) -> bool {
        self == Self::Cancelled
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: RecordId,
    #[serde(rename = "cliente_id")]
    pub client_id: RecordId,
    #[serde(rename = "habitacion_id")]
    pub room_id: RecordId,
    #[serde(rename = "fecha_inicio")]
    pub start: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub end: NaiveDate,
    #[serde(rename = "estado", default)]
    pub status: ReservationStatus,
}

impl Reservation {
    /// `#id (start → end)`, as shown wherever an invoice points at it.
    pub fn label(&self) -> String {
        format!("#{} ({} → {})", self.id, self.start, self.end)
    }
}

/// Reservation form. Unset fields stay `None` until picked.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReservationDraft {
    #[serde(rename = "cliente_id")]
    pub client_id: Option<RecordId>,
    #[serde(rename = "habitacion_id")]
    pub room_id: Option<RecordId>,
    #[serde(rename = "fecha_inicio")]
    pub start: Option<NaiveDate>,
    #[serde(rename = "fecha_fin")]
    pub end: Option<NaiveDate>,
    #[serde(rename = "estado")]
    pub status: ReservationStatus,
}
