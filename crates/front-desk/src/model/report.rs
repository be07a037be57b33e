//! Aggregates computed by the backend under `/api/reportes`. They are only
//! displayed and exported, never recomputed here.

use chrono::NaiveDate;
use page_framework::{ListQuery, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional `fecha_inicio` / `fecha_fin` filter of the ranged reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn to_query(self) -> ListQuery {
        let mut query = ListQuery::new();
        if let Some(start) = self.start {
            query = query.param("fecha_inicio", start.format("%Y-%m-%d"));
        }
        if let Some(end) = self.end {
            query = query.param("fecha_fin", end.format("%Y-%m-%d"));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeReport {
    #[serde(rename = "total_recaudado")]
    pub total_collected: f64,
    #[serde(rename = "total_facturas")]
    pub invoice_count: u64,
    #[serde(rename = "total_pagos")]
    pub payment_count: u64,
    #[serde(rename = "fecha_inicio", default)]
    pub start: Option<String>,
    #[serde(rename = "fecha_fin", default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientReport {
    #[serde(rename = "cliente_id")]
    pub client_id: RecordId,
    #[serde(rename = "cliente_nombre")]
    pub client_name: String,
    #[serde(rename = "cliente_identificacion")]
    pub client_identification: String,
    #[serde(rename = "total_reservas")]
    pub reservation_count: u64,
    #[serde(rename = "total_facturas")]
    pub invoice_count: u64,
    #[serde(rename = "total_pagado")]
    pub total_paid: f64,
    #[serde(rename = "reservas", default)]
    pub reservations: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReport {
    #[serde(rename = "total_habitaciones")]
    pub room_count: u64,
    #[serde(rename = "habitaciones_disponibles")]
    pub available: u64,
    #[serde(rename = "habitaciones_ocupadas")]
    pub occupied: u64,
    #[serde(rename = "porcentaje_ocupacion")]
    pub occupancy_percent: f64,
    #[serde(rename = "habitaciones", default)]
    pub rooms: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceReport {
    #[serde(rename = "total_facturas")]
    pub invoice_count: u64,
    #[serde(rename = "total_monto")]
    pub total_amount: f64,
    #[serde(rename = "facturas_emitidas")]
    pub issued: u64,
    #[serde(rename = "facturas_pendientes")]
    pub pending: u64,
    #[serde(rename = "facturas_canceladas")]
    pub cancelled: u64,
    #[serde(rename = "facturas", default)]
    pub invoices: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationReport {
    #[serde(rename = "total_reservas")]
    pub reservation_count: u64,
    #[serde(rename = "reservas_confirmadas")]
    pub confirmed: u64,
    #[serde(rename = "reservas_pendientes")]
    pub pending: u64,
    #[serde(rename = "reservas_canceladas")]
    pub cancelled: u64,
    #[serde(rename = "reservas", default)]
    pub reservations: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralReport {
    #[serde(rename = "fecha_generacion")]
    pub generated_at: String,
    #[serde(rename = "resumen")]
    pub summary: Summary,
    #[serde(rename = "ingresos")]
    pub income: IncomeTotal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "total_clientes")]
    pub clients: u64,
    #[serde(rename = "total_habitaciones")]
    pub rooms: u64,
    #[serde(rename = "total_reservas")]
    pub reservations: u64,
    #[serde(rename = "total_facturas")]
    pub invoices: u64,
    #[serde(rename = "total_pagos")]
    pub payments: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTotal {
    #[serde(rename = "total_recaudado")]
    pub total_collected: f64,
}

/// Answer of `DELETE /api/reportes/limpiar-todo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurgeOutcome {
    pub message: String,
    #[serde(rename = "estadisticas")]
    pub stats: PurgeStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurgeStats {
    #[serde(rename = "clientes_eliminados", default)]
    pub clients: u64,
    #[serde(rename = "habitaciones_eliminadas", default)]
    pub rooms: u64,
    #[serde(rename = "reservas_eliminadas", default)]
    pub reservations: u64,
    #[serde(rename = "facturas_eliminadas", default)]
    pub invoices: u64,
    #[serde(rename = "pagos_eliminados", default)]
    pub payments: u64,
}

/// The reports offered by `/api/reportes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    General,
    Income,
    Clients,
    Rooms,
    Invoices,
    Reservations,
}

impl ReportKind {
    pub const ALL: [ReportKind; 6] = [
        Self::General,
        Self::Income,
        Self::Clients,
        Self::Rooms,
        Self::Invoices,
        Self::Reservations,
    ];

    /// Endpoint segment, also used in export file names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Income => "ingresos",
            Self::Clients => "clientes",
            Self::Rooms => "habitaciones",
            Self::Invoices => "facturas",
            Self::Reservations => "reservas",
        }
    }

    /// Whether the endpoint accepts a [`DateRange`].
    pub fn is_ranged(self) -> bool {
        matches!(self, Self::Income | Self::Invoices | Self::Reservations)
    }
}

/// One fetched report, ready to be exported.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    General(GeneralReport),
    Income(IncomeReport),
    Clients(Vec<ClientReport>),
    Rooms(RoomReport),
    Invoices(InvoiceReport),
    Reservations(ReservationReport),
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::General(_) => ReportKind::General,
            Self::Income(_) => ReportKind::Income,
            Self::Clients(_) => ReportKind::Clients,
            Self::Rooms(_) => ReportKind::Rooms,
            Self::Invoices(_) => ReportKind::Invoices,
            Self::Reservations(_) => ReportKind::Reservations,
        }
    }
}
