//! Reports client.
//!
//! Reports are read-only aggregates, so they skip the gateway and the page
//! machinery and go straight through [`HttpTransport`]. The only write is the
//! full purge, which needs a [`ConfirmedPurge`] token.

use crate::error::DeskError;
use crate::model::{
    ClientReport, DateRange, GeneralReport, IncomeReport, InvoiceReport, PurgeOutcome, Report,
    ReportKind, ReservationReport, RoomReport,
};
use page_framework::HttpTransport;
use serde::de::DeserializeOwned;
use tracing::{info, instrument, warn};

const REPORTS_PATH: &str = "/api/reportes";

/// First step of the purge confirmation.
#[derive(Debug, Default)]
pub struct PurgeRequest(());

/// The first confirmation was given.
#[derive(Debug)]
pub struct PendingPurge(());

/// Proof that both confirmations were given. Only obtainable through
/// [`PurgeRequest::confirm_first`] and [`PendingPurge::confirm_final`].
#[derive(Debug)]
pub struct ConfirmedPurge(());

impl PurgeRequest {
    pub fn new() -> Self {
        Self(())
    }

    /// "Esta acción eliminará TODOS los datos. ¿Continuar?"
    pub fn confirm_first(self) -> PendingPurge {
        PendingPurge(())
    }
}

impl PendingPurge {
    /// "¿Está completamente seguro? No se puede deshacer."
    pub fn confirm_final(self) -> ConfirmedPurge {
        ConfirmedPurge(())
    }
}

#[derive(Debug, Clone)]
pub struct ReportsClient {
    transport: HttpTransport,
}

impl ReportsClient {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    #[instrument(skip(self))]
    pub async fn general(&self) -> Result<GeneralReport, DeskError> {
        self.get(ReportKind::General, DateRange::default()).await
    }

    #[instrument(skip(self))]
    pub async fn income(&self, range: DateRange) -> Result<IncomeReport, DeskError> {
        self.get(ReportKind::Income, range).await
    }

    #[instrument(skip(self))]
    pub async fn clients(&self) -> Result<Vec<ClientReport>, DeskError> {
        self.get(ReportKind::Clients, DateRange::default()).await
    }

    #[instrument(skip(self))]
    pub async fn rooms(&self) -> Result<RoomReport, DeskError> {
        self.get(ReportKind::Rooms, DateRange::default()).await
    }

    #[instrument(skip(self))]
    pub async fn invoices(&self, range: DateRange) -> Result<InvoiceReport, DeskError> {
        self.get(ReportKind::Invoices, range).await
    }

    #[instrument(skip(self))]
    pub async fn reservations(&self, range: DateRange) -> Result<ReservationReport, DeskError> {
        self.get(ReportKind::Reservations, range).await
    }

    /// Fetches any report. The range is ignored by reports that take none.
    pub async fn fetch(&self, kind: ReportKind, range: DateRange) -> Result<Report, DeskError> {
        Ok(match kind {
            ReportKind::General => Report::General(self.general().await?),
            ReportKind::Income => Report::Income(self.income(range).await?),
            ReportKind::Clients => Report::Clients(self.clients().await?),
            ReportKind::Rooms => Report::Rooms(self.rooms().await?),
            ReportKind::Invoices => Report::Invoices(self.invoices(range).await?),
            ReportKind::Reservations => Report::Reservations(self.reservations(range).await?),
        })
    }

    /// Deletes every client, room, reservation, invoice and payment.
    #[instrument(skip(self, _confirmed))]
    pub async fn purge_all(&self, _confirmed: ConfirmedPurge) -> Result<PurgeOutcome, DeskError> {
        warn!("Purging all data");
        let outcome: PurgeOutcome = self
            .transport
            .delete_json(&format!("{REPORTS_PATH}/limpiar-todo"))
            .await
            .map_err(DeskError::report("limpiar-todo"))?;
        info!(
            clients = outcome.stats.clients,
            rooms = outcome.stats.rooms,
            reservations = outcome.stats.reservations,
            invoices = outcome.stats.invoices,
            payments = outcome.stats.payments,
            "Purge complete"
        );
        Ok(outcome)
    }

    async fn get<R: DeserializeOwned>(
        &self,
        kind: ReportKind,
        range: DateRange,
    ) -> Result<R, DeskError> {
        let query = if kind.is_ranged() {
            range.to_query()
        } else {
            Default::default()
        };
        let path = format!("{REPORTS_PATH}/{}", kind.slug());
        let report = self
            .transport
            .get_json(&path, query.params())
            .await
            .map_err(|e| {
                warn!(report = kind.slug(), error = %e, "Report failed");
                DeskError::report(kind.slug())(e)
            })?;
        info!(report = kind.slug(), "Report loaded");
        Ok(report)
    }
}
