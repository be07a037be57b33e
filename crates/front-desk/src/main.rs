//! # SRH Front Desk
//!
//! Loads every page once against the configured backend, prints a summary
//! and exports the general report.
//!
//! Configuration comes from `$SRH_CONFIG` (YAML) with `$SRH_API_URL`
//! overriding the backend address. Logging follows `$RUST_LOG`.

use chrono::Local;
use front_desk::export::{self, ExportSink, TextSink};
use front_desk::lifecycle::DeskSystem;
use front_desk::model::DateRange;
use front_desk::model::Report;
use front_desk::{DeskConfig, DeskError};
use page_framework::tracing::setup_tracing;
use page_framework::{PageController, ViewModel};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), DeskError> {
    setup_tracing();

    let config = DeskConfig::from_env()?;
    info!(base_url = %config.api.base_url, "Starting front desk");

    let system = DeskSystem::new(&config);

    println!("{:<14} {:>8}", "PAGE", "ROWS");
    summary("clientes", system.clients_page()).await;
    summary("habitaciones", system.rooms_page()).await;
    summary("reservas", system.reservations_page()).await;
    summary("facturas", system.invoices_page()).await;
    summary("pagos", system.payments_page()).await;
    summary("usuarios", system.users_page()).await;

    let span = tracing::info_span!("general_report");
    let exported = async {
        let general = system.reports.general().await?;
        let document = export::report_document(
            &Report::General(general),
            DateRange::default(),
            Local::now().naive_local(),
        );
        TextSink.export(&document, &config.export.out_dir)
    }
    .instrument(span)
    .await;

    match exported {
        Ok(path) => info!(path = %path.display(), "General report exported"),
        Err(e) => error!(error = %e, message = %e.user_message(), "General report failed"),
    }

    system.shutdown().await?;
    info!("Front desk finished");
    Ok(())
}

/// Loads one page to completion and prints its row count.
async fn summary<V: ViewModel>(name: &str, mut page: PageController<V>) {
    if let Err(e) = page.load() {
        warn!(page = name, error = %e, "Load refused");
        return;
    }
    page.settle().await;

    match page.take_error() {
        Some(e) => {
            warn!(page = name, error = %e, "Page loaded with errors");
            println!("{:<14} {:>8}  ({})", name, page.views().len(), e.user_message());
        }
        None => println!("{:<14} {:>8}", name, page.views().len()),
    }
}
