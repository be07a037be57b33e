//! Errors of the front-desk runtime: configuration, reports, export and
//! system lifecycle.

use page_framework::{PageError, TransportError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error("Report `{report}` failed: {source}")]
    Report {
        report: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("Export failed: {0}")]
    Export(#[from] std::io::Error),

    #[error("Gateway task failed: {0}")]
    Runtime(String),
}

impl DeskError {
    pub fn report(report: &'static str) -> impl FnOnce(TransportError) -> Self {
        move |source| Self::Report { report, source }
    }

    /// Message for the user, with the backend detail when there is one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Page(e) => e.user_message(),
            Self::Report { source, .. } => source
                .detail()
                .map(str::to_owned)
                .unwrap_or_else(|| "No se pudo generar el reporte".to_owned()),
            other => other.to_string(),
        }
    }
}
