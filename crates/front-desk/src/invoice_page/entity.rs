use crate::model::{Invoice, InvoiceDraft};
use page_framework::{validate, NoAction, RecordId, Resource, ValidationError};

impl Resource for Invoice {
    type Create = InvoiceDraft;
    type Update = InvoiceDraft;
    type Action = NoAction;

    const PATH: &'static str = "/api/facturas";
    const LABEL: &'static str = "Factura";

    fn id(&self) -> RecordId {
        self.id
    }

    fn provisional(id: RecordId, params: &InvoiceDraft) -> Self {
        Self {
            id,
            client_id: params.client_id.unwrap_or_default(),
            reservation_id: params.reservation_id.unwrap_or_default(),
            total: params.total,
            date: params.date.unwrap_or_default(),
        }
    }

    fn apply_update(&mut self, update: &InvoiceDraft) {
        if let Some(client_id) = update.client_id {
            self.client_id = client_id;
        }
        if let Some(reservation_id) = update.reservation_id {
            self.reservation_id = reservation_id;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        self.total = update.total;
    }

    fn draft(&self) -> InvoiceDraft {
        InvoiceDraft {
            client_id: Some(self.client_id),
            reservation_id: Some(self.reservation_id),
            total: self.total,
            date: Some(self.date),
        }
    }

    fn validate_create(params: &InvoiceDraft) -> Result<(), ValidationError> {
        validate::required_ref("cliente_id", params.client_id)?;
        validate::required_ref("reserva_id", params.reservation_id)?;
        validate::at_least("total", params.total, 0.0)?;
        validate::required_date("fecha", params.date)?;
        Ok(())
    }

    fn validate_update(update: &InvoiceDraft) -> Result<(), ValidationError> {
        Self::validate_create(update)
    }
}
