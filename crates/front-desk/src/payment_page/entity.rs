use crate::model::{Payment, PaymentDraft};
use page_framework::{validate, NoAction, RecordId, Resource, ValidationError};

impl Resource for Payment {
    type Create = PaymentDraft;
    type Update = PaymentDraft;
    type Action = NoAction;

    const PATH: &'static str = "/api/pagos";
    const LABEL: &'static str = "Pago";

    fn id(&self) -> RecordId {
        self.id
    }

    fn provisional(id: RecordId, params: &PaymentDraft) -> Self {
        Self {
            id,
            invoice_id: params.invoice_id.unwrap_or_default(),
            amount: params.amount,
            vat: Some(params.computed_vat()),
            total: Some(params.computed_total()),
            method: params.method.clone(),
            date: params.date.unwrap_or_default(),
            status: Some(params.status.clone()),
        }
    }

    fn apply_update(&mut self, update: &PaymentDraft) {
        let date = update.date.unwrap_or(self.date);
        let invoice_id = update.invoice_id.unwrap_or(self.invoice_id);
        *self = Self {
            invoice_id,
            date,
            ..Self::provisional(self.id, update)
        };
    }

    fn draft(&self) -> PaymentDraft {
        PaymentDraft {
            invoice_id: Some(self.invoice_id),
            amount: self.amount,
            vat: self.vat,
            total: self.total,
            method: self.method.clone(),
            date: Some(self.date),
            status: self.status.clone().unwrap_or_else(|| "aprobado".into()),
        }
    }

    fn validate_create(params: &PaymentDraft) -> Result<(), ValidationError> {
        validate::required_ref("factura_id", params.invoice_id)?;
        validate::at_least("monto", params.amount, 0.01)?;
        validate::required("metodo", &params.method)?;
        validate::required_date("fecha", params.date)?;
        Ok(())
    }

    fn validate_update(update: &PaymentDraft) -> Result<(), ValidationError> {
        Self::validate_create(update)
    }
}
