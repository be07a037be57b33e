use crate::model::{method_label, Client, Invoice, Payment};
use chrono::NaiveDate;
use page_framework::{Lookup, LookupFetch, Lookups, RecordId, ResourceClient, ViewModel};

#[derive(Clone)]
pub struct PaymentSources {
    pub invoices: ResourceClient<Invoice>,
    pub clients: ResourceClient<Client>,
}

#[derive(Debug, Default)]
pub struct PaymentLookups {
    pub invoices: Lookup<Invoice>,
    pub clients: Lookup<Client>,
}

impl PaymentLookups {
    /// `Name (C.I. ident)` once both the invoice and its client are
    /// known, `Factura #id` otherwise.
    pub fn invoice_label(&self, invoice_id: RecordId) -> String {
        self.invoices
            .get(invoice_id)
            .and_then(|invoice| self.clients.get(invoice.client_id))
            .map(|client| format!("{} (C.I. {})", client.name, client.identification))
            .unwrap_or_else(|| Lookup::<Invoice>::placeholder(invoice_id))
    }
}

impl Lookups for PaymentLookups {
    type Sources = PaymentSources;

    fn fetches(sources: &PaymentSources) -> Vec<LookupFetch<Self>> {
        vec![
            LookupFetch::<Self>::of(&sources.invoices, |l| &mut l.invoices),
            LookupFetch::<Self>::of(&sources.clients, |l| &mut l.clients),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentView {
    pub id: RecordId,
    pub invoice: String,
    pub amount: f64,
    pub vat: f64,
    pub total: f64,
    pub method: String,
    pub method_label: String,
    pub date: NaiveDate,
    pub status: String,
    pub status_class: &'static str,
}

impl ViewModel for PaymentView {
    type Record = Payment;
    type Lookups = PaymentLookups;

    fn build(payment: &Payment, lookups: &PaymentLookups) -> Self {
        Self {
            id: payment.id,
            invoice: lookups.invoice_label(payment.invoice_id),
            amount: payment.amount,
            vat: payment.vat_or_default(),
            total: payment.total_or_default(),
            method: payment.method.clone(),
            method_label: method_label(&payment.method).to_owned(),
            date: payment.date,
            status: payment.status.clone().unwrap_or_default(),
            status_class: payment.status_class(),
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn searchable(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.id, self.invoice, self.amount, self.method, self.date, self.status
        )
    }
}
