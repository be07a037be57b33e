use chrono::{Local, NaiveDate};
use page_framework::RecordId;
use serde::{Deserialize, Serialize};

/// VAT applied to payments when the form leaves it blank.
pub const VAT_RATE: f64 = 0.15;

/// Accepted payment methods and their display labels.
pub const PAYMENT_METHODS: &[(&str, &str)] = &[
    ("efectivo", "Efectivo"),
    ("debito", "Débito"),
    ("tarjeta-mastercard", "Mastercard"),
    ("tarjeta-visa", "Visa"),
    ("transferencia", "Transferencia"),
    ("otro", "Otro"),
];

/// Unknown methods are shown as sent.
pub fn method_label(method: &str) -> &str {
    PAYMENT_METHODS
        .iter()
        .find(|(value, _)| *value == method)
        .map(|(_, label)| *label)
        .unwrap_or(method)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: RecordId,
    #[serde(rename = "factura_id")]
    pub invoice_id: RecordId,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "iva", default)]
    pub vat: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(rename = "metodo")]
    pub method: String,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
}

impl Payment {
    /// Stored VAT, or the default rate when the backend sent none (or zero).
    pub fn vat_or_default(&self) -> f64 {
        self.vat
            .filter(|vat| *vat != 0.0)
            .unwrap_or(self.amount * VAT_RATE)
    }

    pub fn total_or_default(&self) -> f64 {
        self.total
            .filter(|total| *total != 0.0)
            .unwrap_or(self.amount + self.vat_or_default())
    }

    /// Bootstrap class of the status badge.
    pub fn status_class(&self) -> &'static str {
        match self.status.as_deref().map(str::to_lowercase).as_deref() {
            None | Some("aprobado") => "bg-success",
            Some("anulado") => "bg-danger",
            Some(_) => "bg-secondary",
        }
    }
}

/// Payment form. `vat` and `total` are filled from `amount` when left blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "PaymentBody")]
pub struct PaymentDraft {
    pub invoice_id: Option<RecordId>,
    pub amount: f64,
    pub vat: Option<f64>,
    pub total: Option<f64>,
    pub method: String,
    pub date: Option<NaiveDate>,
    pub status: String,
}

impl Default for PaymentDraft {
    fn default() -> Self {
        Self {
            invoice_id: None,
            amount: 0.0,
            vat: None,
            total: None,
            method: "efectivo".into(),
            date: Some(Local::now().date_naive()),
            status: "aprobado".into(),
        }
    }
}

impl PaymentDraft {
    pub fn computed_vat(&self) -> f64 {
        self.vat.unwrap_or(self.amount * VAT_RATE)
    }

    pub fn computed_total(&self) -> f64 {
        self.total.unwrap_or(self.amount + self.computed_vat())
    }
}

#[derive(Serialize)]
struct PaymentBody {
    factura_id: Option<RecordId>,
    monto: f64,
    iva: f64,
    total: f64,
    metodo: String,
    fecha: Option<NaiveDate>,
    estado: String,
}

impl From<PaymentDraft> for PaymentBody {
    fn from(draft: PaymentDraft) -> Self {
        Self {
            iva: draft.computed_vat(),
            total: draft.computed_total(),
            factura_id: draft.invoice_id,
            monto: draft.amount,
            metodo: draft.method,
            fecha: draft.date,
            estado: draft.status,
        }
    }
}
