//! # Payments Page
//!
//! Payments against invoices. VAT and total are filled in from the amount
//! when the form leaves them blank, and new payments are sent as
//! `aprobado`.

pub mod entity;
pub mod view;

pub use view::{PaymentLookups, PaymentSources, PaymentView};

use crate::model::Payment;
use page_framework::{HttpGateway, HttpTransport, PageController, ResourceClient};

pub type PaymentsPage = PageController<PaymentView>;

pub fn new(transport: HttpTransport, capacity: usize) -> (HttpGateway<Payment>, ResourceClient<Payment>) {
    HttpGateway::new(transport, capacity)
}
