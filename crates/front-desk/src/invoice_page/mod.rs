//! # Invoices Page
//!
//! Invoices joined against clients and reservations. The invoice status is
//! derived from its reservation on every rebuild, so confirming or
//! cancelling a booking shows up here on the next load.

pub mod entity;
pub mod view;

pub use view::{InvoiceLookups, InvoiceSources, InvoiceView};

use crate::model::Invoice;
use page_framework::{HttpGateway, HttpTransport, PageController, ResourceClient};

pub type InvoicesPage = PageController<InvoiceView>;

pub fn new(transport: HttpTransport, capacity: usize) -> (HttpGateway<Invoice>, ResourceClient<Invoice>) {
    HttpGateway::new(transport, capacity)
}
