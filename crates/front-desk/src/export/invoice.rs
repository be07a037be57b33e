use super::{money, Document};
use crate::invoice_page::InvoiceView;

/// Invoice sheet, from an already joined table row.
pub fn invoice_sheet(invoice: &InvoiceView) -> Document {
    Document::new(
        format!("factura_{}", invoice.id),
        format!("SRH - FACTURA #{}", invoice.id),
    )
    .field("Cliente", &invoice.client)
    .field("Reserva", &invoice.reservation)
    .field("Total", money(invoice.total))
    .field("Fecha", invoice.date)
    .field("Estado", invoice.status)
}
