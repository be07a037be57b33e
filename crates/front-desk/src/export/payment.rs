use super::{money, stamp, Document};
use crate::payment_page::PaymentView;
use chrono::NaiveDateTime;

/// Payment receipt: subtotal, 15% VAT and total.
pub fn payment_receipt(payment: &PaymentView, generated: NaiveDateTime) -> Document {
    let status = if payment.status.is_empty() {
        "aprobado"
    } else {
        payment.status.as_str()
    };
    Document::new(format!("comprobante_pago_{}", payment.id), "COMPROBANTE DE PAGO")
        .field("ID Pago", payment.id)
        .field("Fecha", payment.date)
        .field("Factura", &payment.invoice)
        .blank()
        .field("SUBTOTAL", money(payment.amount))
        .field("IVA (15%)", money(payment.vat))
        .rule()
        .field("TOTAL", money(payment.total))
        .blank()
        .field("Método", &payment.method_label)
        .field("Estado", status)
        .meta("Generado el", stamp(generated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ExportSink, PrintableSink, TextSink};
    use chrono::NaiveDate;
    use page_framework::RecordId;

    fn view() -> PaymentView {
        PaymentView {
            id: RecordId(6),
            invoice: "Rosa Mena (C.I. 1711111111)".into(),
            amount: 100.0,
            vat: 15.0,
            total: 115.0,
            method: "transferencia".into(),
            method_label: "Transferencia".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
            status: String::new(),
            status_class: "bg-success",
        }
    }

    fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 6)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn receipt_text() {
        let doc = payment_receipt(&view(), generated());
        assert_eq!(doc.file_stem, "comprobante_pago_6");
        let text = TextSink.render(&doc);
        assert!(text.starts_with("COMPROBANTE DE PAGO\n"));
        assert!(text.contains("SUBTOTAL: $100.00\nIVA (15%): $15.00\n"));
        assert!(text.contains("TOTAL: $115.00"));
        assert!(text.contains("Estado: aprobado"));
        assert!(text.contains("Generado el: 06/03/2025, 09:30:00"));
    }

    #[test]
    fn receipt_html_prints_itself() {
        let html = PrintableSink.render(&payment_receipt(&view(), generated()));
        assert!(html.contains("<h1>COMPROBANTE DE PAGO</h1>"));
        assert!(html.contains("window.onload"));
    }
}
