//! One document per report kind.

use super::{file_stamp, money, stamp, Document};
use crate::model::{DateRange, Report};
use chrono::{NaiveDate, NaiveDateTime};

/// Renders a fetched report. `range` is printed as the period of the ranged
/// reports; open ends read `Todos`.
pub fn report_document(report: &Report, range: DateRange, generated: NaiveDateTime) -> Document {
    let kind = report.kind();
    let file_stem = format!("reporte_{}_{}", kind.slug(), file_stamp(generated));
    let title = match report {
        Report::General(_) => "SRH - REPORTE GENERAL DEL SISTEMA",
        Report::Income(_) => "SRH - REPORTE DE INGRESOS",
        Report::Clients(_) => "SRH - REPORTE DE CLIENTES",
        Report::Rooms(_) => "SRH - REPORTE DE HABITACIONES",
        Report::Invoices(_) => "SRH - REPORTE DE FACTURAS",
        Report::Reservations(_) => "SRH - REPORTE DE RESERVAS",
    };

    let mut doc = Document::new(file_stem, title).meta("Generado", stamp(generated));
    if kind.is_ranged() {
        doc = doc.meta("Período", period(range));
    }
    let doc = doc.blank();

    match report {
        Report::General(general) => doc
            .section("RESUMEN GENERAL")
            .field("TOTAL CLIENTES", general.summary.clients)
            .field("TOTAL HABITACIONES", general.summary.rooms)
            .field("TOTAL RESERVAS", general.summary.reservations)
            .field("TOTAL FACTURAS", general.summary.invoices)
            .field("TOTAL PAGOS", general.summary.payments)
            .blank()
            .section("INGRESOS TOTALES")
            .field("TOTAL RECAUDADO", money(general.income.total_collected)),
        Report::Income(income) => doc
            .field("TOTAL RECAUDADO", money(income.total_collected))
            .field("TOTAL FACTURAS", income.invoice_count)
            .field("TOTAL PAGOS", income.payment_count),
        Report::Clients(clients) => {
            let rows = clients
                .iter()
                .map(|c| {
                    vec![
                        c.client_name.clone(),
                        c.client_identification.clone(),
                        c.reservation_count.to_string(),
                        c.invoice_count.to_string(),
                        money(c.total_paid),
                    ]
                })
                .collect();
            doc.field("TOTAL CLIENTES", clients.len()).blank().table(
                &[
                    "CLIENTE",
                    "Identificación",
                    "Total Reservas",
                    "Total Facturas",
                    "Total Pagado",
                ],
                rows,
            )
        }
        Report::Rooms(rooms) => doc
            .field("TOTAL HABITACIONES", rooms.room_count)
            .field("DISPONIBLES", rooms.available)
            .field("OCUPADAS", rooms.occupied)
            .field("% OCUPACIÓN", format!("{}%", rooms.occupancy_percent)),
        Report::Invoices(invoices) => doc
            .field("TOTAL FACTURAS", invoices.invoice_count)
            .field("TOTAL MONTOS", money(invoices.total_amount))
            .field("EMITIDAS", invoices.issued)
            .field("PENDIENTES", invoices.pending)
            .field("CANCELADAS", invoices.cancelled),
        Report::Reservations(reservations) => doc
            .field("TOTAL RESERVAS", reservations.reservation_count)
            .field("CONFIRMADAS", reservations.confirmed)
            .field("PENDIENTES", reservations.pending)
            .field("CANCELADAS", reservations.cancelled),
    }
}

fn period(range: DateRange) -> String {
    let end = |date: Option<NaiveDate>| date.map_or_else(|| "Todos".to_owned(), |d| d.to_string());
    format!("{} a {}", end(range.start), end(range.end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ExportSink, PrintableSink, TextSink};
    use crate::model::{ClientReport, IncomeReport, RoomReport};
    use page_framework::RecordId;

    fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(10, 4, 5)
            .unwrap()
    }

    #[test]
    fn income_report_prints_period() {
        let report = Report::Income(IncomeReport {
            total_collected: 1520.0,
            invoice_count: 12,
            payment_count: 10,
            start: None,
            end: None,
        });
        let range = DateRange::new(NaiveDate::from_ymd_opt(2025, 4, 1), None);
        let doc = report_document(&report, range, generated());
        assert_eq!(doc.file_stem, "reporte_ingresos_2025-05-01T10-04-05");

        let text = TextSink.render(&doc);
        assert!(text.starts_with("SRH - REPORTE DE INGRESOS\n"));
        assert!(text.contains("Período: 2025-04-01 a Todos\n"));
        assert!(text.contains("TOTAL RECAUDADO: $1520.00\n"));
    }

    #[test]
    fn unranged_report_has_no_period() {
        let report = Report::Rooms(RoomReport {
            room_count: 10,
            available: 7,
            occupied: 3,
            occupancy_percent: 30.0,
            rooms: Vec::new(),
        });
        let text = TextSink.render(&report_document(&report, DateRange::default(), generated()));
        assert!(!text.contains("Período"));
        assert!(text.contains("% OCUPACIÓN: 30%"));
    }

    #[test]
    fn client_report_lists_every_client() {
        let report = Report::Clients(vec![ClientReport {
            client_id: RecordId(1),
            client_name: "Rosa Mena".into(),
            client_identification: "1711111111".into(),
            reservation_count: 2,
            invoice_count: 2,
            total_paid: 230.0,
            reservations: Vec::new(),
        }]);
        let doc = report_document(&report, DateRange::default(), generated());
        let text = TextSink.render(&doc);
        assert!(text.contains("TOTAL CLIENTES: 1"));
        assert!(text.contains("CLIENTE: Rosa Mena\nIdentificación: 1711111111\n"));
        assert!(text.contains("Total Pagado: $230.00"));

        let html = PrintableSink.render(&doc);
        assert!(html.contains("<td>Rosa Mena</td>"));
    }
}
