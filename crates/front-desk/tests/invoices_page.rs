use chrono::NaiveDate;
use front_desk::export::{invoice_sheet, ExportSink, PrintableSink};
use front_desk::invoice_page::{InvoiceSources, InvoicesPage};
use front_desk::model::{Client, Invoice, InvoiceStatus, Reservation, ReservationStatus};
use page_framework::mock::MockClient;
use page_framework::{PageController, PageUpdate, RecordId, TransportError};
use std::fs;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn invoice(id: i64, reservation: i64) -> Invoice {
    Invoice {
        id: RecordId(id),
        client_id: RecordId(1),
        reservation_id: RecordId(reservation),
        total: 240.5,
        date: date("2025-04-02"),
    }
}

fn booking(id: i64, status: ReservationStatus) -> Reservation {
    Reservation {
        id: RecordId(id),
        client_id: RecordId(1),
        room_id: RecordId(3),
        start: date("2025-03-30"),
        end: date("2025-04-02"),
        status,
    }
}

fn guest() -> Client {
    Client {
        id: RecordId(1),
        name: "Marta <Vélez>".into(),
        identification: "1700000001".into(),
        phone: "0991234567".into(),
        email: "marta@example.com".into(),
        nationality: "Ecuatoriana".into(),
    }
}

struct Mocks {
    invoices: MockClient<Invoice>,
    clients: MockClient<Client>,
    reservations: MockClient<Reservation>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            invoices: MockClient::new(),
            clients: MockClient::new(),
            reservations: MockClient::new(),
        }
    }

    fn page(&self) -> InvoicesPage {
        PageController::new(
            self.invoices.client(),
            InvoiceSources {
                clients: self.clients.client(),
                reservations: self.reservations.client(),
            },
        )
    }

    fn verify(&self) {
        self.invoices.verify();
        self.clients.verify();
        self.reservations.verify();
    }
}

#[tokio::test]
async fn test_status_follows_the_reservation() {
    let mut mocks = Mocks::new();
    mocks
        .invoices
        .expect_list()
        .return_ok(vec![invoice(1, 10), invoice(2, 11), invoice(3, 12), invoice(4, 99)]);
    mocks.clients.expect_list().return_ok(vec![guest()]);
    mocks.reservations.expect_list().return_ok(vec![
        booking(10, ReservationStatus::Confirmed),
        booking(11, ReservationStatus::Cancelled),
        booking(12, ReservationStatus::Pending),
    ]);

    let mut page = mocks.page();
    page.load().unwrap();
    page.settle().await;
    mocks.verify();

    let statuses: Vec<(i64, InvoiceStatus)> =
        page.views().iter().map(|v| (v.id.0, v.status)).collect();
    assert_eq!(
        statuses,
        vec![
            (4, InvoiceStatus::Pending),
            (3, InvoiceStatus::Pending),
            (2, InvoiceStatus::Cancelled),
            (1, InvoiceStatus::Issued),
        ]
    );
    assert_eq!(page.views()[0].reservation, "Reserva #99");
    assert_eq!(page.views()[3].reservation, "#10 (2025-03-30 → 2025-04-02)");
}

#[tokio::test]
async fn test_failed_reservations_lookup_keeps_table_usable() {
    let mut mocks = Mocks::new();
    mocks.invoices.expect_list().return_ok(vec![invoice(1, 10)]);
    mocks.clients.expect_list().return_ok(vec![guest()]);
    mocks
        .reservations
        .expect_list()
        .return_err(TransportError::Status { status: 500, detail: None });

    let mut page = mocks.page();
    page.load().unwrap();
    let updates = page.settle().await;

    assert!(updates.contains(&PageUpdate::LookupFailed { source: "/api/reservas" }));
    assert_eq!(page.views().len(), 1);
    assert_eq!(page.views()[0].client, "Marta <Vélez>");
    assert_eq!(page.views()[0].status, InvoiceStatus::Pending);
    assert_eq!(
        page.take_error().unwrap().user_message(),
        "No se pudieron cargar los datos relacionados"
    );
}

#[tokio::test]
async fn test_printable_sheet_is_escaped() {
    let mut mocks = Mocks::new();
    mocks.invoices.expect_list().return_ok(vec![invoice(7, 10)]);
    mocks.clients.expect_list().return_ok(vec![guest()]);
    mocks
        .reservations
        .expect_list()
        .return_ok(vec![booking(10, ReservationStatus::Confirmed)]);

    let mut page = mocks.page();
    page.load().unwrap();
    page.settle().await;

    let dir = std::env::temp_dir().join(format!("srh-invoices-{}", std::process::id()));
    let path = PrintableSink
        .export(&invoice_sheet(&page.views()[0]), &dir)
        .unwrap();
    assert!(path.ends_with("factura_7.html"));

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("Marta &lt;Vélez&gt;"));
    assert!(html.contains("$240.50"));
    assert!(html.contains("emitida"));
    assert!(html.contains("window.print()"));
    fs::remove_dir_all(&dir).unwrap();
}
