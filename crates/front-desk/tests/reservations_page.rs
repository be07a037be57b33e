use chrono::NaiveDate;
use front_desk::model::{Client, Reservation, ReservationDraft, ReservationStatus, Room};
use front_desk::reservation_page::{
    ReservationSources, ReservationView, ReservationsPage, ReservationsPageExt,
};
use page_framework::mock::{create_mock_client, expect_action, expect_list};
use page_framework::{
    MutationKind, PageController, PageError, PageUpdate, RecordId, ResourceAction, ResourceRequest,
    TransportError, ValidationError,
};
use tokio::sync::mpsc;

struct Harness {
    page: ReservationsPage,
    reservations: mpsc::Receiver<ResourceRequest<Reservation>>,
    clients: mpsc::Receiver<ResourceRequest<Client>>,
    rooms: mpsc::Receiver<ResourceRequest<Room>>,
}

fn harness() -> Harness {
    let (reservation_client, reservations) = create_mock_client::<Reservation>(8);
    let (client_client, clients) = create_mock_client::<Client>(8);
    let (room_client, rooms) = create_mock_client::<Room>(8);
    let page = PageController::new(
        reservation_client,
        ReservationSources {
            clients: client_client,
            rooms: room_client,
        },
    );
    Harness {
        page,
        reservations,
        clients,
        rooms,
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn reservation(id: i64, client: i64, room: i64, status: ReservationStatus) -> Reservation {
    Reservation {
        id: RecordId(id),
        client_id: RecordId(client),
        room_id: RecordId(room),
        start: date("2025-09-01"),
        end: date("2025-09-03"),
        status,
    }
}

fn guest(id: i64, name: &str) -> Client {
    Client {
        id: RecordId(id),
        name: name.to_string(),
        identification: "0102030405".to_string(),
        phone: String::new(),
        email: String::new(),
        nationality: String::new(),
    }
}

fn room(id: i64, number: &str, available: bool) -> Room {
    Room {
        id: RecordId(id),
        number: number.to_string(),
        kind: "doble".to_string(),
        price: 55.0,
        available,
    }
}

/// Loads the page, answering the lookups in the given order.
async fn loaded(rooms_first: bool) -> Harness {
    let mut h = harness();
    h.page.load().unwrap();

    let (_, respond_to) = expect_list(&mut h.reservations).await.unwrap();
    respond_to
        .send(Ok(vec![
            reservation(1, 10, 20, ReservationStatus::Pending),
            reservation(2, 11, 21, ReservationStatus::Cancelled),
        ]))
        .unwrap();
    h.page.next_event().await;
    assert_eq!(h.page.views()[1].client, "Cliente #10");
    assert_eq!(h.page.views()[1].room, "Hab #20");

    let (_, answer_clients) = expect_list(&mut h.clients).await.unwrap();
    let (_, answer_rooms) = expect_list(&mut h.rooms).await.unwrap();
    let clients = vec![guest(10, "Irene Solís"), guest(11, "Tomás Ríos")];
    let rooms = vec![room(20, "101", true), room(21, "102", true), room(22, "103", false)];
    if rooms_first {
        answer_rooms.send(Ok(rooms)).unwrap();
        h.page.next_event().await;
        assert_eq!(h.page.views()[1].client, "Cliente #10");
        assert_eq!(h.page.views()[1].room, "101");
        answer_clients.send(Ok(clients)).unwrap();
    } else {
        answer_clients.send(Ok(clients)).unwrap();
        h.page.next_event().await;
        assert_eq!(h.page.views()[1].client, "Irene Solís");
        assert_eq!(h.page.views()[1].room, "Hab #20");
        answer_rooms.send(Ok(rooms)).unwrap();
    }
    h.page.settle().await;
    h
}

#[tokio::test]
async fn test_lookups_resolve_in_either_order() {
    let a = loaded(true).await;
    let b = loaded(false).await;

    let views: &[ReservationView] = a.page.views();
    assert_eq!(views, b.page.views());
    assert_eq!(views[1].client, "Irene Solís");
    assert_eq!(views[1].room, "101");
    assert_eq!(views[0].status, "cancelada");
    assert_eq!(views[0].badge, "srh-b-busy");
}

#[tokio::test]
async fn test_end_before_start_is_rejected_without_request() {
    let mut h = loaded(true).await;
    *h.page.draft_mut() = ReservationDraft {
        client_id: Some(RecordId(10)),
        room_id: Some(RecordId(21)),
        start: Some(date("2025-10-05")),
        end: Some(date("2025-10-02")),
        status: ReservationStatus::Pending,
    };

    let err = h.page.submit().unwrap_err();
    assert!(matches!(err, PageError::Invalid(ValidationError::DateOrder { .. })));
    assert_eq!(h.page.records().len(), 2);
    assert!(!h.page.flags().saving());
    assert!(h.reservations.try_recv().is_err());
}

#[tokio::test]
async fn test_confirm_is_optimistic() {
    let mut h = loaded(true).await;

    let ticket = h.page.confirm(RecordId(1)).unwrap();
    assert_eq!(h.page.record(RecordId(1)).unwrap().status, ReservationStatus::Confirmed);
    assert_eq!(h.page.cancel(RecordId(1)), Err(PageError::Busy));

    let (id, action, respond_to) = expect_action(&mut h.reservations).await.unwrap();
    assert_eq!(id, RecordId(1));
    assert_eq!(action.segment(), "confirmar");
    respond_to
        .send(Ok(reservation(1, 10, 20, ReservationStatus::Confirmed)))
        .unwrap();

    assert_eq!(
        h.page.next_event().await,
        Some(PageUpdate::Confirmed { ticket, kind: MutationKind::Action("confirmar") })
    );
    let view = h.page.views().iter().find(|v| v.id == RecordId(1)).unwrap();
    assert_eq!(view.status, "confirmada");
    assert_eq!(view.badge, "srh-b-ok");
}

#[tokio::test]
async fn test_rejected_cancel_restores_status_and_shows_detail() {
    let mut h = loaded(true).await;

    h.page.cancel(RecordId(1)).unwrap();
    assert_eq!(h.page.record(RecordId(1)).unwrap().status, ReservationStatus::Cancelled);

    let (_, _, respond_to) = expect_action(&mut h.reservations).await.unwrap();
    respond_to
        .send(Err(TransportError::Status {
            status: 400,
            detail: Some("La reserva ya fue facturada".into()),
        }))
        .unwrap();
    h.page.settle().await;

    assert_eq!(h.page.record(RecordId(1)).unwrap().status, ReservationStatus::Pending);
    assert_eq!(
        h.page.take_error().unwrap().user_message(),
        "La reserva ya fue facturada"
    );
}

#[tokio::test]
async fn test_available_rooms_skip_held_and_flagged_rooms() {
    let mut h = loaded(true).await;

    // 20 is held by a pending reservation, 21 only by a cancelled one,
    // 22 is flagged occupied
    let numbers: Vec<&str> = h.page.available_rooms().iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, vec!["102"]);

    h.page.edit(RecordId(1)).unwrap();
    let numbers: Vec<&str> = h.page.available_rooms().iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, vec!["101", "102"]);
}

#[tokio::test]
async fn test_answer_after_close_is_dropped_silently() {
    let mut h = loaded(true).await;
    h.page.confirm(RecordId(1)).unwrap();
    h.page.close();

    let (_, _, respond_to) = expect_action(&mut h.reservations).await.unwrap();
    respond_to
        .send(Err(TransportError::Network("connection reset".into())))
        .unwrap();

    assert_eq!(h.page.settle().await, vec![PageUpdate::Ignored]);
    assert!(h.page.take_error().is_none());
    assert!(!h.page.flags().is_busy(RecordId(1)));
    assert_eq!(h.page.confirm(RecordId(2)), Err(PageError::Closed));
}
