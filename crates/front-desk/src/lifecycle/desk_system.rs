use crate::clients::{ReportsClient, ReservationClient, UserClient};
use crate::config::DeskConfig;
use crate::error::DeskError;
use crate::model::{Client, Invoice, Payment, Room};
use crate::{
    client_page, invoice_page, payment_page, reservation_page, room_page, user_page,
};
use crate::client_page::ClientsPage;
use crate::invoice_page::{InvoiceSources, InvoicesPage};
use crate::payment_page::{PaymentSources, PaymentsPage};
use crate::reservation_page::{ReservationSources, ReservationsPage};
use crate::room_page::RoomsPage;
use crate::user_page::UsersPage;
use page_framework::{HttpTransport, PageController, ResourceApi, ResourceClient};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runtime of the front desk: one gateway task per resource plus the
/// clients talking to them.
pub struct DeskSystem {
    pub clients: ResourceClient<Client>,
    pub rooms: ResourceClient<Room>,
    pub reservations: ReservationClient,
    pub invoices: ResourceClient<Invoice>,
    pub payments: ResourceClient<Payment>,
    pub users: UserClient,
    pub reports: ReportsClient,

    handles: Vec<JoinHandle<()>>,
}

impl DeskSystem {
    /// Starts every gateway against the configured backend. Must run inside
    /// a Tokio runtime.
    pub fn new(config: &DeskConfig) -> Self {
        let transport = HttpTransport::new(config.api.base_url.as_str());
        Self::with_transport(transport, config.api.channel_capacity)
    }

    pub fn with_transport(transport: HttpTransport, capacity: usize) -> Self {
        info!(base_url = transport.base_url(), capacity, "Starting gateways");

        let (client_gateway, clients) = client_page::new(transport.clone(), capacity);
        let (room_gateway, rooms) = room_page::new(transport.clone(), capacity);
        let (reservation_gateway, reservations) = reservation_page::new(transport.clone(), capacity);
        let (invoice_gateway, invoices) = invoice_page::new(transport.clone(), capacity);
        let (payment_gateway, payments) = payment_page::new(transport.clone(), capacity);
        let (user_gateway, users) = user_page::new(transport.clone(), capacity);

        let handles = vec![
            tokio::spawn(client_gateway.run()),
            tokio::spawn(room_gateway.run()),
            tokio::spawn(reservation_gateway.run()),
            tokio::spawn(invoice_gateway.run()),
            tokio::spawn(payment_gateway.run()),
            tokio::spawn(user_gateway.run()),
        ];

        Self {
            clients,
            rooms,
            reservations: ReservationClient::new(reservations),
            invoices,
            payments,
            users: UserClient::new(users),
            reports: ReportsClient::new(transport),
            handles,
        }
    }

    pub fn clients_page(&self) -> ClientsPage {
        PageController::new(self.clients.clone(), ())
    }

    pub fn rooms_page(&self) -> RoomsPage {
        PageController::new(self.rooms.clone(), ())
    }

    pub fn reservations_page(&self) -> ReservationsPage {
        PageController::new(
            self.reservations.inner().clone(),
            ReservationSources {
                clients: self.clients.clone(),
                rooms: self.rooms.clone(),
            },
        )
    }

    pub fn invoices_page(&self) -> InvoicesPage {
        PageController::new(
            self.invoices.clone(),
            InvoiceSources {
                clients: self.clients.clone(),
                reservations: self.reservations.inner().clone(),
            },
        )
    }

    pub fn payments_page(&self) -> PaymentsPage {
        PageController::new(
            self.payments.clone(),
            PaymentSources {
                invoices: self.invoices.clone(),
                clients: self.clients.clone(),
            },
        )
    }

    pub fn users_page(&self) -> UsersPage {
        PageController::new(self.users.inner().clone(), ())
    }

    /// Drops the clients and waits for every gateway to drain.
    pub async fn shutdown(self) -> Result<(), DeskError> {
        info!("Shutting down gateways...");

        let Self {
            clients,
            rooms,
            reservations,
            invoices,
            payments,
            users,
            reports,
            handles,
        } = self;
        drop((clients, rooms, reservations, invoices, payments, users, reports));

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Gateway task failed: {:?}", e);
                return Err(DeskError::Runtime(e.to_string()));
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}
