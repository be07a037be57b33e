//! # Reservations Page
//!
//! Bookings joined against clients and rooms, with the `confirmar` and
//! `cancelar` status actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`Resource`](page_framework::Resource) implementation and form validation
//! - [`actions`] - [`ReservationAction`] and the [`ReservationsPageExt`] helpers
//! - [`view`] - [`ReservationView`] and its [`ReservationLookups`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut page = system.reservations_page();
//! page.load()?;
//! page.settle().await;
//!
//! page.confirm(RecordId(12))?;
//! page.settle().await;
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod view;

pub use actions::*;
pub use error::*;
pub use view::{ReservationLookups, ReservationSources, ReservationView};

use crate::model::Reservation;
use page_framework::{HttpGateway, HttpTransport, PageController, ResourceClient};

pub type ReservationsPage = PageController<ReservationView>;

pub fn new(
    transport: HttpTransport,
    capacity: usize,
) -> (HttpGateway<Reservation>, ResourceClient<Reservation>) {
    HttpGateway::new(transport, capacity)
}
