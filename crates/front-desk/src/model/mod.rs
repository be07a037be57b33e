//! Wire models of the SRH backend.
//!
//! Field names follow the backend's Spanish JSON keys through `serde(rename)`.
//! The [`Resource`](page_framework::Resource) implementations live next to
//! each page, in its `entity` module.

pub mod client;
pub mod invoice;
pub mod payment;
pub mod report;
pub mod reservation;
pub mod room;
pub mod user;

pub use client::{Client, ClientPayload};
pub use invoice::{Invoice, InvoiceDraft, InvoiceStatus};
pub use payment::{method_label, Payment, PaymentDraft, PAYMENT_METHODS, VAT_RATE};
pub use report::*;
pub use reservation::{Reservation, ReservationDraft, ReservationStatus};
pub use room::{Room, RoomPayload};
pub use user::{role_badge, role_label, role_values, User, UserDraft, ROLES};
