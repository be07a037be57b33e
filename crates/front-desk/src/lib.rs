//! # SRH Front Desk
//!
//! The hotel domain on top of [`page_framework`]: clients, rooms,
//! reservations, invoices, payments, staff users and reports.
//!
//! - **[model]**: wire records of the SRH backend.
//! - **Pages** ([`client_page`], [`room_page`], [`reservation_page`],
//!   [`invoice_page`], [`payment_page`], [`user_page`]): one
//!   [`Resource`](page_framework::Resource) and one
//!   [`ViewModel`](page_framework::ViewModel) each.
//! - **[clients]**: typed wrappers for the resources with actions, and the
//!   reports client.
//! - **[export]**: invoice sheets, payment receipts and reports as text or
//!   printable HTML.
//! - **[lifecycle]**: the [`DeskSystem`](lifecycle::DeskSystem) runtime.

pub mod client_page;
pub mod clients;
pub mod config;
pub mod error;
pub mod export;
pub mod invoice_page;
pub mod lifecycle;
pub mod model;
pub mod payment_page;
pub mod reservation_page;
pub mod room_page;
pub mod user_page;

pub use config::DeskConfig;
pub use error::DeskError;
