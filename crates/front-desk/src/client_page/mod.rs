//! # Clients Page
//!
//! Guest registry: list, search, create, edit and delete clients.
//!
//! - [`entity`] - [`Resource`](page_framework::Resource) implementation for [`Client`]
//! - [`view`] - [`ClientView`], the table row
//! - [`new()`] - Factory for the gateway and its client

pub mod entity;
pub mod view;

pub use view::ClientView;

use crate::model::Client;
use page_framework::{HttpGateway, HttpTransport, PageController, ResourceClient};

pub type ClientsPage = PageController<ClientView>;

/// Creates the clients gateway and its client.
pub fn new(transport: HttpTransport, capacity: usize) -> (HttpGateway<Client>, ResourceClient<Client>) {
    HttpGateway::new(transport, capacity)
}
