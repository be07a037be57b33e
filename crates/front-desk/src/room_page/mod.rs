//! # Rooms Page
//!
//! Room catalogue with price and availability flag.

pub mod entity;
pub mod view;

pub use view::RoomView;

use crate::model::Room;
use page_framework::{HttpGateway, HttpTransport, PageController, ResourceClient};

pub type RoomsPage = PageController<RoomView>;

pub fn new(transport: HttpTransport, capacity: usize) -> (HttpGateway<Room>, ResourceClient<Room>) {
    HttpGateway::new(transport, capacity)
}
