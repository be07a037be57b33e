//! # Users Page
//!
//! Staff accounts with roles and the `activar` / `desactivar` actions.
//!
//! - [`entity`] - [`Resource`](page_framework::Resource) implementation for [`User`]
//! - [`actions`] - [`UserAction`] and [`UsersPageExt`]
//! - [`view`] - [`UserView`]

pub mod actions;
pub mod entity;
pub mod error;
pub mod view;

pub use actions::*;
pub use error::*;
pub use view::UserView;

use crate::model::User;
use page_framework::{HttpGateway, HttpTransport, PageController, ResourceClient};

pub type UsersPage = PageController<UserView>;

pub fn new(transport: HttpTransport, capacity: usize) -> (HttpGateway<User>, ResourceClient<User>) {
    HttpGateway::new(transport, capacity)
}
