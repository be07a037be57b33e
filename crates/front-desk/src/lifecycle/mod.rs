//! # System Lifecycle
//!
//! Starts one [`HttpGateway`](page_framework::HttpGateway) per resource,
//! hands out the clients and builds pages wired to them.
//!
//! ```rust,ignore
//! let system = DeskSystem::new(&config);
//! let mut page = system.reservations_page();
//! page.load()?;
//! page.settle().await;
//! drop(page);
//! system.shutdown().await?;
//! ```
//!
//! Pages hold clones of the clients, so every page must be dropped before
//! [`DeskSystem::shutdown`] can finish.

pub mod desk_system;

pub use desk_system::DeskSystem;
