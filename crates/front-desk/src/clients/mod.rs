//! Type-safe wrappers around [`ResourceClient`](page_framework::ResourceClient)
//! for the resources with actions, plus the reports client.

pub mod report_client;
pub mod reservation_client;
pub mod user_client;

pub use report_client::*;
pub use reservation_client::*;
pub use user_client::*;
