//! # Page Framework
//!
//! Building blocks for list-and-form pages backed by a REST API: fetch a
//! collection, join it against related collections, filter it in memory, and
//! mutate it optimistically with rollback on failure.
//!
//! The pattern is written once here and reused by every resource.
//!
//! ## Architecture Overview
//!
//! 1. **Resource Layer** ([`Resource`]) - what a record looks like, its
//!    payloads, its endpoint and the optimistic prediction of each change.
//! 2. **Transport Layer** ([`ResourceClient`] + [`HttpGateway`]) - typed
//!    messages over a Tokio channel, turned into REST calls by one gateway
//!    task per resource.
//! 3. **View Layer** ([`ViewModel`], [`Lookup`]) - pure projections of
//!    records joined against lookup lists, with placeholder fallbacks.
//! 4. **Page Layer** ([`PageController`]) - the authoritative record set,
//!    in-flight flags and the optimistic [`Mutation`] state machine.
//!
//! ## Data Flow
//!
//! ```text
//! PageController --ResourceRequest--> HttpGateway --HTTP--> backend
//!       ^                                  |
//!       +-------- PageEvent (channel) <----+
//! ```
//!
//! A page issues its list request and every lookup request at once. Each
//! answer is applied when it arrives, followed by a rebuild of the
//! view-models, so the table renders before the joins are resolved and
//! fills in as they arrive.
//!
//! ## Error Handling
//!
//! - [`TransportError`]: wire-level failure of one request.
//! - [`ValidationError`]: a draft refused before any request is sent.
//! - [`PageError`]: what a page operation reports; its
//!   [`user_message`](PageError::user_message) is what the user sees.
//!
//! ## Testing
//!
//! See the [`mock`] module.

pub mod client;
pub mod client_trait;
pub mod error;
pub mod gateway;
pub mod message;
pub mod mock;
pub mod mutation;
pub mod page;
pub mod resource;
pub mod tracing;
pub mod transport;
pub mod validate;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ResourceClient;
pub use client_trait::ResourceApi;
pub use error::{Operation, PageError, TransportError, ValidationError};
pub use gateway::HttpGateway;
pub use message::{ListQuery, ResourceRequest, Response};
pub use mutation::{rebase, reconcile, Change, Mutation, MutationKind, MutationPhase, Reconciled, Reply};
pub use page::{FormState, InFlight, PageController, PageUpdate, Ticket};
pub use resource::{NoAction, RecordId, Resource, ResourceAction};
pub use transport::HttpTransport;
pub use view::{build_views, filter_views, Lookup, LookupApply, LookupFetch, Lookups, ViewModel};
